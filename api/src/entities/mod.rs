pub mod prelude;

pub mod customers;
pub mod orders;
