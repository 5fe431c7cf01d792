mod customer;
mod order;

pub use customer::Customer;
pub use order::Order;
