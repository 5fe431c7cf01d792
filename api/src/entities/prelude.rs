pub use super::{customers::Entity as Customers, orders::Entity as Orders};
