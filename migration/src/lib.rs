pub use sea_orm_migration::prelude::*;

mod m20231102_101523_create_customers_table;
mod m20231102_101947_create_orders_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20231102_101523_create_customers_table::Migration),
            Box::new(m20231102_101947_create_orders_table::Migration),
        ]
    }
}
