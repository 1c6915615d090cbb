pub use sea_orm_migration::prelude::*;

mod m20261012_000001_create_customer_table;
mod m20261012_000002_create_customer_address_table;
mod m20261012_000003_create_user_table;
mod m20261012_000004_create_employee_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261012_000001_create_customer_table::Migration),
            Box::new(m20261012_000002_create_customer_address_table::Migration),
            Box::new(m20261012_000003_create_user_table::Migration),
            Box::new(m20261012_000004_create_employee_table::Migration),
        ]
    }
}
