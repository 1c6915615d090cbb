use roster_test_utils::prelude::*;
use sea_orm::ColumnTrait;
use uuid::Uuid;

use crate::{
    data::{Direction, EntityRepository, Filter, FindOptions, OrderBy, Persistable, QueryLimits},
    error::repository::RepositoryError,
    model::{
        customer::{Address, Customer},
        employee::Employee,
        user::User,
    },
};

mod find_all;

fn mock_employee(office_id: Uuid, name: &str, salary: f64) -> Employee {
    Employee {
        id: Uuid::new_v4(),
        office_id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: "555-0100".to_string(),
        salary,
    }
}

fn mock_customer_with_addresses(name: &str, address_count: usize) -> Customer {
    let addresses = (0..address_count)
        .map(|index| Address::new(format!("{} Main Street", index + 1), "Springfield", "10000"))
        .collect();

    Customer::new(name, format!("{}@example.com", name.to_lowercase()), "555-0100")
        .with_addresses(addresses)
}
