//! Factories for entity models with predictable mock values.

use uuid::Uuid;

pub fn mock_customer_model(name: &str) -> entity::customer::Model {
    entity::customer::Model {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "555-0100".to_string(),
    }
}

pub fn mock_customer_address_model(
    customer_id: Uuid,
    index: usize,
) -> entity::customer_address::Model {
    entity::customer_address::Model {
        id: Uuid::new_v4(),
        customer_id,
        street: format!("{} Main Street", index + 1),
        city: "Springfield".to_string(),
        postal_code: format!("{:05}", 10000 + index),
    }
}

pub fn mock_employee_model(office_id: Uuid, salary: f64) -> entity::employee::Model {
    entity::employee::Model {
        id: Uuid::new_v4(),
        office_id,
        name: "Mock Employee".to_string(),
        email: "employee@example.com".to_string(),
        phone: "555-0101".to_string(),
        salary,
    }
}

pub fn mock_user_model(cpf: &str) -> entity::user::Model {
    entity::user::Model {
        id: Uuid::new_v4(),
        cpf: cpf.to_string(),
        name: "Mock User".to_string(),
        email: "user@example.com".to_string(),
        phone: "555-0102".to_string(),
    }
}
