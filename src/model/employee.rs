use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An employee assigned to an office, salary is monthly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub office_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub salary: f64,
}
