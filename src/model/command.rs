//! Employee commands handled by [`EmployeeService`](crate::service::employee::EmployeeService).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::employee::Employee;

/// Hire an employee into an office.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmployeeCreateCommand {
    pub office_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub salary: f64,
}

impl EmployeeCreateCommand {
    /// Builds the employee to store, with a fresh id.
    pub fn into_employee(self) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            office_id: self.office_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            salary: self.salary,
        }
    }
}

/// Replace an employee's details, possibly moving them to another office.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmployeeUpdateCommand {
    pub id: Uuid,
    pub office_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub salary: f64,
}

impl EmployeeUpdateCommand {
    pub fn into_employee(self) -> Employee {
        Employee {
            id: self.id,
            office_id: self.office_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            salary: self.salary,
        }
    }
}

/// Remove an employee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDeleteCommand {
    pub id: Uuid,
}
