use sea_orm::{EntityTrait, IntoActiveModel};
use uuid::Uuid;

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn employee<'a>(&'a mut self) -> EmployeeFixtures<'a> {
        EmployeeFixtures { test: self }
    }
}

pub struct EmployeeFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> EmployeeFixtures<'a> {
    pub async fn insert_mock_employee(
        &self,
        office_id: Uuid,
        salary: f64,
    ) -> Result<entity::employee::Model, TestError> {
        let employee = factory::mock_employee_model(office_id, salary);

        entity::prelude::Employee::insert(employee.clone().into_active_model())
            .exec(&self.test.db)
            .await?;

        Ok(employee)
    }

    /// Inserts one employee per entry, named `Employee 01`, `Employee 02`, ...
    pub async fn insert_mock_employees_named(
        &self,
        office_id: Uuid,
        salaries: &[f64],
    ) -> Result<Vec<entity::employee::Model>, TestError> {
        let mut employees = Vec::with_capacity(salaries.len());

        for (index, salary) in salaries.iter().enumerate() {
            let mut employee = factory::mock_employee_model(office_id, *salary);
            employee.name = format!("Employee {:02}", index + 1);

            entity::prelude::Employee::insert(employee.clone().into_active_model())
                .exec(&self.test.db)
                .await?;

            employees.push(employee);
        }

        Ok(employees)
    }
}
