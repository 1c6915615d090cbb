//! Tests for EmployeeService::create method.
//!
//! This module verifies that creating an employee stores the row and raises the owning
//! office's payroll total, and that a failing subscriber does not undo the stored row.

use roster::{error::Error, service::employee::EmployeeService};
use roster_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::setup::{create_command, office_with_total, service_test_setup};

/// Tests creating an employee in an existing office.
///
/// Verifies that the employee is stored and that the office total grows by the full
/// salary with the employee listed.
///
/// Expected: Ok with office total 100 + 25 = 125 and one summary
#[tokio::test]
async fn adds_salary_to_office_total() -> Result<(), TestError> {
    let office = office_with_total("Head office", 100.0);
    let setup = service_test_setup(&[office.clone()]).await;
    let service = EmployeeService::new(&setup.test.db, &setup.bus);

    let result = service.create(create_command(office.id, "Ada", 25.0)).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let employee = result.unwrap();

    let stored = entity::prelude::Employee::find_by_id(employee.id)
        .one(&setup.test.db)
        .await?;
    assert!(stored.is_some());

    let office = setup.office(office.id).await;
    assert_eq!(office.monthly_salary_expenses, 125.0);
    assert_eq!(office.employee_list.len(), 1);
    assert_eq!(office.employee_list[0].id, employee.id);
    assert_eq!(office.employee_list[0].name, "Ada");

    Ok(())
}

/// Tests creating an employee whose office does not exist.
///
/// Verifies that the notification failure is returned while the employee row
/// stays committed.
///
/// Expected: Err(OfficeNotFound) with the employee still stored
#[tokio::test]
async fn keeps_employee_when_office_missing() -> Result<(), TestError> {
    let missing = office_with_total("Unsaved office", 0.0);
    let setup = service_test_setup(&[]).await;
    let service = EmployeeService::new(&setup.test.db, &setup.bus);

    let result = service.create(create_command(missing.id, "Ada", 25.0)).await;

    assert!(matches!(result, Err(Error::OfficeNotFound(id)) if id == missing.id));

    let stored = entity::prelude::Employee::find()
        .count(&setup.test.db)
        .await?;
    assert_eq!(stored, 1);

    Ok(())
}
