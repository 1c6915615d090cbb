//! Tests for EmployeeService::update method.
//!
//! This module verifies salary difference notifications within one office, the
//! delete-then-add sequence when an employee moves office, and the not found policy.

use roster::{
    data::document::DocumentRepository,
    model::{command::EmployeeUpdateCommand, employee::Employee},
    service::employee::EmployeeService,
};
use roster_test_utils::prelude::*;
use uuid::Uuid;

use crate::setup::{create_command, office_with_total, service_test_setup};

fn update_command(
    employee: &Employee,
    office_id: Uuid,
    name: &str,
    salary: f64,
) -> EmployeeUpdateCommand {
    EmployeeUpdateCommand {
        id: employee.id,
        office_id,
        name: name.to_string(),
        email: employee.email.clone(),
        phone: employee.phone.clone(),
        salary,
    }
}

/// Tests updating an employee within the same office.
///
/// Verifies that only the salary difference is applied to the office total and
/// that the listed name follows the rename.
///
/// Expected: Ok with office total 100 + 25 + 15 = 140
#[tokio::test]
async fn applies_salary_difference() -> Result<(), TestError> {
    let office = office_with_total("Head office", 100.0);
    let setup = service_test_setup(&[office.clone()]).await;
    let service = EmployeeService::new(&setup.test.db, &setup.bus);

    let created = service
        .create(create_command(office.id, "Ada", 25.0))
        .await
        .expect("Failed to create employee");

    let result = service
        .update(update_command(&created, office.id, "Ada Lovelace", 40.0))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let updated = result.unwrap().expect("Employee should exist");
    assert_eq!(updated.salary, 40.0);

    let office = setup.office(office.id).await;
    assert_eq!(office.monthly_salary_expenses, 140.0);
    assert_eq!(office.employee_list.len(), 1);
    assert_eq!(office.employee_list[0].name, "Ada Lovelace");

    Ok(())
}

/// Tests lowering a salary below the office total.
///
/// Verifies that a negative difference reduces the total and never takes it below zero.
///
/// Expected: Ok with office total clamped to 0
#[tokio::test]
async fn clamps_total_on_salary_cut() -> Result<(), TestError> {
    let office = office_with_total("Head office", 0.0);
    let setup = service_test_setup(&[office.clone()]).await;
    let service = EmployeeService::new(&setup.test.db, &setup.bus);

    let created = service
        .create(create_command(office.id, "Ada", 25.0))
        .await
        .expect("Failed to create employee");
    let mut office_doc = setup.office(office.id).await;
    office_doc.monthly_salary_expenses = 5.0;
    setup
        .offices
        .replace(office_doc)
        .await
        .expect("Failed to replace office");

    let result = service
        .update(update_command(&created, office.id, "Ada", 10.0))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(setup.office(office.id).await.monthly_salary_expenses, 0.0);

    Ok(())
}

/// Tests moving an employee to another office.
///
/// Verifies that the old office loses the full previous salary and the listing,
/// while the new office gains the full new salary and the listing.
///
/// Expected: Ok with old office back to 0 and new office at 35
#[tokio::test]
async fn moves_employee_between_offices() -> Result<(), TestError> {
    let from = office_with_total("North office", 0.0);
    let to = office_with_total("South office", 0.0);
    let setup = service_test_setup(&[from.clone(), to.clone()]).await;
    let service = EmployeeService::new(&setup.test.db, &setup.bus);

    let created = service
        .create(create_command(from.id, "Ada", 30.0))
        .await
        .expect("Failed to create employee");

    let result = service
        .update(update_command(&created, to.id, "Ada", 35.0))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap().map(|employee| employee.office_id), Some(to.id));

    let from = setup.office(from.id).await;
    assert_eq!(from.monthly_salary_expenses, 0.0);
    assert!(from.employee_list.is_empty());

    let to = setup.office(to.id).await;
    assert_eq!(to.monthly_salary_expenses, 35.0);
    assert_eq!(to.employee_list.len(), 1);
    assert_eq!(to.employee_list[0].id, created.id);

    Ok(())
}

/// Tests updating an employee that does not exist.
///
/// Verifies that nothing is stored and no notification reaches the office.
///
/// Expected: Ok(None) with the office untouched
#[tokio::test]
async fn returns_none_for_missing_employee() -> Result<(), TestError> {
    let office = office_with_total("Head office", 100.0);
    let setup = service_test_setup(&[office.clone()]).await;
    let service = EmployeeService::new(&setup.test.db, &setup.bus);

    let missing = Employee {
        id: Uuid::new_v4(),
        office_id: office.id,
        name: "Ghost".to_string(),
        email: "ghost@example.com".to_string(),
        phone: "555-0199".to_string(),
        salary: 10.0,
    };

    let result = service
        .update(update_command(&missing, office.id, "Ghost", 20.0))
        .await;

    assert!(matches!(result, Ok(None)));
    assert_eq!(setup.office(office.id).await, office);

    Ok(())
}
