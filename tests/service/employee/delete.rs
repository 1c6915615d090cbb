//! Tests for EmployeeService::delete method.

use roster::{model::command::EmployeeDeleteCommand, service::employee::EmployeeService};
use roster_test_utils::prelude::*;
use sea_orm::EntityTrait;
use uuid::Uuid;

use crate::setup::{create_command, office_with_total, service_test_setup};

/// Tests deleting an existing employee.
///
/// Verifies that the row is removed and the office total drops by the full salary
/// with the employee unlisted.
///
/// Expected: Ok(Some) with office total back to 100
#[tokio::test]
async fn subtracts_salary_from_office_total() -> Result<(), TestError> {
    let office = office_with_total("Head office", 100.0);
    let setup = service_test_setup(&[office.clone()]).await;
    let service = EmployeeService::new(&setup.test.db, &setup.bus);

    let created = service
        .create(create_command(office.id, "Ada", 25.0))
        .await
        .expect("Failed to create employee");

    let result = service
        .delete(EmployeeDeleteCommand { id: created.id })
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap(), Some(created.clone()));

    let stored = entity::prelude::Employee::find_by_id(created.id)
        .one(&setup.test.db)
        .await?;
    assert!(stored.is_none());

    let office = setup.office(office.id).await;
    assert_eq!(office.monthly_salary_expenses, 100.0);
    assert!(office.employee_list.is_empty());
    assert_eq!(office.processed_events.len(), 2);

    Ok(())
}

/// Tests deleting an employee that does not exist.
///
/// Expected: Ok(None) with nothing published
#[tokio::test]
async fn returns_none_for_missing_employee() -> Result<(), TestError> {
    let office = office_with_total("Head office", 100.0);
    let setup = service_test_setup(&[office.clone()]).await;
    let service = EmployeeService::new(&setup.test.db, &setup.bus);

    let result = service
        .delete(EmployeeDeleteCommand { id: Uuid::new_v4() })
        .await;

    assert!(matches!(result, Ok(None)));
    assert!(setup.office(office.id).await.processed_events.is_empty());

    Ok(())
}
