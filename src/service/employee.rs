//! Employee command handling.
//!
//! Every command is persisted through the generic repository first and its notifications are
//! published afterwards. There is no compensation: when publishing fails the employee write
//! stays committed and the error is returned to the caller.

use sea_orm::DatabaseConnection;

use crate::{
    data::EntityRepository,
    error::Error,
    model::{
        command::{EmployeeCreateCommand, EmployeeDeleteCommand, EmployeeUpdateCommand},
        employee::Employee,
        notification::{EmployeeNotification, EventAction},
    },
    notification::NotificationBus,
};

/// Service handling employee create, update and delete commands.
pub struct EmployeeService<'a> {
    db: &'a DatabaseConnection,
    bus: &'a NotificationBus,
}

impl<'a> EmployeeService<'a> {
    /// Creates a new instance of EmployeeService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    /// - `bus` - Bus notifications are published on
    pub fn new(db: &'a DatabaseConnection, bus: &'a NotificationBus) -> Self {
        Self { db, bus }
    }

    fn repository(&self) -> EntityRepository<'a, Employee, DatabaseConnection> {
        EntityRepository::new(self.db)
    }

    /// Stores a new employee and publishes `Add` with the full salary.
    ///
    /// # Returns
    /// - `Ok(Employee)` - The stored employee
    /// - `Err(Error::DbErr)` - The insert failed
    /// - `Err(Error)` - A notification handler failed, the employee is still stored
    pub async fn create(&self, command: EmployeeCreateCommand) -> Result<Employee, Error> {
        let employee = self.repository().add(command.into_employee()).await?;

        tracing::debug!(
            "Created employee {} in office {}",
            employee.id,
            employee.office_id
        );

        self.bus
            .publish(&EmployeeNotification::new(
                EventAction::Add,
                &employee,
                employee.salary,
            ))
            .await?;

        Ok(employee)
    }

    /// Replaces an employee's details.
    ///
    /// Within the same office `Update` is published with the salary difference. Moving to
    /// another office publishes `Delete` for the old office followed by `Add` for the new one.
    ///
    /// # Returns
    /// - `Ok(Some(Employee))` - The updated employee
    /// - `Ok(None)` - No employee exists with the command's id, nothing is published
    /// - `Err(Error)` - The update or a notification handler failed
    pub async fn update(&self, command: EmployeeUpdateCommand) -> Result<Option<Employee>, Error> {
        let repository = self.repository();

        let Some(previous) = repository.find(command.id).await? else {
            tracing::debug!("No employee {} to update", command.id);
            return Ok(None);
        };
        let Some(updated) = repository.update(command.into_employee()).await? else {
            return Ok(None);
        };

        if previous.office_id == updated.office_id {
            self.bus
                .publish(&EmployeeNotification::new(
                    EventAction::Update,
                    &updated,
                    updated.salary - previous.salary,
                ))
                .await?;
        } else {
            tracing::debug!(
                "Moving employee {} from office {} to office {}",
                updated.id,
                previous.office_id,
                updated.office_id
            );

            self.bus
                .publish(&EmployeeNotification::new(
                    EventAction::Delete,
                    &previous,
                    previous.salary,
                ))
                .await?;
            self.bus
                .publish(&EmployeeNotification::new(
                    EventAction::Add,
                    &updated,
                    updated.salary,
                ))
                .await?;
        }

        Ok(Some(updated))
    }

    /// Removes an employee and publishes `Delete` with the full salary.
    ///
    /// # Returns
    /// - `Ok(Some(Employee))` - The removed employee
    /// - `Ok(None)` - No employee exists with the command's id, nothing is published
    /// - `Err(Error)` - The delete or a notification handler failed
    pub async fn delete(&self, command: EmployeeDeleteCommand) -> Result<Option<Employee>, Error> {
        let Some(removed) = self.repository().remove_by_id(command.id).await? else {
            tracing::debug!("No employee {} to delete", command.id);
            return Ok(None);
        };

        self.bus
            .publish(&EmployeeNotification::new(
                EventAction::Delete,
                &removed,
                removed.salary,
            ))
            .await?;

        Ok(Some(removed))
    }
}
