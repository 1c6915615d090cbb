//! Office payroll aggregate maintenance.
//!
//! Each employee notification loads the owning office, applies the event to an owned copy
//! and commits the copy back in one unit of work. Concurrent notifications for the same
//! office are not serialized; the last commit wins.

use async_trait::async_trait;

use crate::{
    data::document::{DocumentRepository, DocumentWrite},
    error::Error,
    model::{
        notification::{EmployeeNotification, EventAction},
        office::Office,
    },
    notification::NotificationHandler,
};

/// Computes the new monthly payroll of an office.
///
/// `Delete` subtracts `delta`, `Add` and `Update` add it. The result is never negative and a
/// NaN result is treated as zero.
///
/// # Arguments
/// - `current_total` - Current monthly salary expenses
/// - `delta` - Salary change carried by the notification
/// - `action` - Lifecycle action of the notification
pub fn recompute_total(current_total: f64, delta: f64, action: EventAction) -> f64 {
    let total = match action {
        EventAction::Delete => current_total - delta,
        EventAction::Add | EventAction::Update => current_total + delta,
    };

    // f64::max returns the other operand when one side is NaN
    total.max(0.0)
}

/// Returns a copy of `office` with the notification applied.
///
/// Updates the payroll total and the employee list and records the event id.
pub fn apply_notification(office: &Office, notification: &EmployeeNotification) -> Office {
    let mut updated = office.clone();

    updated.monthly_salary_expenses = recompute_total(
        office.monthly_salary_expenses,
        notification.salary_delta,
        notification.action,
    );

    match notification.action {
        EventAction::Add => updated.add_employee(notification.employee_id, &notification.name),
        EventAction::Update => {
            updated.rename_employee(notification.employee_id, &notification.name)
        }
        EventAction::Delete => updated.remove_employee(notification.employee_id),
    }

    updated.record_event(notification.event_id);

    updated
}

/// Subscriber keeping office payroll totals and employee lists current.
pub struct OfficePayrollHandler<R: DocumentRepository<Office>> {
    offices: R,
}

impl<R: DocumentRepository<Office>> OfficePayrollHandler<R> {
    /// Creates a new instance of [`OfficePayrollHandler`]
    pub fn new(offices: R) -> Self {
        Self { offices }
    }
}

#[async_trait]
impl<R: DocumentRepository<Office> + 'static> NotificationHandler for OfficePayrollHandler<R> {
    fn name(&self) -> &'static str {
        "office payroll"
    }

    /// Applies a notification to its office.
    ///
    /// # Returns
    /// - `Ok(())` - The office was updated, or the event was already applied
    /// - `Err(Error::OfficeNotFound)` - The notification's office does not exist
    /// - `Err(Error::DocumentError)` - Loading or committing the office failed
    async fn handle(&self, notification: &EmployeeNotification) -> Result<(), Error> {
        tracing::debug!("Processing payroll {}", notification);

        let office = self
            .offices
            .find(notification.office_id)
            .await?
            .ok_or(Error::OfficeNotFound(notification.office_id))?;

        if office.has_processed(notification.event_id) {
            tracing::debug!(
                "Event {} already applied to office {}, skipping",
                notification.event_id,
                office.id
            );
            return Ok(());
        }

        let updated = apply_notification(&office, notification);
        self.offices
            .commit(vec![DocumentWrite::Replace(updated.clone())])
            .await?;

        tracing::debug!(
            "Office {} monthly salary expenses changed from {} to {}",
            office.id,
            office.monthly_salary_expenses,
            updated.monthly_salary_expenses
        );

        Ok(())
    }
}
