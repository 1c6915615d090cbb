//! Employee lifecycle notifications.
//!
//! The employee service publishes one [`EmployeeNotification`] per office affected by a
//! command. Subscribers receive them through the
//! [`NotificationBus`](crate::notification::NotificationBus).

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::model::employee::Employee;

/// Lifecycle action carried by a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventAction {
    /// Employee joined the office.
    Add,
    /// Employee details or salary changed within the office.
    Update,
    /// Employee left the office.
    Delete,
}

impl fmt::Display for EventAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventAction::Add => write!(f, "add"),
            EventAction::Update => write!(f, "update"),
            EventAction::Delete => write!(f, "delete"),
        }
    }
}

/// Employee event delivered to notification subscribers.
///
/// `salary_delta` is the amount the office payroll changes by: the full salary for `Add`
/// and `Delete`, the difference between new and old salary for `Update`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmployeeNotification {
    /// Unique id of this event, replays of the same id are ignored by the payroll handler.
    pub event_id: Uuid,
    pub employee_id: Uuid,
    pub office_id: Uuid,
    pub name: String,
    pub salary_delta: f64,
    pub action: EventAction,
}

impl EmployeeNotification {
    /// Creates a notification with a fresh event id.
    ///
    /// # Arguments
    /// - `action` - Lifecycle action
    /// - `employee` - Employee the event refers to, its office receives the notification
    /// - `salary_delta` - Payroll change for the office
    pub fn new(action: EventAction, employee: &Employee, salary_delta: f64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            employee_id: employee.id,
            office_id: employee.office_id,
            name: employee.name.clone(),
            salary_delta,
            action,
        }
    }
}

impl fmt::Display for EmployeeNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} employee {} in office {} (salary delta {})",
            self.action, self.employee_id, self.office_id, self.salary_delta
        )
    }
}
