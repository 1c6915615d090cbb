//! Office document aggregate.
//!
//! Offices are created out of band in the document store. The payroll handler keeps
//! `employee_list` and `monthly_salary_expenses` in step with employee notifications, and
//! `monthly_salary_expenses` never drops below zero.

use bson::serde_helpers::uuid_1_as_binary;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::data::document::Document;

/// Number of most recent event ids an office remembers.
///
/// This is the replay horizon: an event redelivered after this many newer events were applied
/// to the same office is applied again.
pub const PROCESSED_EVENTS_LIMIT: usize = 256;

/// Office aggregate stored in the `offices` collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Office {
    #[serde(rename = "_id", with = "uuid_1_as_binary")]
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub monthly_salary_expenses: f64,
    #[serde(default)]
    pub employee_list: Vec<EmployeeSummary>,
    /// Ids of the most recent notifications applied to this office, oldest first.
    #[serde(default)]
    pub processed_events: Vec<Uuid>,
}

/// Employee entry embedded in an office document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    #[serde(with = "uuid_1_as_binary")]
    pub id: Uuid,
    pub name: String,
}

impl Office {
    /// Creates an office with no employees and no payroll.
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            address: address.into(),
            monthly_salary_expenses: 0.0,
            employee_list: Vec::new(),
            processed_events: Vec::new(),
        }
    }

    pub fn has_processed(&self, event_id: Uuid) -> bool {
        self.processed_events.contains(&event_id)
    }

    /// Records an applied event, forgetting the oldest ids beyond [`PROCESSED_EVENTS_LIMIT`].
    pub fn record_event(&mut self, event_id: Uuid) {
        self.processed_events.push(event_id);

        let overflow = self
            .processed_events
            .len()
            .saturating_sub(PROCESSED_EVENTS_LIMIT);
        self.processed_events.drain(..overflow);
    }

    /// Appends an employee summary unless the employee is already listed.
    pub fn add_employee(&mut self, id: Uuid, name: &str) {
        if self.employee_list.iter().any(|summary| summary.id == id) {
            return;
        }

        self.employee_list.push(EmployeeSummary {
            id,
            name: name.to_string(),
        });
    }

    /// Renames a listed employee, appending the summary if it is missing.
    pub fn rename_employee(&mut self, id: Uuid, name: &str) {
        match self.employee_list.iter_mut().find(|summary| summary.id == id) {
            Some(summary) => summary.name = name.to_string(),
            None => self.add_employee(id, name),
        }
    }

    pub fn remove_employee(&mut self, id: Uuid) {
        self.employee_list.retain(|summary| summary.id != id);
    }
}

impl Document for Office {
    const COLLECTION: &'static str = "offices";

    fn id(&self) -> Uuid {
        self.id
    }
}
