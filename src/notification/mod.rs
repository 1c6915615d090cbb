//! In-process notification dispatch.
//!
//! The employee service publishes [`EmployeeNotification`]s on a [`NotificationBus`], which
//! delivers each one to every subscribed [`NotificationHandler`] in subscription order.

pub mod log;
pub mod payroll;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{error::Error, model::notification::EmployeeNotification};

/// Subscriber receiving employee notifications.
#[async_trait]
pub trait NotificationHandler: Send + Sync {
    /// Name used when logging handler failures.
    fn name(&self) -> &'static str;

    async fn handle(&self, notification: &EmployeeNotification) -> Result<(), Error>;
}

/// Publisher fanning notifications out to typed subscribers.
#[derive(Clone, Default)]
pub struct NotificationBus {
    handlers: Vec<Arc<dyn NotificationHandler>>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a subscriber, handlers run in the order they were subscribed.
    pub fn subscribe(mut self, handler: impl NotificationHandler + 'static) -> Self {
        self.handlers.push(Arc::new(handler));
        self
    }

    /// Number of subscribed handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Delivers a notification to every handler.
    ///
    /// A failing handler does not stop delivery to the remaining handlers.
    ///
    /// # Returns
    /// - `Ok(())` - Every handler succeeded
    /// - `Err(Error)` - The first error returned by a handler
    pub async fn publish(&self, notification: &EmployeeNotification) -> Result<(), Error> {
        let mut first_error = None;

        for handler in &self.handlers {
            if let Err(e) = handler.handle(notification).await {
                tracing::error!(
                    "Notification handler {} failed to {}: {:?}",
                    handler.name(),
                    notification,
                    e
                );

                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
