use async_trait::async_trait;

use crate::{
    error::Error, model::notification::EmployeeNotification,
    notification::NotificationHandler,
};

/// Subscriber recording every employee notification in the application log.
pub struct LogHandler;

#[async_trait]
impl NotificationHandler for LogHandler {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn handle(&self, notification: &EmployeeNotification) -> Result<(), Error> {
        let payload = serde_json::to_string(notification).map_err(|e| {
            Error::InternalError(format!(
                "Failed to serialize notification {}: {}",
                notification.event_id, e
            ))
        })?;

        tracing::info!("Employee event {}: {}", notification.event_id, payload);

        Ok(())
    }
}
