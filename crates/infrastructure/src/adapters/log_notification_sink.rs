//! Dry-run notification sink
//!
//! Logs the payload instead of storing it anywhere.

use application::error::ApplicationError;
use application::ports::{DeliveryReceipt, NotificationSinkPort};
use async_trait::async_trait;
use domain::entities::NotificationPayload;
use tracing::info;
use uuid::Uuid;

/// Notification sink that only logs what would have been delivered
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotificationSink;

impl LogNotificationSink {
    /// Create a new log sink
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationSinkPort for LogNotificationSink {
    async fn deliver(
        &self,
        payload: &NotificationPayload,
    ) -> Result<DeliveryReceipt, ApplicationError> {
        info!(
            kind = payload.kind(),
            title = payload.title(),
            start = %payload.start(),
            end = %payload.end(),
            popup_minutes = payload.popup_minutes(),
            "Dry run: notification not stored"
        );
        for line in payload.body().lines() {
            info!("  {line}");
        }

        Ok(DeliveryReceipt::new(format!("dry-run-{}", Uuid::new_v4())))
    }
}
