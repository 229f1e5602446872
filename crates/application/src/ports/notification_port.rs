//! Notification sink port
//!
//! Defines the interface for persisting a reminder or alert so that a
//! user-facing notification fires.

use async_trait::async_trait;
use domain::entities::NotificationPayload;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// What the sink reports back for an accepted payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Sink-specific identifier of the stored notification
    pub reference: String,
    /// Optional link to the stored notification, for display only
    pub link: Option<String>,
}

impl DeliveryReceipt {
    /// Create a receipt without a link
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            link: None,
        }
    }

    /// Attach a display link
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

/// Port for notification sinks
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NotificationSinkPort: Send + Sync {
    /// Store the payload; an error means the sink refused or failed
    async fn deliver(
        &self,
        payload: &NotificationPayload,
    ) -> Result<DeliveryReceipt, ApplicationError>;
}
