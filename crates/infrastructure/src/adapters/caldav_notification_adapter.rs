//! CalDAV notification adapter - Implements NotificationSinkPort using integration_caldav

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{DeliveryReceipt, NotificationSinkPort};
use async_trait::async_trait;
use chrono::Utc;
use domain::entities::NotificationPayload;
use integration_caldav::{CalDavClient, CalDavError, CalendarEvent};
use tracing::{debug, instrument};
use uuid::Uuid;

/// Adapter that stores each payload as a calendar event with a display alarm
pub struct CalDavNotificationAdapter<C: CalDavClient> {
    client: Arc<C>,
    calendar: String,
}

impl<C: CalDavClient> std::fmt::Debug for CalDavNotificationAdapter<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalDavNotificationAdapter")
            .field("calendar", &self.calendar)
            .finish_non_exhaustive()
    }
}

impl<C: CalDavClient> CalDavNotificationAdapter<C> {
    /// Create a new adapter writing into `calendar`
    pub fn new(client: Arc<C>, calendar: impl Into<String>) -> Self {
        Self {
            client,
            calendar: calendar.into(),
        }
    }

    /// Convert a payload to a calendar event with a fresh UID
    pub fn to_event(payload: &NotificationPayload) -> CalendarEvent {
        CalendarEvent {
            uid: Uuid::new_v4().to_string(),
            summary: payload.title().to_string(),
            description: Some(payload.body().to_string()).filter(|b| !b.is_empty()),
            start: payload.start().with_timezone(&Utc),
            end: payload.end().with_timezone(&Utc),
            alarm_minutes_before: payload.popup_minutes(),
        }
    }

    fn map_error(err: CalDavError) -> ApplicationError {
        match err {
            CalDavError::ConnectionFailed(e) | CalDavError::RequestFailed(e) => {
                ApplicationError::ExternalService(format!("CalDAV: {e}"))
            },
            CalDavError::AuthenticationFailed => {
                ApplicationError::ExternalService("CalDAV authentication failed".into())
            },
            CalDavError::CalendarNotFound(calendar) => {
                ApplicationError::ExternalService(format!("CalDAV calendar not found: {calendar}"))
            },
            CalDavError::ConfigurationError(e) => ApplicationError::Configuration(e),
        }
    }
}

#[async_trait]
impl<C: CalDavClient + 'static> NotificationSinkPort for CalDavNotificationAdapter<C> {
    #[instrument(skip(self, payload), fields(kind = payload.kind(), calendar = %self.calendar))]
    async fn deliver(
        &self,
        payload: &NotificationPayload,
    ) -> Result<DeliveryReceipt, ApplicationError> {
        let event = Self::to_event(payload);

        let url = self
            .client
            .create_event(&self.calendar, &event)
            .await
            .map_err(Self::map_error)?;

        debug!(uid = %event.uid, %url, "Notification stored");
        Ok(DeliveryReceipt::new(event.uid).with_link(url))
    }
}
