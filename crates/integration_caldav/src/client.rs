//! CalDAV client
//!
//! Creates calendar events on a CalDAV server with a single PUT per event.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::ical::build_vevent;

/// CalDAV client errors
#[derive(Debug, Error)]
pub enum CalDavError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Calendar not found: {0}")]
    CalendarNotFound(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// CalDAV server configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct CalDavConfig {
    /// Server URL (e.g., https://cal.example.com)
    pub server_url: String,
    /// Username
    pub username: String,
    /// Password (excluded from serialization to prevent leaks)
    #[serde(skip_serializing, default)]
    pub password: String,
    /// Calendar path below the server URL (e.g. `/calendars/alice/school`)
    pub calendar_path: Option<String>,
    /// Verify TLS certificates (default: true)
    #[serde(default = "default_true")]
    pub verify_certs: bool,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for CalDavConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalDavConfig")
            .field("server_url", &self.server_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("calendar_path", &self.calendar_path)
            .field("verify_certs", &self.verify_certs)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

const fn default_true() -> bool {
    true
}

const fn default_timeout() -> u64 {
    30
}

/// A calendar event with one display alarm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Unique event ID (UID and resource name)
    pub uid: String,
    /// Event summary/title
    pub summary: String,
    /// Event description
    pub description: Option<String>,
    /// Start time
    pub start: DateTime<Utc>,
    /// End time
    pub end: DateTime<Utc>,
    /// Alarm lead time before `start`; 0 fires at start
    pub alarm_minutes_before: u32,
}

/// CalDAV client trait
#[async_trait]
pub trait CalDavClient: Send + Sync {
    /// Create a new event; returns the URL of the stored resource
    async fn create_event(
        &self,
        calendar: &str,
        event: &CalendarEvent,
    ) -> Result<String, CalDavError>;
}

/// HTTP-based CalDAV client implementation
#[derive(Debug)]
pub struct HttpCalDavClient {
    client: Client,
    config: CalDavConfig,
}

impl HttpCalDavClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the server URL is empty or the HTTP client
    /// cannot be initialized.
    pub fn new(config: CalDavConfig) -> Result<Self, CalDavError> {
        if config.server_url.trim().is_empty() {
            return Err(CalDavError::ConfigurationError(
                "server_url must not be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(!config.verify_certs)
            .user_agent("BusReminder/1.0")
            .build()
            .map_err(|e| CalDavError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Calendar configured as default, falling back to the server URL itself
    #[must_use]
    pub fn default_calendar(&self) -> &str {
        self.config.calendar_path.as_deref().unwrap_or("")
    }

    /// Build the calendar collection URL
    ///
    /// Absolute URLs are used as-is; anything else is taken relative to the
    /// server URL.
    pub(crate) fn calendar_url(&self, calendar: &str) -> String {
        if calendar.starts_with("http://") || calendar.starts_with("https://") {
            return calendar.trim_end_matches('/').to_string();
        }

        let base = self.config.server_url.trim_end_matches('/');
        let path = calendar.trim_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        }
    }

    /// Build the event resource URL
    pub(crate) fn event_url(&self, calendar: &str, uid: &str) -> String {
        format!("{}/{uid}.ics", self.calendar_url(calendar))
    }
}

#[async_trait]
impl CalDavClient for HttpCalDavClient {
    #[instrument(skip(self, event), fields(uid = %event.uid))]
    async fn create_event(
        &self,
        calendar: &str,
        event: &CalendarEvent,
    ) -> Result<String, CalDavError> {
        let url = self.event_url(calendar, &event.uid);
        let ical = build_vevent(event, Utc::now());

        debug!(?url, "Creating calendar event");

        let response = self
            .client
            .put(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header("Content-Type", "text/calendar; charset=utf-8")
            .body(ical)
            .send()
            .await
            .map_err(|e| CalDavError::ConnectionFailed(e.to_string()))?;

        match response.status() {
            StatusCode::UNAUTHORIZED => Err(CalDavError::AuthenticationFailed),
            StatusCode::NOT_FOUND => Err(CalDavError::CalendarNotFound(calendar.to_string())),
            StatusCode::CREATED | StatusCode::NO_CONTENT | StatusCode::OK => {
                debug!(uid = %event.uid, "Event created successfully");
                Ok(url)
            },
            status => Err(CalDavError::RequestFailed(format!("HTTP {status}"))),
        }
    }
}
