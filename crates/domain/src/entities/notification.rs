//! Notification payloads handed to the sink
//!
//! A run produces exactly one payload: either a scheduled reminder for the
//! selected bus or an alert explaining why there is none.

use chrono::{DateTime, Duration};
use chrono_tz::Tz;

/// A calendar-style reminder for a selected bus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledReminder {
    /// Event title
    pub title: String,
    /// Multi-line event body
    pub body: String,
    /// Event start (the bus departure)
    pub start: DateTime<Tz>,
    /// Event end
    pub end: DateTime<Tz>,
    /// Popup lead time in minutes before `start`
    pub popup_minutes: u32,
}

/// An immediate alert for failure and no-match cases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertNotification {
    /// Alert title
    pub title: String,
    /// Free-text reason
    pub body: String,
    /// Event start
    pub start: DateTime<Tz>,
    /// Event end
    pub end: DateTime<Tz>,
}

/// The single outbound payload of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationPayload {
    /// Reminder for the selected bus
    ScheduledReminder(ScheduledReminder),
    /// Alert fired immediately
    Alert(AlertNotification),
}

impl NotificationPayload {
    /// Payload title
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::ScheduledReminder(r) => &r.title,
            Self::Alert(a) => &a.title,
        }
    }

    /// Payload body
    #[must_use]
    pub fn body(&self) -> &str {
        match self {
            Self::ScheduledReminder(r) => &r.body,
            Self::Alert(a) => &a.body,
        }
    }

    /// Event window start
    #[must_use]
    pub const fn start(&self) -> DateTime<Tz> {
        match self {
            Self::ScheduledReminder(r) => r.start,
            Self::Alert(a) => a.start,
        }
    }

    /// Event window end
    #[must_use]
    pub const fn end(&self) -> DateTime<Tz> {
        match self {
            Self::ScheduledReminder(r) => r.end,
            Self::Alert(a) => a.end,
        }
    }

    /// Event window length
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end() - self.start()
    }

    /// Popup lead time in minutes; alerts pop up at their start
    #[must_use]
    pub const fn popup_minutes(&self) -> u32 {
        match self {
            Self::ScheduledReminder(r) => r.popup_minutes,
            Self::Alert(_) => 0,
        }
    }

    /// Check if this is the alert variant
    #[must_use]
    pub const fn is_alert(&self) -> bool {
        matches!(self, Self::Alert(_))
    }

    /// Short label used in logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ScheduledReminder(_) => "reminder",
            Self::Alert(_) => "alert",
        }
    }
}
