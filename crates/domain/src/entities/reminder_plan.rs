//! Reminder plan - when to fire the pre-departure reminder

use chrono::DateTime;
use chrono_tz::Tz;

/// Derived reminder timing for a selected bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderPlan {
    /// When the reminder should fire
    pub reminder_at: DateTime<Tz>,
    /// Popup lead time before departure, in whole minutes
    pub minutes_before: u32,
    /// Whether the naive reminder time was in the past and got moved to now
    pub clamped: bool,
}

impl ReminderPlan {
    /// Whether the reminder should be delivered straight away
    #[must_use]
    pub const fn is_immediate(&self) -> bool {
        self.clamped
    }
}
