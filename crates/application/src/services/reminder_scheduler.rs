//! Reminder scheduling
//!
//! Turns a departure time into the instant the reminder should fire.

use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use domain::entities::ReminderPlan;

/// Compute when to remind the rider about a departure
///
/// The reminder fires `lead_minutes` before departure. If that instant has
/// already passed, the reminder fires `now` and `minutes_before` becomes the
/// whole minutes left until departure. Returns `None` once the bus has left
/// (`now` after `departure`).
#[must_use]
pub fn plan_reminder(
    departure: DateTime<Tz>,
    lead_minutes: u32,
    now: DateTime<Tz>,
) -> Option<ReminderPlan> {
    let naive = departure - Duration::minutes(i64::from(lead_minutes));
    if naive >= now {
        return Some(ReminderPlan {
            reminder_at: naive,
            minutes_before: lead_minutes,
            clamped: false,
        });
    }

    if now > departure {
        return None;
    }

    let remaining = (departure - now).num_minutes();
    Some(ReminderPlan {
        reminder_at: now,
        minutes_before: u32::try_from(remaining).unwrap_or(0),
        clamped: true,
    })
}
