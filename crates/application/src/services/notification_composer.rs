//! Notification composition
//!
//! Pure constructors for the two payloads a run can produce, plus the
//! alert reasons whose `Display` output becomes the alert body.

use std::fmt;

use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use domain::entities::{
    AlertNotification, ItineraryLeg, NotificationPayload, ReminderPlan, ScheduledReminder,
};
use domain::value_objects::{RouteId, TimeOfDay};

use super::candidate_selector::{Rejection, ViolationSummary};

/// Title shared by every alert
pub const ALERT_TITLE: &str = "⚠️ Bus Alert";

/// Length of the calendar event created for a reminder
pub const REMINDER_EVENT_MINUTES: i64 = 5;

/// Build the scheduled reminder for the selected bus
#[must_use]
pub fn compose_reminder(bus: &ItineraryLeg, plan: &ReminderPlan) -> NotificationPayload {
    let heading_to = bus
        .route_long_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(&bus.arrival_stop);

    let body = [
        format!("Bus {} to {heading_to}", bus.route_short_name),
        format!("From: {}", bus.departure_stop),
        format!("Departure: {}", bus.departure_hhmm()),
        format!("Expected arrival: {}", bus.arrival_hhmm()),
        format!("Journey time: {} minutes", bus.duration_minutes),
        String::new(),
        "⏰ Leave now to catch the bus!".to_string(),
    ]
    .join("\n");

    NotificationPayload::ScheduledReminder(ScheduledReminder {
        title: format!("🚌 Bus {} to School", bus.route_short_name),
        body,
        start: bus.departure,
        end: bus.departure + Duration::minutes(REMINDER_EVENT_MINUTES),
        popup_minutes: plan.minutes_before,
    })
}

/// Build an alert that fires straight away
///
/// The event window opens one minute after `now` and lasts one minute.
#[must_use]
pub fn compose_alert(reason: &str, now: DateTime<Tz>) -> NotificationPayload {
    NotificationPayload::Alert(AlertNotification {
        title: ALERT_TITLE.to_string(),
        body: reason.to_string(),
        start: now + Duration::minutes(1),
        end: now + Duration::minutes(2),
    })
}

/// Why a run ended in an alert instead of a reminder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertReason {
    /// The itinerary provider failed or returned a non-OK status
    ProviderUnavailable {
        /// Error detail from the provider call
        detail: String,
        /// Timetable page to check by hand
        fallback_url: Option<String>,
    },
    /// No transit leg of the route was found at all
    NoMatchingRoute {
        /// Target route
        route: RouteId,
        /// Earliest acceptable departure
        min_departure: TimeOfDay,
        /// Latest acceptable arrival
        max_arrival: TimeOfDay,
    },
    /// Legs of the route exist but none fit the window
    NoSuitableCandidate {
        /// Target route
        route: RouteId,
        /// Earliest acceptable departure
        min_departure: TimeOfDay,
        /// Latest acceptable arrival
        max_arrival: TimeOfDay,
        /// Every rejected leg with its violation
        rejections: Vec<Rejection>,
        /// Aggregate counts over `rejections`
        summary: ViolationSummary,
    },
    /// The selected bus left before the run could remind anyone
    AlreadyDeparted {
        /// Target route
        route: RouteId,
        /// Departure of the selected bus
        departure: DateTime<Tz>,
    },
    /// The window could not be placed on today's date
    InvalidCriteria {
        /// Validation error text
        detail: String,
    },
}

impl AlertReason {
    /// Short machine-friendly label for logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ProviderUnavailable { .. } => "provider_unavailable",
            Self::NoMatchingRoute { .. } => "no_matching_route",
            Self::NoSuitableCandidate { .. } => "no_suitable_candidate",
            Self::AlreadyDeparted { .. } => "already_departed",
            Self::InvalidCriteria { .. } => "invalid_criteria",
        }
    }
}

impl fmt::Display for AlertReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProviderUnavailable {
                detail,
                fallback_url,
            } => {
                write!(f, "❌ Unable to check bus times.\n{detail}")?;
                if let Some(url) = fallback_url {
                    write!(f, "\n\nPlease check the bus schedule manually at: {url}")?;
                }
                Ok(())
            },
            Self::NoMatchingRoute {
                route,
                min_departure,
                max_arrival,
            } => write!(
                f,
                "⚠️ No Bus {route} options found.\n\nCriteria: Departs after {min_departure}, arrives by {max_arrival}"
            ),
            Self::NoSuitableCandidate {
                route,
                min_departure,
                max_arrival,
                rejections,
                summary,
            } => {
                writeln!(f, "⚠️ No suitable Bus {route} found.")?;
                writeln!(f)?;
                writeln!(
                    f,
                    "Criteria: Departs after {min_departure}, arrives by {max_arrival}"
                )?;
                for rejection in rejections {
                    let mut problems = Vec::with_capacity(2);
                    if rejection.violation.is_too_early() {
                        problems.push(format!("too early (before {min_departure})"));
                    }
                    if rejection.violation.is_too_late() {
                        problems.push(format!("arrives too late (after {max_arrival})"));
                    }
                    writeln!(
                        f,
                        "{} → {}: {}",
                        rejection.leg.departure_hhmm(),
                        rejection.leg.arrival_hhmm(),
                        problems.join(", ")
                    )?;
                }
                writeln!(
                    f,
                    "{} too early, {} arriving too late",
                    summary.too_early, summary.too_late
                )?;
                writeln!(f)?;
                write!(
                    f,
                    "Please check alternative transport options or an earlier bus."
                )
            },
            Self::AlreadyDeparted { route, departure } => write!(
                f,
                "⚠️ Bus {route} at {} has already left.",
                departure.format("%H:%M")
            ),
            Self::InvalidCriteria { detail } => {
                write!(f, "⚠️ Unable to apply today's bus time window.\n{detail}")
            },
        }
    }
}
