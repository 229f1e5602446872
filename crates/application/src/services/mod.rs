//! Application services - Use case implementations

mod bus_reminder_service;
mod candidate_selector;
mod notification_composer;
mod reminder_scheduler;
mod route_filter;

pub use bus_reminder_service::{BusReminderConfig, BusReminderService, RunOutcome, RunReport};
pub use candidate_selector::{
    Rejection, SelectionOutcome, ViolationSummary, check_bounds, select_candidate,
};
pub use notification_composer::{
    ALERT_TITLE, AlertReason, REMINDER_EVENT_MINUTES, compose_alert, compose_reminder,
};
pub use reminder_scheduler::plan_reminder;
pub use route_filter::filter_route_legs;
