//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod caldav_notification_adapter;
mod directions_adapter;
mod log_notification_sink;

pub use caldav_notification_adapter::CalDavNotificationAdapter;
pub use directions_adapter::DirectionsItineraryAdapter;
pub use log_notification_sink::LogNotificationSink;
