//! CalDAV integration
//!
//! Stores reminder and alert events, each with a display alarm, on a
//! CalDAV server (Baïkal, Radicale, Nextcloud).

pub mod client;
pub mod ical;

pub use client::{CalDavClient, CalDavConfig, CalDavError, CalendarEvent, HttpCalDavClient};
pub use ical::build_vevent;
