//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the directions and CalDAV adapters, configuration loading and
//! logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, CalDavAppConfig, DirectionsAppConfig, RouteAppConfig};
pub use telemetry::{DEFAULT_LOG_FILTER, LogFormat, LoggingConfig, TelemetryError, init_logging};
