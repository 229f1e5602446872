//! Logging infrastructure
//!
//! Console logging through `tracing-subscriber`, human-readable or JSON.

mod logging;

pub use logging::{DEFAULT_LOG_FILTER, LogFormat, LoggingConfig, TelemetryError, init_logging};
