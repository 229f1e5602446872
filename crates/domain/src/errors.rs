//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Route identifier is empty or malformed
    #[error("Invalid route id: {0}")]
    InvalidRouteId(String),

    /// Time of day could not be parsed as HH:MM
    #[error("Invalid time of day: {0}")]
    InvalidTimeOfDay(String),

    /// Timezone is not a known IANA name
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Date/time does not exist or is ambiguous in the target timezone
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
