//! Timezone value object

use std::fmt;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// IANA zone the configured wall-clock bounds are read in
///
/// Kept as the configured text so config files round-trip unchanged;
/// [`Timezone::to_tz`] validates it against the database bundled with
/// `chrono-tz`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timezone(String);

impl Timezone {
    /// Zone used when nothing is configured
    pub const DEFAULT_NAME: &'static str = "Europe/London";

    /// Wrap a zone name without validating it
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Configured zone name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve to a `chrono-tz` zone
    ///
    /// Surrounding whitespace is ignored.
    pub fn to_tz(&self) -> Result<Tz, DomainError> {
        self.0
            .trim()
            .parse::<Tz>()
            .map_err(|_| DomainError::InvalidTimezone(self.0.clone()))
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME)
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Timezone {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<Tz> for Timezone {
    fn from(tz: Tz) -> Self {
        Self::new(tz.name())
    }
}
