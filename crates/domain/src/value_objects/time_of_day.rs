//! Wall-clock time-of-day value object

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A wall-clock time of day with minute precision, written as `HH:MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Create a time of day from hour and minute
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeOfDay` if hour > 23 or minute > 59.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, DomainError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| DomainError::InvalidTimeOfDay(format!("{hour}:{minute}")))
    }

    /// Get the underlying naive time
    #[must_use]
    pub const fn as_naive(&self) -> NaiveTime {
        self.0
    }

    /// Anchor this wall-clock time to a calendar date in a timezone
    ///
    /// When a DST change makes the local time ambiguous the earlier instant
    /// is used.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateTime` if the local time does not
    /// exist on that date (skipped by a DST transition).
    pub fn on(&self, date: NaiveDate, tz: Tz) -> Result<DateTime<Tz>, DomainError> {
        let local = date.and_time(self.0);
        tz.from_local_datetime(&local)
            .earliest()
            .ok_or_else(|| DomainError::InvalidDateTime(format!("{local} does not exist in {tz}")))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for TimeOfDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map(Self)
            .map_err(|_| DomainError::InvalidTimeOfDay(s.to_string()))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}
