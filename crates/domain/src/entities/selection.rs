//! Selection criteria - the time window a bus has to fit into

use std::fmt;

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

use crate::errors::DomainError;
use crate::value_objects::{RouteId, TimeOfDay};

/// Target route plus the acceptable departure/arrival window for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionCriteria {
    route: RouteId,
    min_departure: DateTime<Tz>,
    max_arrival: DateTime<Tz>,
}

impl SelectionCriteria {
    /// Create criteria from explicit instants
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if `max_arrival` lies before
    /// `min_departure`, which no leg could ever satisfy.
    pub fn new(
        route: RouteId,
        min_departure: DateTime<Tz>,
        max_arrival: DateTime<Tz>,
    ) -> Result<Self, DomainError> {
        if max_arrival < min_departure {
            return Err(DomainError::ValidationError(format!(
                "max arrival {} is before min departure {}",
                max_arrival.format("%H:%M"),
                min_departure.format("%H:%M")
            )));
        }
        Ok(Self {
            route,
            min_departure,
            max_arrival,
        })
    }

    /// Apply wall-clock bounds to a calendar date in a fixed timezone
    ///
    /// # Errors
    ///
    /// Returns an error if either bound does not exist on that date or the
    /// window is inverted.
    pub fn for_day(
        route: RouteId,
        date: NaiveDate,
        min_departure: TimeOfDay,
        max_arrival: TimeOfDay,
        tz: Tz,
    ) -> Result<Self, DomainError> {
        let min = min_departure.on(date, tz)?;
        let max = max_arrival.on(date, tz)?;
        Self::new(route, min, max)
    }

    /// Target route
    #[must_use]
    pub const fn route(&self) -> &RouteId {
        &self.route
    }

    /// Earliest acceptable departure
    #[must_use]
    pub const fn min_departure(&self) -> DateTime<Tz> {
        self.min_departure
    }

    /// Latest acceptable arrival
    #[must_use]
    pub const fn max_arrival(&self) -> DateTime<Tz> {
        self.max_arrival
    }
}

/// Which time bound(s) a rejected leg violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundViolation {
    /// Departs before the minimum departure
    DepartsTooEarly,
    /// Arrives after the maximum arrival
    ArrivesTooLate,
    /// Both of the above
    Both,
}

impl BoundViolation {
    /// Build from the two independent checks; `None` means no violation
    #[must_use]
    pub const fn from_checks(too_early: bool, too_late: bool) -> Option<Self> {
        match (too_early, too_late) {
            (false, false) => None,
            (true, false) => Some(Self::DepartsTooEarly),
            (false, true) => Some(Self::ArrivesTooLate),
            (true, true) => Some(Self::Both),
        }
    }

    /// Whether the departure bound was violated
    #[must_use]
    pub const fn is_too_early(self) -> bool {
        matches!(self, Self::DepartsTooEarly | Self::Both)
    }

    /// Whether the arrival bound was violated
    #[must_use]
    pub const fn is_too_late(self) -> bool {
        matches!(self, Self::ArrivesTooLate | Self::Both)
    }
}

impl fmt::Display for BoundViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepartsTooEarly => write!(f, "too early"),
            Self::ArrivesTooLate => write!(f, "arrives too late"),
            Self::Both => write!(f, "too early, arrives too late"),
        }
    }
}
