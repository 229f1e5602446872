//! Itinerary leg entity - one matched transit ride

use chrono::{DateTime, Duration};
use chrono_tz::Tz;

use crate::value_objects::TravelMode;

/// One transit segment of a proposed journey, parsed and timezone-resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryLeg {
    /// Travel mode of the underlying step
    pub mode: TravelMode,
    /// Route short name (e.g. "48")
    pub route_short_name: String,
    /// Route long name, if the provider reported one
    pub route_long_name: Option<String>,
    /// Boarding stop name
    pub departure_stop: String,
    /// Alighting stop name
    pub arrival_stop: String,
    /// Scheduled departure
    pub departure: DateTime<Tz>,
    /// Expected arrival
    pub arrival: DateTime<Tz>,
    /// Ride duration in whole minutes (floor of seconds / 60)
    pub duration_minutes: u32,
}

impl ItineraryLeg {
    /// Departure formatted as `HH:MM` in the leg's timezone
    #[must_use]
    pub fn departure_hhmm(&self) -> String {
        self.departure.format("%H:%M").to_string()
    }

    /// Arrival formatted as `HH:MM` in the leg's timezone
    #[must_use]
    pub fn arrival_hhmm(&self) -> String {
        self.arrival.format("%H:%M").to_string()
    }

    /// Time spent on board according to the timestamps
    #[must_use]
    pub fn ride_time(&self) -> Duration {
        self.arrival - self.departure
    }
}
