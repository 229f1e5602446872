//! Directions API response models
//!
//! Only the fields the bus reminder reads are modelled. Everything the API
//! may omit is optional so that one incomplete step cannot fail the whole
//! response.

use serde::{Deserialize, Serialize};

/// Top-level response of `/directions/json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionsResponse {
    /// `OK`, `ZERO_RESULTS`, `REQUEST_DENIED`, ...
    pub status: String,
    /// Human-readable detail for non-OK statuses
    #[serde(default)]
    pub error_message: Option<String>,
    /// Alternative routes
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl DirectionsResponse {
    /// Whether the API reported success
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }
}

/// One alternative route
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Short description, e.g. "Lewes Rd"
    #[serde(default)]
    pub summary: Option<String>,
    /// Legs between waypoints
    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// A route leg
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    /// Steps in travel order
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A single step of a leg
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// `TRANSIT`, `WALKING`, ...
    #[serde(default)]
    pub travel_mode: String,
    /// Step duration
    #[serde(default)]
    pub duration: Option<TextValue>,
    /// Present on transit steps
    #[serde(default)]
    pub transit_details: Option<TransitDetails>,
}

/// A numeric value with its display text (`duration`, `distance`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextValue {
    /// Numeric value (seconds for durations)
    #[serde(default)]
    pub value: Option<i64>,
    /// Display text, e.g. "18 mins"
    #[serde(default)]
    pub text: Option<String>,
}

/// A timestamp as reported in transit details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeValue {
    /// Unix epoch seconds
    #[serde(default)]
    pub value: Option<i64>,
    /// Local display text, e.g. "8:22 AM"
    #[serde(default)]
    pub text: Option<String>,
    /// IANA timezone of the stop
    #[serde(default)]
    pub time_zone: Option<String>,
}

/// Transit block of a step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitDetails {
    /// Line operated on this step
    #[serde(default)]
    pub line: Option<Line>,
    /// Boarding stop
    #[serde(default)]
    pub departure_stop: Option<Stop>,
    /// Alighting stop
    #[serde(default)]
    pub arrival_stop: Option<Stop>,
    /// Scheduled departure
    #[serde(default)]
    pub departure_time: Option<TimeValue>,
    /// Scheduled arrival
    #[serde(default)]
    pub arrival_time: Option<TimeValue>,
    /// Direction shown on the vehicle
    #[serde(default)]
    pub headsign: Option<String>,
    /// Number of stops ridden
    #[serde(default)]
    pub num_stops: Option<u32>,
}

/// Transit line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Short name, e.g. "48"
    #[serde(default)]
    pub short_name: Option<String>,
    /// Long name, e.g. "Brighton Station - Bevendean"
    #[serde(default)]
    pub name: Option<String>,
}

/// Transit stop
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    /// Stop name
    #[serde(default)]
    pub name: Option<String>,
}
