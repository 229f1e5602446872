//! Raw itinerary data as reported by the directions provider
//!
//! Mirrors the provider's nesting (routes → legs → steps). Every field the
//! provider may omit is optional here; deciding what counts as malformed is
//! left to the route filter.

use crate::value_objects::TravelMode;

/// All alternative routes returned for one origin/destination query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Itinerary {
    /// Alternative routes in provider order
    pub routes: Vec<ItineraryRoute>,
}

impl Itinerary {
    /// Create an itinerary from a list of routes
    #[must_use]
    pub const fn new(routes: Vec<ItineraryRoute>) -> Self {
        Self { routes }
    }

    /// Check whether the provider offered no routes at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterate over every step in route → leg → step order
    pub fn steps(&self) -> impl Iterator<Item = &ItineraryStep> {
        self.routes
            .iter()
            .flat_map(|route| route.legs.iter())
            .flat_map(|leg| leg.steps.iter())
    }
}

/// One alternative way of getting from origin to destination
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItineraryRoute {
    /// Short provider summary (e.g. "via Lewes Rd")
    pub summary: Option<String>,
    /// Legs of this route (one per waypoint pair)
    pub legs: Vec<RouteSegment>,
}

/// A provider "leg": the part of a route between two waypoints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSegment {
    /// Steps in travel order
    pub steps: Vec<ItineraryStep>,
}

/// A single step of a route segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryStep {
    /// How this step is travelled
    pub travel_mode: TravelMode,
    /// Step duration in seconds
    pub duration_secs: Option<i64>,
    /// Transit details, present for transit steps
    pub transit: Option<TransitDetails>,
}

impl ItineraryStep {
    /// Create a walking step
    #[must_use]
    pub const fn walking(duration_secs: i64) -> Self {
        Self {
            travel_mode: TravelMode::Walking,
            duration_secs: Some(duration_secs),
            transit: None,
        }
    }

    /// Create a transit step
    #[must_use]
    pub const fn transit(duration_secs: Option<i64>, details: TransitDetails) -> Self {
        Self {
            travel_mode: TravelMode::Transit,
            duration_secs,
            transit: Some(details),
        }
    }
}

/// Transit block of a step: line, stops and timestamps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitDetails {
    /// Line short name (e.g. "48")
    pub line_short_name: Option<String>,
    /// Line long name (e.g. "Bevendean - Churchill Square")
    pub line_name: Option<String>,
    /// Direction shown on the vehicle
    pub headsign: Option<String>,
    /// Boarding stop name
    pub departure_stop: Option<String>,
    /// Alighting stop name
    pub arrival_stop: Option<String>,
    /// Departure as Unix epoch seconds
    pub departure_epoch: Option<i64>,
    /// Arrival as Unix epoch seconds
    pub arrival_epoch: Option<i64>,
}
