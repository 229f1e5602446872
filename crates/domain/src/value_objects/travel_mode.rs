//! Travel mode value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a single step of an itinerary is travelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    /// Public transit (bus, tram, rail, ...)
    Transit,
    /// On foot
    Walking,
    /// By car
    Driving,
    /// By bicycle
    Bicycling,
    /// Any mode the provider reports that is not recognised
    Unknown,
}

impl TravelMode {
    /// Parse the provider's travel mode string (`TRANSIT`, `WALKING`, ...)
    ///
    /// Unrecognised values map to [`TravelMode::Unknown`].
    #[must_use]
    pub fn from_provider(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "TRANSIT" => Self::Transit,
            "WALKING" => Self::Walking,
            "DRIVING" => Self::Driving,
            "BICYCLING" => Self::Bicycling,
            _ => Self::Unknown,
        }
    }

    /// Check if this is a public transit step
    #[must_use]
    pub const fn is_transit(self) -> bool {
        matches!(self, Self::Transit)
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Transit => "Transit",
            Self::Walking => "Walk",
            Self::Driving => "Drive",
            Self::Bicycling => "Bike",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
