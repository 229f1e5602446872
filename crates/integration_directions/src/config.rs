//! Directions service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Google Directions API client
///
/// The API key is passed to the client separately so that this struct can
/// be logged and serialised freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionsConfig {
    /// Base URL of the Maps API (without `/directions/json`)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Transit sub-mode, e.g. `bus`, `rail`, `tram`
    #[serde(default = "default_transit_mode")]
    pub transit_mode: String,

    /// Ask the provider for alternative routes
    #[serde(default = "default_alternatives")]
    pub alternatives: bool,

    /// Optional response language (e.g. `en-GB`)
    #[serde(default)]
    pub language: Option<String>,
}

fn default_base_url() -> String {
    "https://maps.googleapis.com/maps/api".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_transit_mode() -> String {
    "bus".to_string()
}

const fn default_alternatives() -> bool {
    true
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            transit_mode: default_transit_mode(),
            alternatives: default_alternatives(),
            language: None,
        }
    }
}

impl DirectionsConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Full URL of the directions endpoint
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/directions/json", self.base_url.trim_end_matches('/'))
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.transit_mode.trim().is_empty() {
            return Err("transit_mode must not be empty".to_string());
        }

        Ok(())
    }
}
