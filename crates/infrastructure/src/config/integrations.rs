//! External service configuration: itinerary provider and CalDAV sink

use integration_directions::DirectionsConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::default_true;

// ==============================
// Directions Configuration
// ==============================

/// Google Directions API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct DirectionsAppConfig {
    /// API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Maps API base URL
    #[serde(default = "default_directions_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_directions_timeout")]
    pub timeout_secs: u64,

    /// Transit sub-mode (default: bus)
    #[serde(default = "default_transit_mode")]
    pub transit_mode: String,

    /// Request alternative routes (default: true)
    #[serde(default = "default_true")]
    pub alternatives: bool,

    /// Response language (optional)
    #[serde(default)]
    pub language: Option<String>,
}

impl std::fmt::Debug for DirectionsAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectionsAppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("transit_mode", &self.transit_mode)
            .field("alternatives", &self.alternatives)
            .field("language", &self.language)
            .finish()
    }
}

fn default_directions_base_url() -> String {
    "https://maps.googleapis.com/maps/api".to_string()
}

const fn default_directions_timeout() -> u64 {
    10
}

fn default_transit_mode() -> String {
    "bus".to_string()
}

impl Default for DirectionsAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_directions_base_url(),
            timeout_secs: default_directions_timeout(),
            transit_mode: default_transit_mode(),
            alternatives: true,
            language: None,
        }
    }
}

impl DirectionsAppConfig {
    /// Convert to `integration_directions`'s `DirectionsConfig`
    #[must_use]
    pub fn to_directions_config(&self) -> DirectionsConfig {
        DirectionsConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            transit_mode: self.transit_mode.clone(),
            alternatives: self.alternatives,
            language: self.language.clone(),
        }
    }

    /// Copy of the API key for handing to the client
    #[must_use]
    pub fn api_key(&self) -> Option<SecretString> {
        self.api_key
            .as_ref()
            .map(|key| SecretString::from(key.expose_secret().to_string()))
    }

    /// Whether a non-blank API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }
}

// ==============================
// CalDAV Configuration
// ==============================

/// CalDAV calendar server configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct CalDavAppConfig {
    /// CalDAV server URL (e.g., <https://cal.example.com>)
    pub server_url: String,

    /// Username for authentication
    pub username: String,

    /// Password for authentication (sensitive - uses `SecretString`)
    #[serde(skip_serializing)]
    pub password: SecretString,

    /// Calendar path (optional)
    #[serde(default)]
    pub calendar_path: Option<String>,

    /// Verify TLS certificates (default: true)
    #[serde(default = "default_true")]
    pub verify_certs: bool,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_caldav_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for CalDavAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalDavAppConfig")
            .field("server_url", &self.server_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("calendar_path", &self.calendar_path)
            .field("verify_certs", &self.verify_certs)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

const fn default_caldav_timeout() -> u64 {
    30
}

impl CalDavAppConfig {
    /// Convert to `integration_caldav`'s `CalDavConfig`
    #[must_use]
    pub fn to_caldav_config(&self) -> integration_caldav::CalDavConfig {
        integration_caldav::CalDavConfig {
            server_url: self.server_url.clone(),
            username: self.username.clone(),
            password: self.password.expose_secret().to_string(),
            calendar_path: self.calendar_path.clone(),
            verify_certs: self.verify_certs,
            timeout_secs: self.timeout_secs,
        }
    }
}
