//! Application configuration
//!
//! Split into focused sub-modules:
//! - `route`: target route, addresses, time window, timezone
//! - `integrations`: Directions API and CalDAV
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file, then `BUS_REMINDER_*` environment variables with `__` separating
//! nested keys (e.g. `BUS_REMINDER_ROUTE__ROUTE_ID=48`).

mod integrations;
mod route;

use std::path::Path;

use application::{ApplicationError, BusReminderConfig};
use domain::value_objects::{RouteId, TimeOfDay};
use serde::{Deserialize, Serialize};

pub use integrations::{CalDavAppConfig, DirectionsAppConfig};
pub use route::RouteAppConfig;

use crate::telemetry::LoggingConfig;

/// Default configuration file name (without extension)
pub const DEFAULT_CONFIG_FILE: &str = "bus-reminder";

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "BUS_REMINDER";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Route and time window
    #[serde(default)]
    pub route: RouteAppConfig,

    /// Itinerary provider
    #[serde(default)]
    pub directions: DirectionsAppConfig,

    /// Notification sink (optional; required unless running dry)
    #[serde(default)]
    pub caldav: Option<CalDavAppConfig>,

    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// With `path` set, that file must exist. Without it,
    /// `bus-reminder.toml` in the working directory is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., BUS_REMINDER_ROUTE__ROUTE_ID)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );

        builder.build()?.try_deserialize()
    }

    /// Problems worth a warning at start-up
    ///
    /// Returned rather than logged because configuration is loaded before
    /// the subscriber is installed.
    pub fn startup_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if !self.directions.has_api_key() {
            warnings.push(
                "Directions API key not configured (set BUS_REMINDER_DIRECTIONS__API_KEY)"
                    .to_string(),
            );
        }
        warnings
    }

    /// Validate the route section and build the orchestrator configuration
    pub fn to_bus_reminder_config(&self) -> Result<BusReminderConfig, ApplicationError> {
        let route = &self.route;
        let min_departure: TimeOfDay = route.min_departure.parse()?;
        let max_arrival: TimeOfDay = route.max_arrival.parse()?;

        if max_arrival < min_departure {
            return Err(ApplicationError::Configuration(format!(
                "max_arrival {max_arrival} is before min_departure {min_departure}"
            )));
        }

        Ok(BusReminderConfig {
            route: RouteId::new(&route.route_id)?,
            origin: non_blank("route.origin", &route.origin)?,
            destination: non_blank("route.destination", &route.destination)?,
            min_departure,
            max_arrival,
            reminder_lead_minutes: route.reminder_lead_minutes,
            timezone: route.timezone.to_tz()?,
            fallback_schedule_url: route
                .fallback_schedule_url
                .clone()
                .filter(|url| !url.trim().is_empty()),
        })
    }

    /// Render the effective configuration as TOML; secrets are never included
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn non_blank(key: &str, value: &str) -> Result<String, ApplicationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApplicationError::Configuration(format!(
            "{key} must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}
