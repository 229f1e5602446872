//! Route and time window configuration

use domain::value_objects::Timezone;
use serde::{Deserialize, Serialize};

/// Which bus to catch, between which addresses, and when
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteAppConfig {
    /// Route short name, e.g. "48"
    #[serde(default = "default_route_id")]
    pub route_id: String,

    /// Home address
    #[serde(default = "default_origin")]
    pub origin: String,

    /// School address
    #[serde(default = "default_destination")]
    pub destination: String,

    /// Earliest acceptable departure, HH:MM
    #[serde(default = "default_min_departure")]
    pub min_departure: String,

    /// Latest acceptable arrival, HH:MM
    #[serde(default = "default_max_arrival")]
    pub max_arrival: String,

    /// Desired reminder lead time in minutes
    #[serde(default = "default_reminder_lead_minutes")]
    pub reminder_lead_minutes: u32,

    /// IANA timezone the times above refer to
    #[serde(default)]
    pub timezone: Timezone,

    /// Timetable page quoted in provider failure alerts
    #[serde(default = "default_fallback_schedule_url")]
    pub fallback_schedule_url: Option<String>,
}

fn default_route_id() -> String {
    "48".to_string()
}

fn default_origin() -> String {
    "110 Saunders Park View, Brighton BN2 4NY, UK".to_string()
}

fn default_destination() -> String {
    "Bevendean Primary School, Brighton, UK".to_string()
}

fn default_min_departure() -> String {
    "08:20".to_string()
}

fn default_max_arrival() -> String {
    "08:45".to_string()
}

const fn default_reminder_lead_minutes() -> u32 {
    12
}

#[allow(clippy::unnecessary_wraps)] // serde default must match the field type
fn default_fallback_schedule_url() -> Option<String> {
    Some("https://www.buses.co.uk/stops/149000007061".to_string())
}

impl Default for RouteAppConfig {
    fn default() -> Self {
        Self {
            route_id: default_route_id(),
            origin: default_origin(),
            destination: default_destination(),
            min_departure: default_min_departure(),
            max_arrival: default_max_arrival(),
            reminder_lead_minutes: default_reminder_lead_minutes(),
            timezone: Timezone::default(),
            fallback_schedule_url: default_fallback_schedule_url(),
        }
    }
}
