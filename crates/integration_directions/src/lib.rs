//! Transit itinerary integration for the bus reminder
//!
//! Fetches bus itineraries from the
//! [Google Directions API](https://developers.google.com/maps/documentation/directions)
//! (`mode=transit`, `transit_mode=bus`).
//!
//! # Architecture
//!
//! [`DirectionsClient`] defines the interface, implemented by
//! [`GoogleDirectionsClient`]. The response is returned as the provider's
//! raw nesting ([`DirectionsResponse`] → [`Route`] → [`Leg`] → [`Step`]);
//! mapping into domain types happens in the infrastructure adapter.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_directions::{DirectionsClient, DirectionsConfig, GoogleDirectionsClient};
//!
//! let config = DirectionsConfig::default();
//! let client = GoogleDirectionsClient::new(&config, Some(api_key))?;
//!
//! let response = client
//!     .transit_directions("110 Saunders Park View, Brighton", "Bevendean Primary School", Utc::now())
//!     .await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{DirectionsClient, GoogleDirectionsClient};
pub use config::DirectionsConfig;
pub use error::DirectionsError;
pub use models::{DirectionsResponse, Leg, Line, Route, Step, Stop, TextValue, TimeValue, TransitDetails};
