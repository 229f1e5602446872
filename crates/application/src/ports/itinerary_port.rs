//! Itinerary provider port
//!
//! Defines the interface for fetching transit itinerary options between two
//! addresses. Adapters in the infrastructure layer implement this port on top
//! of a directions API.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::entities::Itinerary;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Parameters of one itinerary request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryQuery {
    /// Origin address (free-form)
    pub origin: String,
    /// Destination address (free-form)
    pub destination: String,
    /// Earliest departure to plan for
    pub departure: DateTime<Utc>,
}

/// Port for itinerary providers
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ItineraryPort: Send + Sync {
    /// Fetch bus itinerary alternatives for the query
    ///
    /// Any transport failure or non-OK provider status is an error; an OK
    /// response without routes is an empty [`Itinerary`].
    async fn fetch_itinerary(&self, query: &ItineraryQuery) -> Result<Itinerary, ApplicationError>;
}
