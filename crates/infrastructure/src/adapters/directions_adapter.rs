//! Directions adapter - Implements ItineraryPort using integration_directions

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{ItineraryPort, ItineraryQuery};
use async_trait::async_trait;
use domain::entities::{Itinerary, ItineraryRoute, ItineraryStep, RouteSegment, TransitDetails};
use domain::value_objects::TravelMode;
use integration_directions::{DirectionsClient, DirectionsResponse, Step};
use tracing::{debug, instrument};

/// Adapter for the Google Directions API
pub struct DirectionsItineraryAdapter {
    client: Arc<dyn DirectionsClient>,
}

impl std::fmt::Debug for DirectionsItineraryAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectionsItineraryAdapter")
            .field("client", &"DirectionsClient")
            .finish()
    }
}

impl DirectionsItineraryAdapter {
    /// Create a new adapter around a directions client
    pub fn new(client: Arc<dyn DirectionsClient>) -> Self {
        Self { client }
    }

    /// Convert the provider response into the domain's raw itinerary
    #[must_use]
    pub fn convert_response(response: DirectionsResponse) -> Itinerary {
        let routes = response
            .routes
            .into_iter()
            .map(|route| ItineraryRoute {
                summary: route.summary.filter(|s| !s.is_empty()),
                legs: route
                    .legs
                    .into_iter()
                    .map(|leg| RouteSegment {
                        steps: leg.steps.into_iter().map(Self::convert_step).collect(),
                    })
                    .collect(),
            })
            .collect();

        Itinerary::new(routes)
    }

    fn convert_step(step: Step) -> ItineraryStep {
        let transit = step.transit_details.map(|details| {
            let (line_short_name, line_name) = details
                .line
                .map_or((None, None), |line| (line.short_name, line.name));

            TransitDetails {
                line_short_name,
                line_name,
                headsign: details.headsign,
                departure_stop: details.departure_stop.and_then(|s| s.name),
                arrival_stop: details.arrival_stop.and_then(|s| s.name),
                departure_epoch: details.departure_time.and_then(|t| t.value),
                arrival_epoch: details.arrival_time.and_then(|t| t.value),
            }
        });

        ItineraryStep {
            travel_mode: TravelMode::from_provider(&step.travel_mode),
            duration_secs: step.duration.and_then(|d| d.value),
            transit,
        }
    }
}

#[async_trait]
impl ItineraryPort for DirectionsItineraryAdapter {
    #[instrument(skip(self), fields(departure = %query.departure))]
    async fn fetch_itinerary(&self, query: &ItineraryQuery) -> Result<Itinerary, ApplicationError> {
        let response = self
            .client
            .transit_directions(&query.origin, &query.destination, query.departure)
            .await
            .map_err(|e| ApplicationError::ExternalService(format!("Directions request failed: {e}")))?;

        let itinerary = Self::convert_response(response);
        debug!(
            routes = itinerary.routes.len(),
            steps = itinerary.steps().count(),
            "Itinerary converted"
        );
        Ok(itinerary)
    }
}
