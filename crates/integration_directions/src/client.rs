//! Google Directions client
//!
//! Requests transit directions from `{base_url}/directions/json`.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

use crate::config::DirectionsConfig;
use crate::error::DirectionsError;
use crate::models::DirectionsResponse;

/// Trait for itinerary providers
#[async_trait]
pub trait DirectionsClient: Send + Sync {
    /// Fetch transit directions departing at `departure`
    ///
    /// A response with status other than `OK` is returned as
    /// [`DirectionsError::ApiStatus`].
    async fn transit_directions(
        &self,
        origin: &str,
        destination: &str,
        departure: DateTime<Utc>,
    ) -> Result<DirectionsResponse, DirectionsError>;
}

/// Directions client for the Google Maps Directions API
#[derive(Debug)]
pub struct GoogleDirectionsClient {
    client: Client,
    config: DirectionsConfig,
    api_key: Option<SecretString>,
}

impl GoogleDirectionsClient {
    /// Create a new client
    ///
    /// A missing API key is accepted here; requests then fail with
    /// [`DirectionsError::MissingApiKey`] without touching the network.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(
        config: &DirectionsConfig,
        api_key: Option<SecretString>,
    ) -> Result<Self, DirectionsError> {
        config
            .validate()
            .map_err(DirectionsError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("BusReminder/1.0")
            .build()
            .map_err(|e| DirectionsError::ConnectionFailed(e.to_string()))?;

        let api_key = api_key.filter(|key| !key.expose_secret().trim().is_empty());
        if api_key.is_none() {
            warn!("Directions API key not configured; itinerary requests will fail");
        }

        Ok(Self {
            client,
            config: config.clone(),
            api_key,
        })
    }

    /// Whether an API key is available
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn query_params(
        &self,
        origin: &str,
        destination: &str,
        departure: DateTime<Utc>,
        api_key: &SecretString,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("origin", origin.to_string()),
            ("destination", destination.to_string()),
            ("mode", "transit".to_string()),
            ("transit_mode", self.config.transit_mode.clone()),
            ("departure_time", departure.timestamp().to_string()),
            ("alternatives", self.config.alternatives.to_string()),
        ];

        if let Some(language) = &self.config.language {
            params.push(("language", language.clone()));
        }

        params.push(("key", api_key.expose_secret().to_string()));
        params
    }

    /// Parse a response body and check the API status
    fn parse_response(body: &str) -> Result<DirectionsResponse, DirectionsError> {
        let response: DirectionsResponse =
            serde_json::from_str(body).map_err(|e| DirectionsError::ParseError(e.to_string()))?;

        if !response.is_ok() {
            return Err(DirectionsError::ApiStatus {
                status: response.status,
                message: response.error_message,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl DirectionsClient for GoogleDirectionsClient {
    #[instrument(skip(self))]
    async fn transit_directions(
        &self,
        origin: &str,
        destination: &str,
        departure: DateTime<Utc>,
    ) -> Result<DirectionsResponse, DirectionsError> {
        let api_key = self.api_key.as_ref().ok_or(DirectionsError::MissingApiKey)?;
        let url = self.config.endpoint();
        let params = self.query_params(origin, destination, departure, api_key);

        debug!(?url, transit_mode = %self.config.transit_mode, "Requesting transit directions");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DirectionsError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    DirectionsError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DirectionsError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if !status.is_success() {
            return Err(DirectionsError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DirectionsError::ParseError(e.to_string()))?;

        let result = Self::parse_response(&body)?;

        if result.routes.is_empty() {
            warn!("Directions API returned no routes");
        }

        debug!(count = result.routes.len(), "Routes received");
        Ok(result)
    }
}
