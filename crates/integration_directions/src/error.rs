//! Directions error types

use thiserror::Error;

/// Errors that can occur while fetching directions
#[derive(Debug, Error)]
pub enum DirectionsError {
    /// Connection to the directions service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request returned a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// The API answered but with a non-OK status
    #[error("Directions API returned {status}{}", message_suffix(.message.as_deref()))]
    ApiStatus {
        /// Status string, e.g. `REQUEST_DENIED` or `ZERO_RESULTS`
        status: String,
        /// Optional `error_message` from the response
        message: Option<String>,
    },

    /// No API key configured
    #[error("Directions API key is not configured")]
    MissingApiKey,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

fn message_suffix(message: Option<&str>) -> String {
    message.map(|m| format!(": {m}")).unwrap_or_default()
}

impl DirectionsError {
    /// Returns true if a later run might succeed without any change
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::Timeout { .. }
                | Self::RateLimitExceeded { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_errors() {
        assert!(DirectionsError::ConnectionFailed("test".to_string()).is_transient());
        assert!(DirectionsError::RequestFailed("test".to_string()).is_transient());
        assert!(DirectionsError::Timeout { timeout_secs: 10 }.is_transient());
        assert!(
            DirectionsError::RateLimitExceeded {
                retry_after_secs: Some(60)
            }
            .is_transient()
        );
    }

    #[test]
    fn test_permanent_errors() {
        assert!(!DirectionsError::MissingApiKey.is_transient());
        assert!(!DirectionsError::ParseError("test".to_string()).is_transient());
        assert!(
            !DirectionsError::ApiStatus {
                status: "REQUEST_DENIED".to_string(),
                message: None,
            }
            .is_transient()
        );
    }

    #[test]
    fn test_api_status_display() {
        let err = DirectionsError::ApiStatus {
            status: "REQUEST_DENIED".to_string(),
            message: Some("The provided API key is invalid.".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Directions API returned REQUEST_DENIED: The provided API key is invalid."
        );

        let err = DirectionsError::ApiStatus {
            status: "ZERO_RESULTS".to_string(),
            message: None,
        };
        assert_eq!(err.to_string(), "Directions API returned ZERO_RESULTS");
    }

    #[test]
    fn test_error_display() {
        let err = DirectionsError::RateLimitExceeded {
            retry_after_secs: Some(60),
        };
        assert!(err.to_string().contains("60"));

        let err = DirectionsError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));
    }
}
