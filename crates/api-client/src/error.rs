//! Error types for the API client

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// A problem with one field of a submitted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field name, e.g. `"email"`
    pub field: &'static str,
    /// Message suitable for showing next to the field
    pub message: String,
}

impl FieldError {
    pub(crate) fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_fields(errors: &[FieldError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Service returned an unexpected status
    #[error("API error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Body or message from the service
        message: String,
    },

    /// Routing service found no route between the points
    #[error("No route found")]
    NoRoute,

    /// Request did not finish in time
    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    /// Caller cancelled the request
    #[error("Request cancelled")]
    Cancelled,

    /// Reservation endpoint refused the submission
    #[error("Reservation rejected: {0}")]
    Rejected(String),

    /// Form fields failed validation; nothing was sent
    #[error("Please check your information: {}", join_fields(.0))]
    Validation(Vec<FieldError>),

    /// Coordinates unusable for routing
    #[error(transparent)]
    Geo(#[from] cafe_geo::GeoError),
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: impl Into<String>) -> Self {
        Self::ApiResponse {
            status,
            message: message.into(),
        }
    }

    /// True when the same request may succeed if the user tries again.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            Self::ApiResponse { status, .. } => *status >= 500 || *status == 429,
            Self::Timeout(_) | Self::Rejected(_) => true,
            Self::Json(_)
            | Self::Config(_)
            | Self::NoRoute
            | Self::Cancelled
            | Self::Validation(_)
            | Self::Geo(_) => false,
        }
    }

    /// Field problems, if this is a validation error.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }

    /// Short message for the person at the keyboard.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NoRoute => "No route found between those points.".to_string(),
            Self::Cancelled => "Cancelled.".to_string(),
            Self::Config(msg) => format!("Missing configuration: {msg}"),
            Self::Validation(_) => "Some fields need your attention.".to_string(),
            Self::Rejected(msg) => format!("{msg}. Please try again."),
            Self::Geo(e) => e.to_string(),
            _ if self.is_retryable() => "Something went wrong. Please try again.".to_string(),
            _ => "Something went wrong.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_lists_fields() {
        let err = ApiError::Validation(vec![
            FieldError::new("name", "Name is required"),
            FieldError::new("email", "Invalid email format"),
        ]);
        assert_eq!(
            err.to_string(),
            "Please check your information: name: Name is required; email: Invalid email format"
        );
        assert_eq!(err.field_errors().len(), 2);
        assert!(ApiError::NoRoute.field_errors().is_empty());
    }

    #[test]
    fn test_retryable() {
        assert!(ApiError::api_response(503, "busy").is_retryable());
        assert!(ApiError::api_response(429, "slow down").is_retryable());
        assert!(!ApiError::api_response(404, "missing").is_retryable());
        assert!(ApiError::Timeout(Duration::from_secs(1)).is_retryable());
        assert!(!ApiError::Cancelled.is_retryable());
        assert!(!ApiError::NoRoute.is_retryable());
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ApiError::Timeout(Duration::from_secs(15)).user_message(),
            "Something went wrong. Please try again."
        );
        assert_eq!(
            ApiError::Rejected("Sheet is full".to_string()).user_message(),
            "Sheet is full. Please try again."
        );
        assert!(ApiError::config("reservations endpoint").user_message().starts_with("Missing configuration"));
    }
}
