//! GHL API client error types.

use thiserror::Error;

/// Result type for GHL API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors produced while talking to the GHL REST API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No access token was configured, so no request is attempted.
    #[error("GHL API key is not configured (set GHL_API_KEY)")]
    MissingCredentials,

    /// The API answered with a non-success status code.
    #[error("GHL API error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The request did not complete within the configured timeout.
    #[error("GHL API request timed out: {0}")]
    Timeout(String),

    /// Connection, TLS or protocol failure below the HTTP status level.
    #[error("GHL API request failed: {0}")]
    Transport(String),

    /// The response body was not valid JSON.
    #[error("Invalid GHL API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Create a status error.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Whether the API reported that the addressed resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        // Request URLs carry caller-supplied IDs; keep them out of messages.
        let err = err.without_url();
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
