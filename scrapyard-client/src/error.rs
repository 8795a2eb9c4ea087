//! Error types for the Scrapyard client

use scrapyard_core::ValidationError;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Scrapyard client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Caller input was rejected before any network call
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    /// HTTP request could not be completed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Remote service answered with a non-success status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body, or a placeholder when it could not be read
        message: String,
    },

    /// Remote service reported that the job itself failed
    #[error("Job {job_id} failed on the remote side")]
    JobFailed {
        /// Identifier of the failed job
        job_id: String,
    },

    /// Caller cancelled the request
    #[error("Request cancelled")]
    Cancelled,

    /// Caller deadline expired before the request finished
    #[error("Request deadline exceeded")]
    DeadlineExceeded,

    /// Payload or response could not be encoded or decoded
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Client configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if the caller's context ended this request
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }

    /// Check if this error came from the transport or the remote status code
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::RequestFailed(_) | Self::ApiError { .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
