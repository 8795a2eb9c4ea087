//! Validation errors
//!
//! Raised while checking caller input, before anything touches the network.

use thiserror::Error;

/// Errors produced when request options or URLs are rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// URL parameter was empty
    #[error("URL parameter is empty")]
    EmptyUrl,

    /// URL could not be parsed
    #[error("failed to parse URL: {0}")]
    MalformedUrl(String),

    /// URL has no scheme
    #[error("URL is missing scheme")]
    MissingScheme,

    /// URL has no host
    #[error("URL is missing a host")]
    MissingHost,

    /// URL host does not belong to the expected site
    #[error("URL does not belong to {0}")]
    ForeignHost(String),

    /// A parameter value is outside its accepted set
    #[error("invalid {parameter} parameter: {value}")]
    InvalidParameter {
        /// Parameter name as it appears on the wire
        parameter: &'static str,
        /// The rejected value
        value: String,
    },

    /// Paging parameters must be positive
    #[error("limit, pages and start_page parameters must be greater than 0")]
    NonPositivePaging,

    /// Parse instructions are structurally invalid
    #[error("invalid parse instructions: {0}")]
    ParseInstructions(String),
}

impl ValidationError {
    /// Create an invalid parameter error
    pub fn invalid(parameter: &'static str, value: impl std::fmt::Display) -> Self {
        Self::InvalidParameter {
            parameter,
            value: value.to_string(),
        }
    }
}
