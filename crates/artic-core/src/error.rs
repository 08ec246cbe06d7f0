//! Error types for artic-core

use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for artic operations
pub type Result<T> = std::result::Result<T, ArticError>;

/// Main error type for artic operations
#[derive(Error, Debug)]
pub enum ArticError {
    /// Fetching records from the remote API failed
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Configuration could not be loaded or is invalid
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised at the network boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport failure (connect, DNS, timeout, body read)
    #[error("Network error: {message}")]
    Network { message: String },

    /// The server answered with a non-success status
    #[error("HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// The server asked us to slow down
    #[error("Rate limited")]
    RateLimited,

    /// The body was not JSON or did not match the artworks schema
    #[error("Malformed response: {message}")]
    Malformed { message: String },

    /// The base URL could not be joined with the endpoint
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },
}

impl FetchError {
    pub fn malformed(message: impl Into<String>) -> Self {
        FetchError::Malformed {
            message: message.into(),
        }
    }

    /// Whether the failure came from the payload rather than the transport
    pub fn is_malformed(&self) -> bool {
        matches!(self, FetchError::Malformed { .. })
    }
}
