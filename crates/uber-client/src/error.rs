//! Client error types.

use thiserror::Error;

/// Client error type.
///
/// Remote API errors are not represented here: a non-success status with a
/// decodable body surfaces as [`UberError`](crate::response::UberError)
/// inside the response envelope, never as an `Err`.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP round trip itself failed (DNS, connection refused, timeout).
    #[error("Transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A success response carried a body that did not match the expected
    /// shape. This indicates a client/schema mismatch, not a usage error.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check if this is a connectivity-level failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// Check if this is a schema mismatch on a success response.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// Check if this is a construction/configuration failure.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
