//! Error types for the OAuth flow.

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, OAuthError>;

/// Errors that can occur during the OAuth flow.
///
/// A declined grant is not an error; exchange and refresh report it as
/// `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum OAuthError {
    /// Network/HTTP error.
    #[error("Network error: {0}")]
    Network(String),

    /// Token endpoint answered success with a body that does not decode.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for OAuthError {
    fn from(e: reqwest::Error) -> Self {
        OAuthError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for OAuthError {
    fn from(e: serde_json::Error) -> Self {
        OAuthError::Decode(e.to_string())
    }
}
