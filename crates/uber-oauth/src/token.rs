//! Access token returned by the token endpoint.

use serde::{Deserialize, Serialize};

/// OAuth access token.
///
/// Produced by code exchange or refresh and never stored by this crate;
/// callers persist it however suits them (the demo site keeps it in a
/// cookie). Serializable both ways for exactly that reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    /// The bearer token itself.
    pub access_token: String,
    /// Token type, `Bearer` for this provider.
    #[serde(default)]
    pub token_type: String,
    /// Lifetime in seconds from issuance.
    #[serde(default)]
    pub expires_in: u64,
    /// Grant for obtaining a replacement token without re-authorizing.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Space-separated scopes granted.
    #[serde(default)]
    pub scope: String,
}
