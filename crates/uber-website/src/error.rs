//! Error handling for site handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::html;

/// Errors a handler can surface to the browser.
///
/// Remote API rejections are not errors; handlers render those from the
/// response envelope. This type covers local failures only.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Resource client failed (transport, decode, configuration).
    #[error("API client error: {0}")]
    Api(#[from] uber_client::Error),

    /// OAuth flow failed (network, decode, configuration).
    #[error("OAuth error: {0}")]
    Auth(#[from] uber_oauth::OAuthError),

    /// Access token could not be serialized for the cookie.
    #[error("Cookie error: {0}")]
    Cookie(#[from] serde_json::Error),
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = match &self {
            SiteError::Api(uber_client::Error::Config(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            SiteError::Api(_) => StatusCode::BAD_GATEWAY,
            SiteError::Auth(_) => StatusCode::BAD_GATEWAY,
            SiteError::Cookie(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.to_string();
        tracing::error!(status = %status, error = %message, "Handler failed");

        let body = html::page(
            "Something went wrong",
            &format!("<p>{}</p><p><a href=\"/\">Back to start</a></p>", html::escape(&message)),
        );
        (status, body).into_response()
    }
}

/// Result type for site handlers.
pub type Result<T> = std::result::Result<T, SiteError>;
