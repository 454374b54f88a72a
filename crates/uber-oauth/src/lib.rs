//! OAuth 2.0 authorization-code flow for the Uber API.
//!
//! Builds the authorize link, exchanges the callback code for an
//! [`AccessToken`], refreshes it, and revokes it. Token storage is the
//! caller's concern.
//!
//! # Components
//!
//! - [`oauth`]: authorize URL construction, code exchange, refresh, revoke
//! - [`token`]: the access token returned by the token endpoint
//!
//! # Example
//!
//! ```no_run
//! use uber_oauth::UberAuthClient;
//!
//! # async fn example() -> uber_oauth::Result<()> {
//! let auth = UberAuthClient::new("client-id", "client-secret")?;
//!
//! // Send the user here to grant access
//! let url = auth.authorize_url(
//!     &["profile", "history_lite", "request"],
//!     Some("csrf-state"),
//!     Some("https://example.com/auth/callback"),
//! );
//! println!("visit {url}");
//!
//! // Back on the callback, trade the code for a token
//! if let Some(token) = auth.exchange_code("the-code", "https://example.com/auth/callback").await? {
//!     println!("authorized: {}", token.access_token);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod oauth;
pub mod token;

pub use error::{OAuthError, Result};
pub use oauth::{AuthConfig, UberAuthClient};
pub use token::AccessToken;
