//! OAuth 2.0 authorization-code flow against the Uber login host.

use serde::Serialize;

use crate::error::{OAuthError, Result};
use crate::token::AccessToken;

/// OAuth endpoint configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub authorize_url: String,
    pub token_url: String,
    pub revoke_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::uber()
    }
}

impl AuthConfig {
    /// Endpoints on the production login host.
    pub fn uber() -> Self {
        Self {
            authorize_url: "https://login.uber.com/oauth/authorize".to_string(),
            token_url: "https://login.uber.com/oauth/token".to_string(),
            revoke_url: "https://login.uber.com/oauth/revoke".to_string(),
        }
    }
}

/// Client for the authorization-code flow.
///
/// Owns its own unauthenticated HTTP client; nothing here is shared with
/// the resource client, which carries per-credential default headers.
#[derive(Debug, Clone)]
pub struct UberAuthClient {
    config: AuthConfig,
    client_id: String,
    client_secret: String,
    http: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct TokenExchangeForm<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'static str,
    code: &'a str,
    redirect_uri: &'a str,
}

#[derive(Debug, Serialize)]
struct TokenRefreshForm<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'static str,
    refresh_token: &'a str,
    redirect_uri: &'a str,
}

#[derive(Debug, Serialize)]
struct TokenRevokeForm<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    token: &'a str,
}

impl UberAuthClient {
    /// Create a client for the production login host.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        Self::with_config(client_id, client_secret, AuthConfig::uber())
    }

    /// Create a client against custom endpoints.
    pub fn with_config(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        config: AuthConfig,
    ) -> Result<Self> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();

        if client_id.trim().is_empty() {
            return Err(OAuthError::Config("client_id is required".to_string()));
        }
        if client_secret.trim().is_empty() {
            return Err(OAuthError::Config("client_secret is required".to_string()));
        }

        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            config,
            client_id,
            client_secret,
            http,
        })
    }

    /// Build the URL the user is sent to for granting access.
    ///
    /// Scopes are joined with spaces in caller order. Blank `state` and
    /// `redirect_url` values are not appended; the redirect is url-encoded.
    /// Pure string construction, no network.
    pub fn authorize_url(
        &self,
        scopes: &[&str],
        state: Option<&str>,
        redirect_url: Option<&str>,
    ) -> String {
        let mut url = format!(
            "{}?response_type=code&client_id={}",
            self.config.authorize_url, self.client_id
        );

        if !scopes.is_empty() {
            url.push_str("&scope=");
            url.push_str(&scopes.join(" "));
        }
        if let Some(state) = state.filter(|s| !s.trim().is_empty()) {
            url.push_str("&state=");
            url.push_str(state);
        }
        if let Some(redirect) = redirect_url.filter(|s| !s.trim().is_empty()) {
            url.push_str("&redirectUrl=");
            url.push_str(&urlencoding::encode(redirect));
        }

        url
    }

    /// Exchange an authorization code for an access token.
    ///
    /// A declined grant (any non-success status) yields `Ok(None)`.
    pub async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<Option<AccessToken>> {
        let form = TokenExchangeForm {
            client_id: &self.client_id,
            client_secret: &self.client_secret,
            grant_type: "authorization_code",
            code,
            redirect_uri,
        };
        self.request_token(&form).await
    }

    /// Trade a refresh token for a fresh access token.
    ///
    /// Same contract as [`exchange_code`](Self::exchange_code): a declined
    /// grant yields `Ok(None)`.
    pub async fn refresh(
        &self,
        refresh_token: &str,
        redirect_uri: &str,
    ) -> Result<Option<AccessToken>> {
        let form = TokenRefreshForm {
            client_id: &self.client_id,
            client_secret: &self.client_secret,
            grant_type: "refresh_token",
            refresh_token,
            redirect_uri,
        };
        self.request_token(&form).await
    }

    /// Revoke an access token.
    ///
    /// Reports whether the revoke endpoint accepted the request; the
    /// response body is not inspected.
    pub async fn revoke(&self, token: &str) -> Result<bool> {
        let form = TokenRevokeForm {
            client_id: &self.client_id,
            client_secret: &self.client_secret,
            token,
        };
        let response = self
            .http
            .post(&self.config.revoke_url)
            .form(&form)
            .send()
            .await?;
        Ok(response.status().is_success())
    }

    async fn request_token<B>(&self, form: &B) -> Result<Option<AccessToken>>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .http
            .post(&self.config.token_url)
            .form(form)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "Token endpoint declined the grant");
            return Ok(None);
        }

        let body = response.text().await?;
        let token = serde_json::from_str(&body)?;
        Ok(Some(token))
    }
}
