//! Application state shared across handlers.

use std::sync::Arc;

use uber_client::{Credential, UberSandboxClient};
use uber_oauth::UberAuthClient;

use crate::config::SiteConfig;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Site configuration.
    pub config: Arc<SiteConfig>,

    /// OAuth client for the login host.
    pub auth: UberAuthClient,

    /// Server-token client for the public resource pages.
    pub server: UberSandboxClient,
}

impl AppState {
    /// Build the state from configuration. Fails fast when a credential is
    /// blank or the API host does not parse.
    pub fn new(config: SiteConfig) -> anyhow::Result<Self> {
        let auth = UberAuthClient::new(&config.client_id, &config.client_secret)?;
        let server = UberSandboxClient::with_base_url(
            Credential::server(&config.server_token),
            &config.api_url,
        )?;

        Ok(Self {
            config: Arc::new(config),
            auth,
            server,
        })
    }

    /// Client bound to the rider's own access token.
    pub fn rider(&self, access_token: &str) -> uber_client::Result<UberSandboxClient> {
        UberSandboxClient::with_base_url(Credential::client(access_token), &self.config.api_url)
    }
}
