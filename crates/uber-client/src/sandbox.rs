//! Sandbox client.
//!
//! The sandbox host mirrors the production API but creates simulated trip
//! requests, and adds an endpoint for pushing those requests through their
//! lifecycle.

use crate::api::{EstimatesApi, ProductsApi, PromotionsApi, RequestsApi, UserApi};
use crate::client::{UberClient, SANDBOX_BASE_URL};
use crate::credential::Credential;
use crate::error::Result;

/// Uber sandbox API client.
///
/// Wraps an [`UberClient`] pointed at the sandbox host, so every resource
/// call behaves exactly as in production.
#[derive(Clone)]
pub struct UberSandboxClient {
    client: UberClient,
}

impl UberSandboxClient {
    /// Create a client for the sandbox host.
    pub fn new(credential: Credential) -> Result<Self> {
        Self::with_base_url(credential, SANDBOX_BASE_URL)
    }

    /// Create a sandbox client against a different host.
    pub fn with_base_url(credential: Credential, base_url: impl Into<String>) -> Result<Self> {
        let client = UberClient::builder()
            .credential(credential)
            .base_url(base_url)
            .build()?;
        Ok(Self { client })
    }

    /// The underlying client, pointed at the sandbox host.
    pub fn client(&self) -> &UberClient {
        &self.client
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the products API.
    pub fn products(&self) -> ProductsApi {
        self.client.products()
    }

    /// Access the estimates API.
    pub fn estimates(&self) -> EstimatesApi {
        self.client.estimates()
    }

    /// Access the promotions API.
    pub fn promotions(&self) -> PromotionsApi {
        self.client.promotions()
    }

    /// Access the user API.
    pub fn user(&self) -> UserApi {
        self.client.user()
    }

    /// Access the trip requests API.
    pub fn requests(&self) -> RequestsApi {
        self.client.requests()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sandbox-only endpoints
    // ─────────────────────────────────────────────────────────────────────────

    /// Force a simulated trip request into the given status.
    ///
    /// Returns whether the sandbox accepted the transition. When `status`
    /// is `None` an empty body is sent.
    pub async fn update_request_status(
        &self,
        request_id: &str,
        status: Option<&str>,
    ) -> Result<bool> {
        let mut body = serde_json::Map::new();
        if let Some(status) = status {
            body.insert("status".to_string(), status.into());
        }
        self.client
            .put_flag(&format!("v1/sandbox/requests/{}", request_id), &body)
            .await
    }
}
