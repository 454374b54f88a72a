//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use url::Url;

use crate::api::{EstimatesApi, ProductsApi, PromotionsApi, RequestsApi, UserApi};
use crate::credential::Credential;
use crate::error::{Error, Result};
use crate::response::{UberError, UberResponse};

/// Production API host.
pub const PRODUCTION_BASE_URL: &str = "https://api.uber.com";

/// Sandbox API host.
pub const SANDBOX_BASE_URL: &str = "https://sandbox-api.uber.com";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Uber API client.
///
/// Provides typed access to the Uber REST endpoints. Requests carry the
/// credential the client was built with; responses come back as an
/// [`UberResponse`] envelope holding either decoded data or the remote
/// error.
///
/// # Example
///
/// ```no_run
/// use uber_client::{Credential, UberClient};
///
/// # async fn example() -> uber_client::Result<()> {
/// let client = UberClient::new(Credential::server("server-token"))?;
///
/// let response = client.products().list(-33.8670522, 151.1957362).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct UberClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client.
    pub(crate) http: reqwest::Client,
    /// Base URL for API requests.
    pub(crate) base_url: Url,
    /// Request timeout.
    pub(crate) timeout: Duration,
}

impl UberClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client for the production API with default settings.
    pub fn new(credential: Credential) -> Result<Self> {
        Self::builder().credential(credential).build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the products API.
    pub fn products(&self) -> ProductsApi {
        ProductsApi::new(self.clone())
    }

    /// Access the estimates API.
    pub fn estimates(&self) -> EstimatesApi {
        EstimatesApi::new(self.clone())
    }

    /// Access the promotions API.
    pub fn promotions(&self) -> PromotionsApi {
        PromotionsApi::new(self.clone())
    }

    /// Access the user API.
    pub fn user(&self) -> UserApi {
        UserApi::new(self.clone())
    }

    /// Access the trip requests API.
    pub fn requests(&self) -> RequestsApi {
        RequestsApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for an API path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner.base_url.join(path).map_err(Error::from)
    }

    /// Make a GET request.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<UberResponse<T>> {
        let url = self.url(path)?;
        let response = self
            .inner
            .http
            .get(url)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<UberResponse<T>>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let response = self
            .inner
            .http
            .get(url)
            .query(query)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a POST request.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<UberResponse<T>>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let response = self
            .inner
            .http
            .post(url)
            .json(body)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a DELETE request, reporting success as `true`.
    pub(crate) async fn delete_flag(&self, path: &str) -> Result<UberResponse<bool>> {
        let url = self.url(path)?;
        let response = self
            .inner
            .http
            .delete(url)
            .timeout(self.inner.timeout)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(UberResponse::success(true))
        } else {
            Ok(UberResponse::failure(self.remote_error(response).await))
        }
    }

    /// Make a PUT request, reporting only whether the status was a success.
    ///
    /// The response body is not inspected.
    pub(crate) async fn put_flag<B>(&self, path: &str, body: &B) -> Result<bool>
    where
        B: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let response = self
            .inner
            .http
            .put(url)
            .json(body)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        Ok(response.status().is_success())
    }

    /// Handle a response, decoding the body or the remote error.
    ///
    /// A success status with a body that does not decode as `T` is a
    /// [`Error::Decode`], not a remote error.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<UberResponse<T>> {
        if response.status().is_success() {
            let body = response.text().await?;
            let data = serde_json::from_str(&body)?;
            Ok(UberResponse::success(data))
        } else {
            Ok(UberResponse::failure(self.remote_error(response).await))
        }
    }

    /// Extract the remote error from a failed response.
    async fn remote_error(&self, response: reqwest::Response) -> UberError {
        let status = response.status();

        // Try to parse the error body
        match response.json::<UberError>().await {
            Ok(error) => error,
            Err(error) => {
                tracing::warn!(status = %status, error = %error, "Failed to decode error body");
                UberError {
                    message: format!("HTTP {}", status.as_u16()),
                    code: "unknown".to_string(),
                }
            }
        }
    }
}

/// Builder for creating an UberClient.
#[derive(Debug)]
pub struct ClientBuilder {
    credential: Option<Credential>,
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            credential: None,
            base_url: PRODUCTION_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the credential to authenticate with.
    pub fn credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Set the base URL for the API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<UberClient> {
        let credential = self
            .credential
            .ok_or_else(|| Error::Config("credential is required".to_string()))?;

        if credential.is_empty() {
            return Err(Error::Config("credential token is empty".to_string()));
        }

        // Parse and normalize base URL
        let mut base_url = Url::parse(&self.base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        // Build default headers
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let value =
            HeaderValue::from_str(&format!("{} {}", credential.scheme(), credential.token()))
                .map_err(|_| Error::Config("credential token is not a valid header".to_string()))?;
        headers.insert(AUTHORIZATION, value);

        // Build HTTP client
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("uber-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()?;

        Ok(UberClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_credential() {
        let result = ClientBuilder::new().build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_builder_rejects_blank_token() {
        let result = ClientBuilder::new()
            .credential(Credential::server("   "))
            .build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_builder_defaults_to_production() {
        let client = ClientBuilder::new()
            .credential(Credential::server("token"))
            .build()
            .unwrap();

        assert_eq!(client.base_url().as_str(), "https://api.uber.com/");
    }

    #[test]
    fn test_builder_normalizes_trailing_slash() {
        let client = ClientBuilder::new()
            .credential(Credential::client("token"))
            .base_url("http://localhost:8080")
            .build()
            .unwrap();

        assert_eq!(client.base_url().as_str(), "http://localhost:8080/");
    }

    #[test]
    fn test_url_building() {
        let client = ClientBuilder::new()
            .credential(Credential::server("token"))
            .base_url("http://localhost:8080")
            .build()
            .unwrap();

        let url = client.url("v1/products").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v1/products");

        let url = client.url("/v1/products").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v1/products");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = ClientBuilder::new()
            .credential(Credential::server("token"))
            .base_url("not a url")
            .build();
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }
}
