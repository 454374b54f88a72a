//! Products API.

use crate::client::UberClient;
use crate::error::Result;
use crate::response::UberResponse;
use crate::types::ProductCollection;

/// Products API client.
pub struct ProductsApi {
    client: UberClient,
}

impl ProductsApi {
    pub(crate) fn new(client: UberClient) -> Self {
        Self { client }
    }

    /// List the products available at a location.
    ///
    /// A location with no coverage yields an empty product list, not an
    /// error.
    pub async fn list(&self, latitude: f64, longitude: f64) -> Result<UberResponse<ProductCollection>> {
        let query = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
        ];
        self.client.get_with_query("v1/products", &query).await
    }
}
