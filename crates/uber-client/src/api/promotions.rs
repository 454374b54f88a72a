//! Promotions API.

use crate::client::UberClient;
use crate::error::Result;
use crate::response::UberResponse;
use crate::types::Promotion;

/// Promotions API client.
pub struct PromotionsApi {
    client: UberClient,
}

impl PromotionsApi {
    pub(crate) fn new(client: UberClient) -> Self {
        Self { client }
    }

    /// Get the promotion available for a trip between two locations.
    pub async fn get(
        &self,
        start_latitude: f64,
        start_longitude: f64,
        end_latitude: f64,
        end_longitude: f64,
    ) -> Result<UberResponse<Promotion>> {
        let query = [
            ("start_latitude", start_latitude.to_string()),
            ("start_longitude", start_longitude.to_string()),
            ("end_latitude", end_latitude.to_string()),
            ("end_longitude", end_longitude.to_string()),
        ];
        self.client.get_with_query("v1/promotions", &query).await
    }
}
