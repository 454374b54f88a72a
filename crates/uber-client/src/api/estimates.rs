//! Price and pickup time estimates API.

use crate::client::UberClient;
use crate::error::Result;
use crate::response::UberResponse;
use crate::types::{PriceEstimateCollection, TimeEstimateCollection};

/// Optional parameters for a pickup time estimate.
#[derive(Debug, Default, Clone)]
pub struct TimeEstimateOptions {
    /// Scope the estimate to a rider, sent as `customer_uuid`.
    pub customer_id: Option<String>,
    /// Scope the estimate to a single product.
    pub product_id: Option<String>,
}

/// Estimates API client.
pub struct EstimatesApi {
    client: UberClient,
}

impl EstimatesApi {
    pub(crate) fn new(client: UberClient) -> Self {
        Self { client }
    }

    /// Get price estimates between two locations, one per product.
    pub async fn price(
        &self,
        start_latitude: f64,
        start_longitude: f64,
        end_latitude: f64,
        end_longitude: f64,
    ) -> Result<UberResponse<PriceEstimateCollection>> {
        let query = [
            ("start_latitude", start_latitude.to_string()),
            ("start_longitude", start_longitude.to_string()),
            ("end_latitude", end_latitude.to_string()),
            ("end_longitude", end_longitude.to_string()),
        ];
        self.client.get_with_query("v1/estimates/price", &query).await
    }

    /// Get pickup time estimates at a location, one per product.
    pub async fn time(
        &self,
        start_latitude: f64,
        start_longitude: f64,
    ) -> Result<UberResponse<TimeEstimateCollection>> {
        self.time_with_options(start_latitude, start_longitude, TimeEstimateOptions::default())
            .await
    }

    /// Get pickup time estimates, narrowed by the given options.
    ///
    /// Blank options are not sent.
    pub async fn time_with_options(
        &self,
        start_latitude: f64,
        start_longitude: f64,
        options: TimeEstimateOptions,
    ) -> Result<UberResponse<TimeEstimateCollection>> {
        let mut query = vec![
            ("start_latitude", start_latitude.to_string()),
            ("start_longitude", start_longitude.to_string()),
        ];
        if let Some(customer_id) = options.customer_id.filter(|v| !v.trim().is_empty()) {
            query.push(("customer_uuid", customer_id));
        }
        if let Some(product_id) = options.product_id.filter(|v| !v.trim().is_empty()) {
            query.push(("product_id", product_id));
        }
        self.client.get_with_query("v1/estimates/time", &query).await
    }
}
