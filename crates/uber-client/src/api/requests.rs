//! Trip requests API.

use crate::client::UberClient;
use crate::error::Result;
use crate::response::UberResponse;
use crate::types::{Request, RequestDetails, RequestMap};

/// Parameters for creating a trip request.
#[derive(Debug, Clone)]
pub struct RequestParams {
    /// Product to request.
    pub product_id: String,
    /// Pickup latitude in degrees.
    pub start_latitude: f64,
    /// Pickup longitude in degrees.
    pub start_longitude: f64,
    /// Dropoff latitude in degrees.
    pub end_latitude: f64,
    /// Dropoff longitude in degrees.
    pub end_longitude: f64,
    /// Confirmation id from an earlier surge error, if the rider accepted.
    pub surge_confirmation_id: Option<String>,
}

impl RequestParams {
    /// Render the wire body. Coordinates are sent as strings with five
    /// decimal places.
    fn body(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut body = serde_json::Map::new();
        body.insert("product_id".to_string(), self.product_id.clone().into());
        body.insert("start_latitude".to_string(), fixed5(self.start_latitude).into());
        body.insert("start_longitude".to_string(), fixed5(self.start_longitude).into());
        body.insert("end_latitude".to_string(), fixed5(self.end_latitude).into());
        body.insert("end_longitude".to_string(), fixed5(self.end_longitude).into());
        if let Some(id) = self.surge_confirmation_id.as_deref().filter(|v| !v.trim().is_empty()) {
            body.insert("surge_confirmation_id".to_string(), id.into());
        }
        body
    }
}

/// Format a coordinate with exactly five decimal places.
fn fixed5(value: f64) -> String {
    format!("{:.5}", value)
}

/// Trip requests API client.
pub struct RequestsApi {
    client: UberClient,
}

impl RequestsApi {
    pub(crate) fn new(client: UberClient) -> Self {
        Self { client }
    }

    /// Request a trip on behalf of the authenticated user.
    pub async fn create(&self, params: &RequestParams) -> Result<UberResponse<Request>> {
        self.client.post("v1/requests", &params.body()).await
    }

    /// Get the current details of a trip request.
    pub async fn details(&self, request_id: &str) -> Result<UberResponse<RequestDetails>> {
        self.client.get(&format!("v1/requests/{}", request_id)).await
    }

    /// Get the live map link for a trip request.
    pub async fn map(&self, request_id: &str) -> Result<UberResponse<RequestMap>> {
        self.client.get(&format!("v1/requests/{}/map", request_id)).await
    }

    /// Cancel a trip request. Success is reported as `data == Some(true)`.
    pub async fn cancel(&self, request_id: &str) -> Result<UberResponse<bool>> {
        self.client.delete_flag(&format!("v1/requests/{}", request_id)).await
    }
}
