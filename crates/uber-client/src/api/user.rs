//! User profile and history API.

use crate::client::UberClient;
use crate::error::Result;
use crate::response::UberResponse;
use crate::types::{UserActivity, UserProfile};

/// User API client.
pub struct UserApi {
    client: UberClient,
}

impl UserApi {
    pub(crate) fn new(client: UberClient) -> Self {
        Self { client }
    }

    /// Get the authenticated user's profile.
    pub async fn profile(&self) -> Result<UberResponse<UserProfile>> {
        self.client.get("v1/me").await
    }

    /// Get a page of the authenticated user's trip history.
    ///
    /// `offset` and `limit` are passed through as given; the remote end
    /// validates them.
    pub async fn activity(&self, offset: i32, limit: i32) -> Result<UberResponse<UserActivity>> {
        let query = [("offset", offset.to_string()), ("limit", limit.to_string())];
        self.client.get_with_query("v1.1/history", &query).await
    }
}
