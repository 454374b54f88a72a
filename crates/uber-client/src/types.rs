//! Resource types for the Uber API.
//!
//! These types mirror the remote JSON contract. They carry no behavior:
//! each is constructed by decoding a response body and discarded once the
//! caller has consumed it.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Products
// ─────────────────────────────────────────────────────────────────────────────

/// A ride product available at a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub product_id: String,
    /// Description of the product.
    #[serde(default)]
    pub description: String,
    /// Display name of the product.
    pub display_name: String,
    /// Passenger capacity.
    #[serde(default)]
    pub capacity: u32,
    /// Image URL representing the product.
    #[serde(default)]
    pub image: String,
}

/// Products available at a given location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCollection {
    /// Available products.
    pub products: Vec<Product>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Estimates
// ─────────────────────────────────────────────────────────────────────────────

/// Estimated price range for a product between two locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceEstimate {
    /// Product the estimate is for.
    pub product_id: String,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency_code: String,
    /// Display name of the product.
    pub display_name: String,
    /// Formatted estimate, e.g. `$23-29`.
    #[serde(default)]
    pub estimate: String,
    /// Lower bound of the estimate.
    #[serde(default)]
    pub low_estimate: Option<f64>,
    /// Upper bound of the estimate.
    #[serde(default)]
    pub high_estimate: Option<f64>,
    /// Surge multiplier in effect.
    pub surge_multiplier: f64,
    /// Expected trip duration in seconds.
    #[serde(default)]
    pub duration: u32,
    /// Expected trip distance in miles.
    #[serde(default)]
    pub distance: f64,
}

/// Price estimates for every product available between two locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceEstimateCollection {
    /// Estimates, one per product.
    pub prices: Vec<PriceEstimate>,
}

/// Estimated pickup time for a product at a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEstimate {
    /// Product the estimate is for.
    pub product_id: String,
    /// Display name of the product.
    pub display_name: String,
    /// Estimated pickup time in seconds.
    pub estimate: u32,
}

/// Pickup estimates for every product available at a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEstimateCollection {
    /// Estimates, one per product.
    pub times: Vec<TimeEstimate>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Promotions
// ─────────────────────────────────────────────────────────────────────────────

/// A promotion available to new users for a trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    /// Text to display to the user.
    #[serde(default)]
    pub display_text: String,
    /// Localized promotion value, e.g. a currency amount.
    #[serde(default)]
    pub localized_value: String,
    /// Promotion type, e.g. `trip_credit`.
    #[serde(rename = "type", default)]
    pub kind: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// User
// ─────────────────────────────────────────────────────────────────────────────

/// A page of the user's trip history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserActivity {
    /// Offset of this page.
    pub offset: u32,
    /// Page size that was requested.
    pub limit: u32,
    /// Total number of trips available.
    pub count: u32,
    /// Trips in this page.
    pub history: Vec<TripSummary>,
}

/// A single trip in the user's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripSummary {
    /// Trip request identifier.
    pub uuid: String,
    /// Unix time the trip was requested.
    #[serde(default)]
    pub request_time: i64,
    /// Product used for the trip.
    #[serde(default)]
    pub product_id: String,
    /// Trip status, e.g. `completed`.
    #[serde(default)]
    pub status: String,
    /// Trip distance in miles.
    #[serde(default)]
    pub distance: f64,
    /// Unix time the trip started.
    #[serde(default)]
    pub start_time: i64,
    /// Unix time the trip ended.
    #[serde(default)]
    pub end_time: i64,
}

/// The authenticated user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// First name.
    #[serde(default)]
    pub first_name: String,
    /// Last name.
    #[serde(default)]
    pub last_name: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Profile picture URL.
    #[serde(default)]
    pub picture: String,
    /// Promotion code the user signed up with.
    #[serde(default)]
    pub promo_code: String,
    /// Unique user identifier.
    pub uuid: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Trip requests
// ─────────────────────────────────────────────────────────────────────────────

/// A newly created trip request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// Unique request identifier.
    pub request_id: String,
    /// Request status, `processing` right after creation.
    pub status: String,
    /// Estimated pickup time in minutes.
    #[serde(default)]
    pub eta: Option<u32>,
    /// Surge multiplier in effect, if any.
    #[serde(default)]
    pub surge_multiplier: Option<f64>,
}

/// Full details of a trip request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestDetails {
    /// Unique request identifier.
    pub request_id: String,
    /// Request status, e.g. `accepted`.
    pub status: String,
    /// Assigned driver, once one accepts.
    #[serde(default)]
    pub driver: Option<Driver>,
    /// Assigned vehicle, once a driver accepts.
    #[serde(default)]
    pub vehicle: Option<Vehicle>,
    /// Current vehicle location.
    #[serde(default)]
    pub location: Option<Location>,
    /// Estimated pickup time in minutes.
    #[serde(default)]
    pub eta: Option<u32>,
    /// Surge multiplier in effect, if any.
    #[serde(default)]
    pub surge_multiplier: Option<f64>,
}

/// Vehicle assigned to a trip request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Vehicle make.
    #[serde(default)]
    pub make: String,
    /// Vehicle model.
    #[serde(default)]
    pub model: String,
    /// License plate.
    #[serde(default)]
    pub license_plate: String,
    /// Vehicle picture URL.
    #[serde(default)]
    pub picture_url: String,
}

/// Driver assigned to a trip request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    /// Driver name.
    #[serde(default)]
    pub name: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone_number: String,
    /// Driver rating.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Driver picture URL.
    #[serde(default)]
    pub picture_url: String,
}

/// A point on the map.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// Link to the live map for a trip request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestMap {
    /// Request the map belongs to.
    pub request_id: String,
    /// URL of the map page.
    pub href: String,
}
