//! API endpoint implementations.

mod estimates;
mod products;
mod promotions;
mod requests;
mod user;

pub use estimates::{EstimatesApi, TimeEstimateOptions};
pub use products::ProductsApi;
pub use promotions::PromotionsApi;
pub use requests::{RequestParams, RequestsApi};
pub use user::UserApi;
