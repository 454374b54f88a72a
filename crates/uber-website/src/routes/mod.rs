//! Site routes.

pub mod auth;
pub mod estimates;
pub mod home;
pub mod products;
pub mod requests;
pub mod user;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Pickup point the forms start from (Melbourne).
pub(crate) const DEFAULT_START: (f64, f64) = (-37.8602828, 145.079616);

/// Drop-off point the estimate forms start from (Sorrento).
pub(crate) const DEFAULT_END: (f64, f64) = (-38.3436789, 144.7430275);

/// Build the site router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::index))
        // OAuth flow
        .route("/auth", get(auth::index))
        .route("/auth/callback", get(auth::callback))
        // Public resources (server token)
        .route("/products", get(products::form).post(products::results))
        .route("/price", get(estimates::price_form).post(estimates::price_results))
        .route("/time", get(estimates::time_form).post(estimates::time_results))
        // Rider resources (cookie token)
        .route("/user", get(user::profile))
        .route("/requests", get(requests::index).post(requests::create))
        .route("/requests/new", get(requests::new_form))
        .route("/requests/{id}", get(requests::show))
        .route("/requests/{id}/map", get(requests::map))
        .route("/requests/{id}/cancel", post(requests::cancel))
        .route("/requests/{id}/status", post(requests::update_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
