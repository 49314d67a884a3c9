//! API route configuration.

use crate::api::handlers::{shorten_handler, top_domains_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Shortening and ranking routes.
///
/// # Endpoints
///
/// - `POST /shorten`              - Register a URL and return its short URL
/// - `GET  /metrics/top-domains`  - Most submitted domains
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/metrics/top-domains", get(top_domains_handler))
}
