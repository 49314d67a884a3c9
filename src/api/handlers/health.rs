//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{ComponentCheck, HealthChecks, HealthResponse};
use crate::state::AppState;

/// `GET /health`
///
/// Responds 200 while the storage backend answers its health check and 503
/// otherwise, with the same body in both cases:
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "registered_urls": 3,
///   "checks": { "storage": { "status": "ok" } }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let storage = if state.shortener.health_check().await {
        ComponentCheck::ok()
    } else {
        tracing::warn!("Storage backend health check failed");
        ComponentCheck::error("Storage backend unreachable")
    };

    let (status, code) = if storage.is_ok() {
        ("healthy", StatusCode::OK)
    } else {
        ("degraded", StatusCode::SERVICE_UNAVAILABLE)
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        registered_urls: state.shortener.registered_urls().await,
        checks: HealthChecks { storage },
    };

    (code, Json(response))
}
