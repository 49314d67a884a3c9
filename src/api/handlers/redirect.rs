//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::{debug, error};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with 302 Found and a `Location` header. Codes unknown to the
/// in-memory index are looked up in the storage backend before giving up.
///
/// `Location` carries the serialized form of the stored URL, so non-ASCII
/// characters are percent-encoded.
///
/// # Errors
///
/// Returns 404 Not Found if the code has no mapping.
/// Returns 500 Internal Server Error if the backend lookup fails.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.shortener.resolve(&code).await?;

    let location = Url::parse(&original_url).map_err(|e| {
        error!("Stored URL for {} is not parseable: {}", code, e);
        AppError::internal("Stored URL is invalid", json!({ "code": code }))
    })?;

    debug!("Redirect {} -> {}", code, location);

    Ok((StatusCode::FOUND, [(header::LOCATION, String::from(location))]))
}
