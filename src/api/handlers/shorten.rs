//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/page" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "https://s.example.com/7GcR2x_Q" }
/// ```
///
/// - **201 Created**: the URL was registered by this call
/// - **200 OK**: the URL was already registered; the same short URL is returned
///
/// # Errors
///
/// - 400 Bad Request for a missing body, malformed JSON or an invalid URL
/// - 409 Conflict if every candidate code is taken
/// - 500 Internal Server Error if the storage backend fails
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let outcome = state.shortener.shorten(&payload.url).await?;

    let status = if outcome.is_new {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(ShortenResponse {
            short_url: state.short_url(&outcome.code),
        }),
    ))
}
