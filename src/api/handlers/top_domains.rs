//! Handler for the domain ranking endpoint.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::top_domains::TopDomainsQuery;
use crate::domain::entities::DomainCounter;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the most submitted domains.
///
/// # Endpoint
///
/// `GET /metrics/top-domains?n=3`
///
/// # Query Parameters
///
/// - `n` - number of entries (default from `DEFAULT_TOP_N`); zero or
///   negative values yield an empty list
///
/// # Response
///
/// ```json
/// [
///   { "domain": "example.com", "count": 5 },
///   { "domain": "rust-lang.org", "count": 2 }
/// ]
/// ```
///
/// Sorted by count descending, ties broken by domain ascending.
///
/// # Errors
///
/// Returns 400 Bad Request if `n` is not an integer.
pub async fn top_domains_handler(
    State(state): State<AppState>,
    query: Result<Query<TopDomainsQuery>, QueryRejection>,
) -> Result<Json<Vec<DomainCounter>>, AppError> {
    let Query(query) = query?;
    let n = query.n.unwrap_or(state.default_top_n);

    Ok(Json(state.shortener.top_domains(n).await))
}
