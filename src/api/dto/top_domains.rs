//! DTOs for the domain ranking endpoint.

use serde::Deserialize;

/// Query parameters for `GET /metrics/top-domains`.
///
/// The response is a bare JSON array of
/// [`crate::domain::entities::DomainCounter`].
#[derive(Debug, Default, Deserialize)]
pub struct TopDomainsQuery {
    pub n: Option<i64>,
}
