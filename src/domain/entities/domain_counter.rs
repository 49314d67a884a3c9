//! Per-domain submission counter.

use serde::Serialize;

/// Number of distinct original URLs registered for a domain.
///
/// Only [`crate::application::DomainMetrics`] creates or increments counters,
/// and counts never decrease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainCounter {
    pub domain: String,
    pub count: u64,
}

impl DomainCounter {
    pub fn new(domain: impl Into<String>, count: u64) -> Self {
        Self {
            domain: domain.into(),
            count,
        }
    }
}
