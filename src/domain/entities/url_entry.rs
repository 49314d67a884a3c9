//! Url entry representing a registered short code mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A registered mapping between a short code and the URL it was derived from.
///
/// Created once per distinct original URL and never modified afterwards.
/// The `domain` is computed from `original_url` at creation time and stored
/// so it is never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlEntry {
    pub code: String,
    pub original_url: String,
    pub domain: String,
    pub created_at: DateTime<Utc>,
}

impl UrlEntry {
    /// Creates a new entry stamped with the current time.
    pub fn new(code: String, original_url: String, domain: String) -> Self {
        Self {
            code,
            original_url,
            domain,
            created_at: Utc::now(),
        }
    }
}
