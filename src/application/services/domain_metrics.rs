//! Per-domain submission counters and ranking.

use std::collections::HashMap;

use crate::domain::entities::DomainCounter;

/// Counts distinct registered URLs per domain and ranks domains by count.
///
/// Counters are created at 1 on first observation and never decremented.
/// [`crate::application::ShortenerService`] calls [`DomainMetrics::observe`]
/// exactly once per newly created entry, so repeated shortening of the same
/// URL does not inflate a count.
#[derive(Debug, Default)]
pub struct DomainMetrics {
    counters: HashMap<String, u64>,
}

impl DomainMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the counter for `domain` and returns the new count.
    pub fn observe(&mut self, domain: &str) -> u64 {
        let count = self.counters.entry(domain.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Current count for `domain`, `0` if it was never observed.
    pub fn count(&self, domain: &str) -> u64 {
        self.counters.get(domain).copied().unwrap_or(0)
    }

    /// Number of distinct domains observed.
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Returns up to `n` domains ordered by count descending.
    ///
    /// Ties are broken by domain name ascending so the result is
    /// deterministic. `n <= 0` yields an empty list; `n` larger than the
    /// number of known domains yields all of them.
    ///
    /// Rankings are rebuilt from the counter map on every call.
    pub fn top_n(&self, n: i64) -> Vec<DomainCounter> {
        if n <= 0 {
            return Vec::new();
        }

        let mut ranked: Vec<DomainCounter> = self
            .counters
            .iter()
            .map(|(domain, count)| DomainCounter::new(domain.as_str(), *count))
            .collect();

        ranked.sort_unstable_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.domain.cmp(&b.domain))
        });
        ranked.truncate(usize::try_from(n).unwrap_or(usize::MAX));
        ranked
    }
}
