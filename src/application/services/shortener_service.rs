//! Shorten, resolve and ranking orchestration.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::application::services::domain_metrics::DomainMetrics;
use crate::application::services::url_store::UrlStore;
use crate::domain::ShortenerError;
use crate::domain::entities::DomainCounter;
use crate::domain::repositories::KeyValueStore;
use crate::utils::url_validator::validate_url;

/// Outcome of a successful [`ShortenerService::shorten`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenOutcome {
    pub code: String,
    pub original_url: String,
    /// `false` when the URL had already been shortened.
    pub is_new: bool,
}

struct Registry {
    store: UrlStore,
    metrics: DomainMetrics,
}

/// Service coordinating [`UrlStore`] and [`DomainMetrics`].
///
/// Both components sit behind one lock. A shorten call holds the write lock
/// for the whole registration (uniqueness check, backend write, index update
/// and counter increment), so no reader can resolve a new code before its
/// domain count is visible, and concurrent registrations of one URL always
/// yield the same code.
///
/// Constructed once at startup and shared through [`crate::state::AppState`].
pub struct ShortenerService {
    registry: RwLock<Registry>,
    backend: Arc<dyn KeyValueStore>,
}

impl ShortenerService {
    /// Creates a service around a freshly configured store.
    pub fn new(store: UrlStore) -> Self {
        let backend = store.backend();
        Self {
            registry: RwLock::new(Registry {
                store,
                metrics: DomainMetrics::new(),
            }),
            backend,
        }
    }

    /// Shortens a URL, counting its domain only on first registration.
    ///
    /// # Errors
    ///
    /// - [`ShortenerError::InvalidInput`] if the URL is empty, unparsable,
    ///   not HTTP(S) or has no host
    /// - [`ShortenerError::CodeExhausted`] if no collision-free code is left
    /// - [`ShortenerError::StorageUnavailable`] if the backend fails
    pub async fn shorten(&self, url: &str) -> Result<ShortenOutcome, ShortenerError> {
        validate_url(url)?;

        let mut registry = self.registry.write().await;
        let Registry { store, metrics } = &mut *registry;

        let registration = store.register_or_get(url).await?;
        if registration.is_new {
            let count = metrics.observe(&registration.entry.domain);
            debug!(
                "Domain {} now has {} registered urls",
                registration.entry.domain, count
            );
        }

        Ok(ShortenOutcome {
            code: registration.entry.code,
            original_url: registration.entry.original_url,
            is_new: registration.is_new,
        })
    }

    /// Resolves a short code to its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::NotFound`] if the code has no mapping.
    /// Returns [`ShortenerError::StorageUnavailable`] if the backend lookup fails.
    pub async fn resolve(&self, code: &str) -> Result<String, ShortenerError> {
        let registry = self.registry.read().await;

        registry
            .store
            .resolve(code)
            .await?
            .ok_or_else(|| ShortenerError::NotFound(code.to_string()))
    }

    /// Looks up the code already assigned to `url`.
    pub async fn code_for(&self, url: &str) -> Option<String> {
        let registry = self.registry.read().await;
        registry.store.get(url).map(str::to_string)
    }

    /// Returns the `n` most submitted domains.
    pub async fn top_domains(&self, n: i64) -> Vec<DomainCounter> {
        self.registry.read().await.metrics.top_n(n)
    }

    /// Returns the number of distinct URLs registered for `domain`.
    pub async fn domain_count(&self, domain: &str) -> u64 {
        self.registry.read().await.metrics.count(domain)
    }

    /// Returns the number of registered URLs.
    pub async fn registered_urls(&self) -> usize {
        self.registry.read().await.store.len()
    }

    /// Checks if the persistence backend is reachable.
    pub async fn health_check(&self) -> bool {
        self.backend.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockKeyValueStore, StorageError};
    use crate::infrastructure::persistence::NullStore;
    use crate::utils::code_generator::CodeGenerator;

    fn test_service() -> ShortenerService {
        let store = UrlStore::new(CodeGenerator::default(), Arc::new(NullStore::new()));
        ShortenerService::new(store)
    }

    #[tokio::test]
    async fn test_shorten_new_url() {
        let service = test_service();

        let outcome = service.shorten("http://example.com/a").await.unwrap();

        assert!(outcome.is_new);
        assert_eq!(outcome.original_url, "http://example.com/a");
        assert_eq!(service.domain_count("example.com").await, 1);
    }

    #[tokio::test]
    async fn test_shorten_is_idempotent_and_counts_once() {
        let service = test_service();

        let first = service.shorten("http://x.com/1").await.unwrap();
        let second = service.shorten("http://x.com/1").await.unwrap();

        assert!(first.is_new);
        assert!(!second.is_new);
        assert_eq!(first.code, second.code);
        assert_eq!(service.domain_count("x.com").await, 1);

        service.shorten("http://x.com/2").await.unwrap();
        assert_eq!(service.domain_count("x.com").await, 2);
    }

    #[tokio::test]
    async fn test_shorten_counts_www_and_bare_host_together() {
        let service = test_service();

        service.shorten("https://www.x.com/a").await.unwrap();
        service.shorten("https://x.com/b").await.unwrap();

        assert_eq!(service.domain_count("x.com").await, 2);
    }

    #[tokio::test]
    async fn test_resolve_round_trip() {
        let service = test_service();

        let outcome = service.shorten("https://rust-lang.org/learn").await.unwrap();

        assert_eq!(
            service.resolve(&outcome.code).await.unwrap(),
            "https://rust-lang.org/learn"
        );
        assert_eq!(
            service.code_for("https://rust-lang.org/learn").await,
            Some(outcome.code)
        );
    }

    #[tokio::test]
    async fn test_resolve_unknown_code() {
        let service = test_service();

        let err = service.resolve("unknown").await.unwrap_err();

        assert_eq!(err, ShortenerError::NotFound("unknown".to_string()));
    }

    #[tokio::test]
    async fn test_shorten_rejects_invalid_input() {
        let service = test_service();

        for input in ["", "   ", "not-a-valid-url", "ftp://example.com/file"] {
            let err = service.shorten(input).await.unwrap_err();
            assert!(
                matches!(err, ShortenerError::InvalidInput(_)),
                "{input:?} should be rejected"
            );
        }

        assert_eq!(service.registered_urls().await, 0);
        assert!(service.top_domains(3).await.is_empty());
    }

    #[tokio::test]
    async fn test_top_domains_ranking() {
        let service = test_service();

        for i in 0..5 {
            service.shorten(&format!("https://b.com/{i}")).await.unwrap();
            service.shorten(&format!("https://a.com/{i}")).await.unwrap();
        }
        for i in 0..3 {
            service.shorten(&format!("https://c.com/{i}")).await.unwrap();
        }

        let top = service.top_domains(2).await;

        assert_eq!(
            top,
            vec![DomainCounter::new("a.com", 5), DomainCounter::new("b.com", 5)]
        );
    }

    #[tokio::test]
    async fn test_storage_failure_leaves_no_partial_state() {
        let mut backend = MockKeyValueStore::new();
        backend.expect_get().returning(|_| Ok(None));
        backend
            .expect_put()
            .returning(|_, _| Err(StorageError::Connection("refused".to_string())));

        let store = UrlStore::new(CodeGenerator::default(), Arc::new(backend));
        let service = ShortenerService::new(store);

        let err = service.shorten("https://example.com").await.unwrap_err();

        assert!(matches!(err, ShortenerError::StorageUnavailable(_)));
        assert_eq!(service.registered_urls().await, 0);
        assert_eq!(service.domain_count("example.com").await, 0);
        assert!(service.code_for("https://example.com").await.is_none());
    }

    #[tokio::test]
    async fn test_health_check_delegates_to_backend() {
        let mut backend = MockKeyValueStore::new();
        backend.expect_health_check().times(1).returning(|| false);

        let store = UrlStore::new(CodeGenerator::default(), Arc::new(backend));
        let service = ShortenerService::new(store);

        assert!(!service.health_check().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_shorten_of_same_url() {
        let service = Arc::new(test_service());
        let mut handles = vec![];

        for _ in 0..32 {
            let service = Arc::clone(&service);
            handles.push(tokio::spawn(async move {
                service.shorten("https://example.com/same").await.unwrap()
            }));
        }

        let mut codes = vec![];
        let mut new_count = 0;
        for handle in handles {
            let outcome = handle.await.unwrap();
            if outcome.is_new {
                new_count += 1;
            }
            codes.push(outcome.code);
        }

        codes.dedup();
        assert_eq!(codes.len(), 1);
        assert_eq!(new_count, 1);
        assert_eq!(service.domain_count("example.com").await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_shorten_of_distinct_urls() {
        let service = Arc::new(test_service());
        let mut handles = vec![];

        for i in 0..50 {
            let service = Arc::clone(&service);
            handles.push(tokio::spawn(async move {
                service
                    .shorten(&format!("https://example{}.com/page", i % 5))
                    .await
                    .unwrap();
                service.shorten(&format!("https://other.com/{i}")).await.unwrap()
            }));
        }

        for handle in handles {
            let outcome = handle.await.unwrap();
            assert_eq!(
                service.resolve(&outcome.code).await.unwrap(),
                outcome.original_url
            );
        }

        assert_eq!(service.domain_count("other.com").await, 50);
        assert_eq!(service.registered_urls().await, 55);
        assert_eq!(service.top_domains(1).await[0].domain, "other.com");
    }
}
