//! Bidirectional code/URL mapping store with an explicit collision policy.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::ShortenerError;
use crate::domain::entities::UrlEntry;
use crate::domain::repositories::KeyValueStore;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::extract_domain::extract_domain;

/// Key prefix used for persisted mappings.
pub const DEFAULT_KEY_PREFIX: &str = "urlshortener:";

/// Extra probes attempted after the base code collides.
pub const DEFAULT_MAX_PROBES: usize = 4;

/// Result of [`UrlStore::register_or_get`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub entry: UrlEntry,
    /// `true` only when this call created the entry.
    pub is_new: bool,
}

/// Authoritative mapping between short codes and original URLs.
///
/// Keeps two indexes (`code -> entry` and `url -> code`) that are only ever
/// updated together, after the backend write has succeeded. The store itself
/// is not synchronized; [`crate::application::ShortenerService`] wraps it in a
/// lock so both indexes change atomically for concurrent readers.
///
/// # Collision Policy
///
/// When the base code is already owned by a different URL, the store probes
/// progressively longer prefixes of the same digest, up to `max_probes` extra
/// attempts, and fails with [`ShortenerError::CodeExhausted`] after that.
/// An existing mapping is never overwritten.
pub struct UrlStore {
    by_code: HashMap<String, UrlEntry>,
    by_url: HashMap<String, String>,
    generator: CodeGenerator,
    max_probes: usize,
    backend: Arc<dyn KeyValueStore>,
    key_prefix: String,
}

impl UrlStore {
    /// Creates an empty store backed by `backend`.
    pub fn new(generator: CodeGenerator, backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            by_code: HashMap::new(),
            by_url: HashMap::new(),
            generator,
            max_probes: DEFAULT_MAX_PROBES,
            backend,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }

    /// Sets how many longer codes are tried after the base code collides.
    pub fn with_max_probes(mut self, max_probes: usize) -> Self {
        self.max_probes = max_probes;
        self
    }

    /// Sets the prefix prepended to codes when addressing the backend.
    pub fn with_key_prefix(mut self, key_prefix: impl Into<String>) -> Self {
        self.key_prefix = key_prefix.into();
        self
    }

    /// Returns a handle to the persistence backend.
    pub fn backend(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.backend)
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// Looks up the code registered for an original URL.
    pub fn get(&self, url: &str) -> Option<&str> {
        self.by_url.get(url).map(String::as_str)
    }

    /// Maps a short code back to its original URL.
    ///
    /// Checks the in-memory index first and falls back to the backend for
    /// mappings persisted by an earlier process. Never mutates the store.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::StorageUnavailable`] if the backend lookup fails.
    pub async fn resolve(&self, code: &str) -> Result<Option<String>, ShortenerError> {
        if let Some(entry) = self.by_code.get(code) {
            debug!("Resolved {} from memory", code);
            return Ok(Some(entry.original_url.clone()));
        }

        let key = self.storage_key(code);
        let stored = self
            .backend
            .get(&key)
            .await
            .inspect_err(|e| error!("Backend GET error for {}: {}", code, e))?;

        if stored.is_some() {
            debug!("Resolved {} from backend", code);
        }

        Ok(stored)
    }

    /// Returns the existing entry for `url`, or registers a new one.
    ///
    /// # Steps
    ///
    /// 1. A URL that is already registered returns its entry with `is_new = false`
    /// 2. Otherwise candidate codes are derived from the URL digest
    /// 3. A candidate owned by a different URL, in memory or in the backend,
    ///    is skipped; a backend mapping to the same URL is adopted as is
    /// 4. The backend write happens first, then both indexes are updated
    ///
    /// # Errors
    ///
    /// - [`ShortenerError::InvalidInput`] if no domain can be derived from `url`
    /// - [`ShortenerError::CodeExhausted`] if every candidate collides
    /// - [`ShortenerError::StorageUnavailable`] if the backend fails; the
    ///   indexes are left untouched
    pub async fn register_or_get(&mut self, url: &str) -> Result<Registration, ShortenerError> {
        if let Some(entry) = self.by_url.get(url).and_then(|code| self.by_code.get(code)) {
            debug!("Already registered: {} -> {}", url, entry.code);
            return Ok(Registration {
                entry: entry.clone(),
                is_new: false,
            });
        }

        let domain = extract_domain(url)?;
        let mut attempts = 0;

        for code in self.generator.candidates(url).take(self.max_probes.saturating_add(1)) {
            attempts += 1;

            if let Some(owner) = self.by_code.get(&code) {
                warn!(
                    "Code collision: {} is owned by {}, probing for {}",
                    code, owner.original_url, url
                );
                continue;
            }

            let key = self.storage_key(&code);
            let stored = self
                .backend
                .get(&key)
                .await
                .inspect_err(|e| error!("Backend GET error for {}: {}", code, e))?;

            match stored {
                Some(owner) if owner != url => {
                    warn!(
                        "Code collision in backend: {} is owned by {}, probing for {}",
                        code, owner, url
                    );
                    continue;
                }
                Some(_) => debug!("Adopting persisted mapping {} -> {}", code, url),
                None => self
                    .backend
                    .put(&key, url)
                    .await
                    .inspect_err(|e| error!("Backend SET error for {}: {}", code, e))?,
            }

            let entry = UrlEntry::new(code.clone(), url.to_string(), domain);
            self.by_url.insert(url.to_string(), code.clone());
            self.by_code.insert(code, entry.clone());

            info!(
                "Registered {} -> {} (domain: {}, attempts: {})",
                entry.code, entry.original_url, entry.domain, attempts
            );
            return Ok(Registration {
                entry,
                is_new: true,
            });
        }

        error!("Code space exhausted for {} after {} attempts", url, attempts);
        Err(ShortenerError::CodeExhausted {
            url: url.to_string(),
            attempts,
        })
    }

    fn storage_key(&self, code: &str) -> String {
        format!("{}{}", self.key_prefix, code)
    }
}
