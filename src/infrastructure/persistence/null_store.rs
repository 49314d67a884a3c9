//! No-op storage for in-memory-only operation.

use crate::domain::repositories::{KeyValueStore, StorageResult};
use async_trait::async_trait;
use tracing::debug;

/// A backend that persists nothing.
///
/// Used when no Redis is configured: mappings then live only in the
/// in-memory indexes of [`crate::application::UrlStore`] for the lifetime of
/// the process. Writes always succeed and reads always miss.
pub struct NullStore;

impl NullStore {
    /// Creates a new NullStore instance.
    pub fn new() -> Self {
        debug!("Using NullStore (persistence disabled)");
        Self
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for NullStore {
    async fn put(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Ok(())
    }

    async fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Ok(None)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
