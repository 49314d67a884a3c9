//! Key-value persistence trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a persistence backend.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage connection error: {0}")]
    Connection(String),
    #[error("storage operation error: {0}")]
    Operation(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Durable key-value backend addressed by `prefix + code`.
///
/// Unlike a cache, implementations must not swallow failures: every error is
/// returned to [`crate::application::UrlStore`], which aborts the operation
/// without touching its indexes.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::RedisStore`] - Redis-backed storage
/// - [`crate::infrastructure::persistence::NullStore`] - In-memory-only mode
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Stores `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be reached or rejects the write.
    async fn put(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Reads the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` if the key exists
    /// - `Ok(None)` if it does not
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Checks if the backend is reachable.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}
