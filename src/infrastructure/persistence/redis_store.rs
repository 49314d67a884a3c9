//! Redis-backed key-value storage.

use crate::domain::repositories::{KeyValueStore, StorageError, StorageResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info};

/// Redis storage for `prefix + code -> original URL` mappings.
///
/// Uses `ConnectionManager` for automatic reconnection and cheap cloning.
/// Entries are written without expiry. Every failure is returned to the
/// caller so the in-flight registration can be aborted.
pub struct RedisStore {
    client: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> StorageResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            StorageError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            StorageError::Connection(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StorageError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn put(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut conn = self.client.clone();

        conn.set::<_, _, ()>(key, value).await.map_err(|e| {
            error!("Redis SET error for {}: {}", key, e);
            StorageError::Operation(e.to_string())
        })?;

        debug!("Redis SET: {} -> {}", key, value);
        Ok(())
    }

    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let mut conn = self.client.clone();

        let value = conn.get::<_, Option<String>>(key).await.map_err(|e| {
            error!("Redis GET error for {}: {}", key, e);
            StorageError::Operation(e.to_string())
        })?;

        match &value {
            Some(url) => debug!("Redis HIT: {} -> {}", key, url),
            None => debug!("Redis MISS: {}", key),
        }

        Ok(value)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_rejects_invalid_url() {
        let result = RedisStore::connect("not-a-redis-url").await;
        assert!(matches!(result, Err(StorageError::Connection(_))));
    }
}
