//! Persistence backends implementing [`crate::domain::repositories::KeyValueStore`].
//!
//! # Backends
//!
//! - [`RedisStore`] - Durable Redis storage
//! - [`NullStore`] - No-op backend for in-memory-only deployments and tests

mod null_store;
mod redis_store;

pub use null_store::NullStore;
pub use redis_store::RedisStore;
