//! Persistence contract for the domain layer.
//!
//! The core treats durable storage as an injected capability. Implementations
//! live in `crate::infrastructure::persistence`; a mock is generated via
//! `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`KeyValueStore`] - `prefix + code -> original URL` persistence

pub mod key_value_store;

pub use key_value_store::{KeyValueStore, StorageError, StorageResult};

#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
