//! Infrastructure layer for external integrations.
//!
//! Implements the persistence contract defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Redis and no-op key-value backends

pub mod persistence;
