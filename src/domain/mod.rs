//! Domain layer containing business entities, errors and persistence contracts.
//!
//! This module has no dependencies on the HTTP or infrastructure layers.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures ([`entities::UrlEntry`], [`entities::DomainCounter`])
//! - [`error`] - Error kinds produced by the shortening core
//! - [`repositories`] - The key-value persistence capability injected into the store
//!
//! # Shorten Flow
//!
//! 1. HTTP handler receives `POST /shorten`
//! 2. [`crate::application::ShortenerService`] validates the URL and takes the write lock
//! 3. [`crate::application::UrlStore`] returns the existing code or registers a new entry
//! 4. On a new entry, [`crate::application::DomainMetrics`] counts its domain once

pub mod entities;
pub mod error;
pub mod repositories;

pub use error::ShortenerError;
