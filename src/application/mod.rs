//! Application layer holding the shortening core.
//!
//! # Components
//!
//! - [`services::url_store::UrlStore`] - Bidirectional code/URL mapping with collision probing
//! - [`services::domain_metrics::DomainMetrics`] - Per-domain counters and top-N ranking
//! - [`services::shortener_service::ShortenerService`] - Orchestration under a single lock
//!
//! Code derivation itself lives in [`crate::utils::code_generator`].

pub mod services;

pub use services::{DomainMetrics, Registration, ShortenOutcome, ShortenerService, UrlStore};
