//! Core services of the shortening pipeline.

pub mod domain_metrics;
pub mod shortener_service;
pub mod url_store;

pub use domain_metrics::DomainMetrics;
pub use shortener_service::{ShortenOutcome, ShortenerService};
pub use url_store::{Registration, UrlStore};
