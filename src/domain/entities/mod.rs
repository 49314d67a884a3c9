//! Core domain entities.
//!
//! Entities are plain data structures. All mutation goes through
//! [`crate::application::UrlStore`] and [`crate::application::DomainMetrics`].
//!
//! # Entity Types
//!
//! - [`UrlEntry`] - A registered mapping between a short code and an original URL
//! - [`DomainCounter`] - The number of distinct URLs submitted for a domain

pub mod domain_counter;
pub mod url_entry;

pub use domain_counter::DomainCounter;
pub use url_entry::UrlEntry;
