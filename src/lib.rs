//! # Hashlink
//!
//! A content-addressed URL shortener built with Axum.
//!
//! Every URL maps to a short code derived from its SHA-256 digest, so the same
//! URL always receives the same code. Submissions are counted per domain and
//! exposed as a ranking.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, errors and the storage trait
//! - **Application Layer** ([`application`]) - Code store, domain metrics and
//!   the service coordinating them
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory backends
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"  # Optional
//! export BASE_URL="https://s.example.com"    # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;
