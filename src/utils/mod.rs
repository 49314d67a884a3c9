//! Pure helper functions used by the shortening core.
//!
//! - [`code_generator`] - Deterministic digest-based short codes
//! - [`url_validator`] - Acceptance checks for submitted URLs
//! - [`extract_domain`] - Domain derivation for rankings

pub mod code_generator;
pub mod extract_domain;
pub mod url_validator;
