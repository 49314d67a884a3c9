//! Acceptance checks for submitted URLs.
//!
//! Unlike a normalizer, validation never rewrites the input: the short code
//! is derived from the exact string the client sent.

use crate::domain::ShortenerError;
use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must contain a host")]
    MissingHost,

    #[error("URL must not start or end with whitespace")]
    SurroundingWhitespace,

    #[error("URL must not contain control characters")]
    ControlCharacter,
}

impl From<UrlValidationError> for ShortenerError {
    fn from(e: UrlValidationError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

/// Validates a URL submitted for shortening and returns it parsed.
///
/// # Rules
///
/// 1. Must not be empty or whitespace only
/// 2. Must not have leading/trailing whitespace or contain ASCII control
///    characters; the parser would silently drop them while the stored
///    string keeps them
/// 3. Must parse as an absolute URL
/// 4. Scheme must be `http` or `https` (rejects `javascript:`, `data:`, `file:` ...)
/// 5. Must have a host, since the host is what domain rankings count
///
/// # Errors
///
/// Returns the matching [`UrlValidationError`] variant for the first rule violated.
pub fn validate_url(input: &str) -> Result<Url, UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.trim() != input {
        return Err(UrlValidationError::SurroundingWhitespace);
    }

    if input.chars().any(|c| c.is_ascii_control()) {
        return Err(UrlValidationError::ControlCharacter);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(url)
}
