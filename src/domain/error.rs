//! Error kinds produced by the shortening core.

use crate::domain::repositories::StorageError;
use thiserror::Error;

/// Errors returned by [`crate::application::UrlStore`] and
/// [`crate::application::ShortenerService`].
///
/// Every failing operation leaves the store and the domain counters exactly
/// as they were before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    /// Empty, unparsable or otherwise unacceptable URL.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No mapping is registered for the code.
    #[error("short code not found: {0}")]
    NotFound(String),

    /// Every probe for this URL collided with a code owned by another URL.
    #[error("no free short code for {url} after {attempts} attempts")]
    CodeExhausted { url: String, attempts: usize },

    /// The persistence backend failed; nothing was written.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<StorageError> for ShortenerError {
    fn from(e: StorageError) -> Self {
        Self::StorageUnavailable(e.to_string())
    }
}
