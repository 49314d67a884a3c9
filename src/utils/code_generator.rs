//! Deterministic short code derivation.
//!
//! A code is a prefix of the URL-safe base64 encoding (no padding) of the
//! SHA-256 digest of the exact submitted URL bytes. No normalization is
//! applied: `https://a.com` and `https://a.com/` produce different codes.

use base64::Engine as _;
use sha2::{Digest, Sha256};

/// Code length used when none is configured.
pub const DEFAULT_CODE_LENGTH: usize = 8;

/// Length of an unpadded base64 encoding of a 32-byte digest.
///
/// Probing can never extend a code past this.
pub const MAX_CODE_LENGTH: usize = 43;

/// Derives fixed-length short codes from URLs.
///
/// Stateless and `Copy`; safe to call from any number of threads.
///
/// # Examples
///
/// ```ignore
/// let generator = CodeGenerator::new(8);
/// let code = generator.generate("https://example.com/a");
/// assert_eq!(code.len(), 8);
/// assert_eq!(code, generator.generate("https://example.com/a"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeGenerator {
    length: usize,
}

impl CodeGenerator {
    /// Creates a generator producing codes of `length` characters.
    ///
    /// `length` is clamped to `1..=MAX_CODE_LENGTH`.
    pub fn new(length: usize) -> Self {
        Self {
            length: length.clamp(1, MAX_CODE_LENGTH),
        }
    }

    /// Returns the base code length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Derives the base code for `url`.
    pub fn generate(&self, url: &str) -> String {
        let mut encoded = encode_digest(url);
        encoded.truncate(self.length);
        encoded
    }

    /// Returns the code for probe number `probe`, where probe `0` is the base
    /// code and each further probe appends one more digest character.
    ///
    /// Returns `None` once the digest has no characters left.
    pub fn candidate(&self, url: &str, probe: usize) -> Option<String> {
        self.candidates(url).nth(probe)
    }

    /// Iterates over the base code followed by every longer probe code.
    ///
    /// The digest is computed once per call.
    pub fn candidates(&self, url: &str) -> impl Iterator<Item = String> + use<> {
        let encoded = encode_digest(url);
        (self.length..=encoded.len()).map(move |len| encoded[..len].to_string())
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

fn encode_digest(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(digest)
}
