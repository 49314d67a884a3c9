//! Domain extraction from submitted URLs.

use crate::domain::ShortenerError;
use url::Url;

/// Extracts the domain counted for a URL.
///
/// Parses the URL, takes its host and strips a single leading `www.` label.
/// Hosts are lowercased by the parser; ports are not part of the domain.
///
/// # Errors
///
/// Returns [`ShortenerError::InvalidInput`] if the URL cannot be parsed or
/// has no host.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(extract_domain("https://www.example.com/a").unwrap(), "example.com");
/// assert_eq!(extract_domain("http://api.example.com:8080").unwrap(), "api.example.com");
/// ```
pub fn extract_domain(input: &str) -> Result<String, ShortenerError> {
    let url = Url::parse(input)
        .map_err(|e| ShortenerError::InvalidInput(format!("Invalid URL: {e}")))?;
    domain_of(&url)
}

fn domain_of(url: &Url) -> Result<String, ShortenerError> {
    let host = url
        .host_str()
        .ok_or_else(|| ShortenerError::InvalidInput(format!("URL has no host: {url}")))?
        .to_ascii_lowercase();

    match host.strip_prefix("www.") {
        Some(rest) if !rest.is_empty() => Ok(rest.to_string()),
        _ => Ok(host),
    }
}
