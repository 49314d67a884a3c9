//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::ShortenerService;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    /// Prefix for returned short URLs, without a trailing slash.
    pub base_url: Option<String>,
    /// Ranking size used when the request omits `n`.
    pub default_top_n: i64,
}

impl AppState {
    pub fn new(
        shortener: Arc<ShortenerService>,
        base_url: Option<String>,
        default_top_n: i64,
    ) -> Self {
        Self {
            shortener,
            base_url,
            default_top_n,
        }
    }

    /// Builds the public short URL for a code.
    ///
    /// Returns the bare code when no base URL is configured.
    pub fn short_url(&self, code: &str) -> String {
        match &self.base_url {
            Some(base) => format!("{}/{}", base, code),
            None => code.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::UrlStore;
    use crate::infrastructure::persistence::NullStore;
    use crate::utils::code_generator::CodeGenerator;

    fn state(base_url: Option<&str>) -> AppState {
        let store = UrlStore::new(CodeGenerator::default(), Arc::new(NullStore::new()));
        AppState::new(
            Arc::new(ShortenerService::new(store)),
            base_url.map(str::to_string),
            3,
        )
    }

    #[test]
    fn test_short_url_with_base() {
        let state = state(Some("https://s.example.com"));
        assert_eq!(state.short_url("abc123XY"), "https://s.example.com/abc123XY");
    }

    #[test]
    fn test_short_url_without_base() {
        let state = state(None);
        assert_eq!(state.short_url("abc123XY"), "abc123XY");
    }
}
