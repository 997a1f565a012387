// catalog/config.rs - Runtime configuration
//
// SearchConfig only carries values the search controller needs; the page
// builds it in the browser. ServerConfig is read from the environment by
// the server binary.

use std::time::Duration;

use crate::catalog::model::PriceRange;

/// Courses per results page
pub const DEFAULT_PAGE_SIZE: u32 = 6;

/// Quiescence window of the search input
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Categories requested in the one-shot catalog load
pub const DEFAULT_CATEGORY_PAGE_SIZE: u32 = 100;

/// Price bounds used until (or unless) search stats arrive
pub const DEFAULT_PRICE_RANGE: PriceRange = PriceRange::new(0.0, 1000.0);

/// Which response wins when several searches are in flight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseOrdering {
    /// Every response is applied in arrival order, so a slow stale
    /// response can overwrite a newer one.
    #[default]
    LastArrival,
    /// Only the response of the most recently issued request is applied.
    LatestIssued,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    pub page_size: u32,
    pub debounce_window: Duration,
    pub category_page_size: u32,
    pub default_price_range: PriceRange,
    pub response_ordering: ResponseOrdering,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            debounce_window: DEFAULT_DEBOUNCE,
            category_page_size: DEFAULT_CATEGORY_PAGE_SIZE,
            default_price_range: DEFAULT_PRICE_RANGE,
            response_ordering: ResponseOrdering::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_response_ordering(mut self, ordering: ResponseOrdering) -> Self {
        self.response_ordering = ordering;
        self
    }
}

/// Server-side settings read from the environment
#[cfg(feature = "ssr")]
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Base URL of the course REST backend, without trailing slash
    pub backend_url: String,
}

#[cfg(feature = "ssr")]
impl ServerConfig {
    pub const DEFAULT_BACKEND_URL: &'static str = "http://localhost:8080/api";

    /// Reads `CATALOG_API_URL`
    ///
    /// Call `dotenv::dotenv()` first if a `.env` file should be honored.
    pub fn from_env() -> Self {
        let backend_url = std::env::var("CATALOG_API_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BACKEND_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self { backend_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.page_size, 6);
        assert_eq!(config.debounce_window, Duration::from_millis(1000));
        assert_eq!(config.response_ordering, ResponseOrdering::LastArrival);
        assert!(config.default_price_range.is_valid());
    }

    #[test]
    fn test_page_size_never_zero() {
        let config = SearchConfig::default().with_page_size(0);
        assert_eq!(config.page_size, 1);
    }
}
