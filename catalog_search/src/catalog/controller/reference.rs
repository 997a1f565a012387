// catalog/controller/reference.rs - One-shot category and stats data
//
// Both loads run once at mount with no retry. Failures are logged and the
// page carries on: category constraints become no-ops, facet counts are
// hidden, and the price range keeps its default bounds.

use crate::catalog::backend::CatalogBackend;
use crate::catalog::error::BackendError;
use crate::catalog::model::{Category, PriceRange, SearchStats};

/// Load state of the category catalog
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CatalogStatus {
    #[default]
    Pending,
    Ready(Vec<Category>),
    Unavailable,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReferenceData {
    categories: CatalogStatus,
    stats: Option<SearchStats>,
}

impl ReferenceData {
    /// Loaded categories, empty while pending or after a failed load
    pub fn categories(&self) -> &[Category] {
        match &self.categories {
            CatalogStatus::Ready(categories) => categories,
            _ => &[],
        }
    }

    pub fn is_catalog_pending(&self) -> bool {
        self.categories == CatalogStatus::Pending
    }

    pub fn stats(&self) -> Option<&SearchStats> {
        self.stats.as_ref()
    }

    /// Price bounds reported by the backend, if they form a valid range
    pub fn price_bounds(&self) -> Option<PriceRange> {
        self.stats
            .as_ref()
            .map(|s| PriceRange::new(s.min_price, s.max_price))
            .filter(PriceRange::is_valid)
    }

    pub fn apply_categories(&mut self, result: Result<Vec<Category>, BackendError>) {
        self.categories = match result {
            Ok(categories) => {
                tracing::info!("Loaded {} categories", categories.len());
                CatalogStatus::Ready(categories)
            }
            Err(e) => {
                tracing::warn!("Category load failed, category filter disabled: {}", e);
                CatalogStatus::Unavailable
            }
        };
    }

    pub fn apply_stats(&mut self, result: Result<SearchStats, BackendError>) {
        match result {
            Ok(stats) => {
                tracing::info!(
                    "Loaded search stats: price {}..={}",
                    stats.min_price,
                    stats.max_price
                );
                self.stats = Some(stats);
            }
            Err(e) => tracing::warn!("Search stats load failed, using default bounds: {}", e),
        }
    }
}

/// Raw outcome of the two reference requests
#[derive(Clone, Debug)]
pub struct ReferenceLoad {
    pub categories: Result<Vec<Category>, BackendError>,
    pub stats: Result<SearchStats, BackendError>,
}

/// Issue the category and stats requests
///
/// Neither result is retried; the caller applies both to `ReferenceData`.
pub async fn fetch_reference_data<B: CatalogBackend>(
    backend: &B,
    category_page_size: u32,
) -> ReferenceLoad {
    let categories = backend.get_all_categories(0, category_page_size).await;
    let stats = backend.get_search_stats().await;
    ReferenceLoad { categories, stats }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::Level;
    use std::collections::BTreeMap;

    #[test]
    fn test_starts_pending() {
        let data = ReferenceData::default();
        assert!(data.is_catalog_pending());
        assert!(data.categories().is_empty());
        assert!(data.price_bounds().is_none());
    }

    #[test]
    fn test_failed_category_load_is_not_pending() {
        let mut data = ReferenceData::default();
        data.apply_categories(Err(BackendError::Transport("refused".to_string())));
        assert!(!data.is_catalog_pending());
        assert_eq!(data.categories, CatalogStatus::Unavailable);
        assert!(data.categories().is_empty());
    }

    #[test]
    fn test_stats_provide_bounds() {
        let mut data = ReferenceData::default();
        data.apply_stats(Ok(SearchStats {
            min_price: 0.0,
            max_price: 250.0,
            level_counts: BTreeMap::from([(Level::Beginner, 3)]),
        }));
        assert_eq!(data.price_bounds(), Some(PriceRange::new(0.0, 250.0)));
    }

    #[test]
    fn test_inverted_stats_bounds_are_ignored() {
        let mut data = ReferenceData::default();
        data.apply_stats(Ok(SearchStats {
            min_price: 90.0,
            max_price: 10.0,
            level_counts: BTreeMap::new(),
        }));
        assert!(data.stats().is_some());
        assert_eq!(data.price_bounds(), None);
    }

    #[test]
    fn test_failed_stats_load_is_swallowed() {
        let mut data = ReferenceData::default();
        data.apply_stats(Err(BackendError::Decode("bad json".to_string())));
        assert!(data.stats().is_none());
    }
}
