// catalog/backend.rs - The three backend operations the search page consumes
//
// The controller only talks to `CatalogBackend`. In the browser it is backed
// by server functions; on the server the REST client implements it directly;
// tests use an in-memory catalog.

use crate::catalog::error::BackendError;
use crate::catalog::model::{Category, SearchParams, SearchResultPage, SearchStats};

#[allow(async_fn_in_trait)]
pub trait CatalogBackend {
    /// `advancedSearch(params)`
    async fn advanced_search(&self, params: SearchParams) -> Result<SearchResultPage, BackendError>;

    /// `getAllCategories({page, size})`
    async fn get_all_categories(&self, page: u32, size: u32) -> Result<Vec<Category>, BackendError>;

    /// `getSearchStats()`
    async fn get_search_stats(&self) -> Result<SearchStats, BackendError>;
}

/// Backend reached through the crate's server functions
#[cfg(any(feature = "ssr", feature = "hydrate"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerFnBackend;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
impl CatalogBackend for ServerFnBackend {
    async fn advanced_search(
        &self,
        params: SearchParams,
    ) -> Result<SearchResultPage, BackendError> {
        crate::catalog::server_fns::advanced_search(params)
            .await
            .map_err(|e| BackendError::Server(e.to_string()))
    }

    async fn get_all_categories(

        &self,

        page: u32,

        size: u32,

    ) -> Result<Vec<Category>, BackendError> {
        crate::catalog::server_fns::get_all_categories(page, size)
            .await
            .map_err(|e| BackendError::Server(e.to_string()))
    }

    async fn get_search_stats(&self) -> Result<SearchStats, BackendError> {
        crate::catalog::server_fns::get_search_stats()
            .await
            .map_err(|e| BackendError::Server(e.to_string()))
    }
}
