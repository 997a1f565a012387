// catalog/server_fns.rs - Leptos server function declarations
//
// The #[server] macro generates the real function on the server and an
// HTTP stub in the browser. Each function forwards to the course backend.
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use crate::catalog::model::*;

#[cfg(feature = "ssr")]
fn backend() -> Result<crate::catalog::api::RestBackend, ServerFnError> {
    use crate::catalog::api::{client, RestBackend};

    // First try to get from context (for testing or if manually set)
    if let Some(backend) = use_context::<RestBackend>() {
        return Ok(backend);
    }

    client::get_client().ok_or_else(|| ServerFnError::new("Course backend not configured"))
}

/// `advancedSearch`: one page of courses for the given facets
#[server(AdvancedSearch, "/api")]
pub async fn advanced_search(params: SearchParams) -> Result<SearchResultPage, ServerFnError> {
    tracing::info!("Search request: {:?}", params);

    let backend = backend()?;
    let result = backend.advanced_search(&params).await;

    match &result {
        Ok(page) => tracing::info!(
            "Search successful: {} courses on page, {} total",
            page.items.len(),
            page.total_elements
        ),
        Err(e) => tracing::error!("Search failed: {}", e),
    }

    result.map_err(|e| ServerFnError::new(format!("Search failed: {}", e)))
}

/// `getAllCategories`: the category catalog for the sidebar
#[server(GetAllCategories, "/api")]
pub async fn get_all_categories(page: u32, size: u32) -> Result<Vec<Category>, ServerFnError> {
    let backend = backend()?;
    backend
        .get_all_categories(page, size)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to load categories: {}", e)))
}

/// `getSearchStats`: price bounds and per-level counts
#[server(GetSearchStats, "/api")]
pub async fn get_search_stats() -> Result<SearchStats, ServerFnError> {
    let backend = backend()?;
    backend
        .get_search_stats()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to load search stats: {}", e)))
}
