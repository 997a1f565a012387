// catalog/api/rest.rs - REST client for the course backend
//
// Thin typed wrappers around the backend's JSON endpoints. No retry and no
// caching here; the search controller decides when to call again.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::catalog::backend::CatalogBackend;
use crate::catalog::error::BackendError;
use crate::catalog::model::{
    Category, CourseSummary, PagedResponse, SearchParams, SearchResultPage, SearchStats,
};

pub const SEARCH_PATH: &str = "/courses/search";
pub const STATS_PATH: &str = "/courses/search/stats";
pub const CATEGORIES_PATH: &str = "/categories";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Clone, Debug)]
pub struct RestBackend {
    http: reqwest::Client,
    base_url: String,
}

impl RestBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET request for `advancedSearch`; unset params are omitted
    pub fn search_request(&self, params: &SearchParams) -> Result<reqwest::Request, BackendError> {
        Ok(self.http.get(self.url(SEARCH_PATH)).query(params).build()?)
    }

    pub fn categories_request(

        &self,

        page: u32,

        size: u32,

    ) -> Result<reqwest::Request, BackendError> {
        Ok(self
            .http
            .get(self.url(CATEGORIES_PATH))
            .query(&[("page", page), ("size", size)])
            .build()?)
    }

    pub fn stats_request(&self) -> Result<reqwest::Request, BackendError> {
        Ok(self.http.get(self.url(STATS_PATH)).build()?)
    }

    async fn execute<T: DeserializeOwned>(

        &self,

        request: reqwest::Request,

    ) -> Result<T, BackendError> {
        tracing::debug!("Backend request: {} {}", request.method(), request.url());
        let response = self.http.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Backend answered {}: {}", status, body);
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }

    pub async fn advanced_search(

        &self,

        params: &SearchParams,

    ) -> Result<SearchResultPage, BackendError> {
        let request = self.search_request(params)?;
        let body: PagedResponse<CourseSummary> = self.execute(request).await?;
        Ok(body.into())
    }

    pub async fn get_all_categories(

        &self,

        page: u32,

        size: u32,

    ) -> Result<Vec<Category>, BackendError> {
        let request = self.categories_request(page, size)?;
        let body: PagedResponse<Category> = self.execute(request).await?;
        Ok(body.content)
    }

    pub async fn get_search_stats(&self) -> Result<SearchStats, BackendError> {
        let request = self.stats_request()?;
        self.execute(request).await
    }
}

impl CatalogBackend for RestBackend {
    async fn advanced_search(
        &self,
        params: SearchParams,
    ) -> Result<SearchResultPage, BackendError> {
        RestBackend::advanced_search(self, &params).await
    }

    async fn get_all_categories(

        &self,

        page: u32,

        size: u32,

    ) -> Result<Vec<Category>, BackendError> {
        RestBackend::get_all_categories(self, page, size).await
    }

    async fn get_search_stats(&self) -> Result<SearchStats, BackendError> {
        RestBackend::get_search_stats(self).await
    }
}
