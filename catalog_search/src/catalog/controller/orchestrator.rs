// catalog/controller/orchestrator.rs - Search state machine of the catalog page
//
// SearchController owns the facets, the debounced search input, pagination,
// reference data and the last results. It performs no I/O itself:
// `dispatch` hands out a FetchTicket, the host runs the request, and
// `apply_response` feeds the outcome back. This keeps the ordering of
// concurrent responses explicit and testable.
//
// Loading tiers:
// - initial: the first search of the session, the whole results region waits
// - section: every later search, only the results grid waits

use crate::catalog::backend::CatalogBackend;
use crate::catalog::config::{ResponseOrdering, SearchConfig};
use crate::catalog::error::{BackendError, SearchFailure, ValidationError};
use crate::catalog::model::{
    Category, Level, PriceFilter, PriceRange, SearchParams, SearchResultPage, SearchStats,
    SortOption,
};

use super::debounce::{DebounceTicket, Debouncer};
use super::deep_link::DeepLinkSeed;
use super::facets::{FacetState, FilterChip};
use super::pagination::{PageItem, PageTarget, PaginationState};
use super::query::build_search_params;
use super::reference::{ReferenceData, ReferenceLoad};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingState {
    /// Full-region spinner, only before the first search settles
    pub initial: bool,
    /// Grid-only spinner for every later search
    pub section: bool,
}

/// A request the host must run and report back with `apply_response`
#[derive(Clone, Debug, PartialEq)]
pub struct FetchTicket {
    pub generation: u64,
    pub params: SearchParams,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Dispatch {
    /// A new request was issued
    Fetch(FetchTicket),
    /// The settled state matches the last request; nothing to do
    Unchanged,
    /// A category is selected but the catalog needed to resolve it is still loading
    AwaitingCatalog,
    /// The facets cannot form a request; nothing was sent
    Invalid(ValidationError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseOutcome {
    Applied,
    Failed,
    /// Superseded by a newer request under `ResponseOrdering::LatestIssued`
    Discarded,
}

/// A change reported by the filter sidebar, sort control or chip row
#[derive(Clone, Debug, PartialEq)]
pub enum FacetEvent {
    ToggleCategory(String),
    ToggleLevel(Level),
    PriceFilter(PriceFilter),
    MinPrice(f64),
    MaxPrice(f64),
    FreeOnly(bool),
    DiscountedOnly(bool),
    Sort(SortOption),
    RemoveChip(FilterChip),
    ClearAll,
}

/// Everything whose change should trigger a dispatch
#[derive(Clone, Debug, PartialEq)]
pub struct TriggerKey {
    facets: FacetState,
    page: u32,
    catalog_pending: bool,
    retry: u64,
}

#[derive(Debug)]
pub struct SearchController {
    config: SearchConfig,
    facets: FacetState,
    search_input: Debouncer<String>,
    pagination: PaginationState,
    reference: ReferenceData,
    price_range_touched: bool,
    deep_link_applied: bool,
    results: SearchResultPage,
    loading: LoadingState,
    settled_once: bool,
    in_flight: usize,
    generation: u64,
    last_request: Option<SearchParams>,
    retry_requested: bool,
    retry_count: u64,
    error: Option<SearchFailure>,
    validation_error: Option<ValidationError>,
}

impl SearchController {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            facets: FacetState::new(config.default_price_range),
            search_input: Debouncer::new(config.debounce_window),
            pagination: PaginationState::new(config.page_size),
            reference: ReferenceData::default(),
            price_range_touched: false,
            deep_link_applied: false,
            results: SearchResultPage::default(),
            loading: LoadingState {
                initial: true,
                section: false,
            },
            settled_once: false,
            in_flight: 0,
            generation: 0,
            last_request: None,
            retry_requested: false,
            retry_count: 0,
            error: None,
            validation_error: None,
            config,
        }
    }

    // ===== Read access =====

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn facets(&self) -> &FacetState {
        &self.facets
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn categories(&self) -> &[Category] {
        self.reference.categories()
    }

    pub fn stats(&self) -> Option<&SearchStats> {
        self.reference.stats()
    }

    pub fn results(&self) -> &SearchResultPage {
        &self.results
    }

    pub fn loading(&self) -> LoadingState {
        self.loading
    }

    pub fn is_initial_loading(&self) -> bool {
        self.loading.initial
    }

    pub fn is_section_loading(&self) -> bool {
        self.loading.section
    }

    pub fn error(&self) -> Option<&SearchFailure> {
        self.error.as_ref()
    }

    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.validation_error.as_ref()
    }

    pub fn last_request(&self) -> Option<&SearchParams> {
        self.last_request.as_ref()
    }

    pub fn active_chips(&self) -> Vec<FilterChip> {
        self.facets.active_chips()
    }

    pub fn page_window(&self) -> Vec<PageItem> {
        self.pagination.window()
    }

    pub fn is_page_control_disabled(&self, target: PageTarget) -> bool {
        self.pagination.is_disabled(target, self.loading.section)
    }

    /// Bounds the price inputs fall back to on reset
    pub fn default_price_range(&self) -> PriceRange {
        self.reference
            .price_bounds()
            .unwrap_or(self.config.default_price_range)
    }

    /// Change-detection key for reactive hosts
    ///
    /// Hosts re-run `dispatch` whenever this key changes. The raw search
    /// input is excluded, so keystrokes alone never trigger a request.
    pub fn trigger_key(&self) -> TriggerKey {
        TriggerKey {
            facets: self.facets.query_snapshot(),
            page: self.pagination.current_page(),
            catalog_pending: self.reference.is_catalog_pending(),
            retry: self.retry_count,
        }
    }

    // ===== Facet mutations =====

    /// Apply a facet change; any change to the query inputs returns to page 0
    fn mutate_facets<F: FnOnce(&mut FacetState)>(&mut self, mutate: F) -> bool {
        let before = self.facets.query_snapshot();
        mutate(&mut self.facets);
        let changed = !before.same_query_inputs(&self.facets);
        if changed {
            self.pagination.reset();
        }
        changed
    }

    /// Keystroke in the search input
    ///
    /// The host should call `settle_search_term` with the returned ticket
    /// once `config().debounce_window` has elapsed.
    pub fn type_search_term(&mut self, value: impl Into<String>) -> DebounceTicket {
        let value = value.into();
        self.facets.search_term = value.clone();
        self.search_input.push(value)
    }

    /// Quiescence timer for `ticket` elapsed; true if the term was emitted
    pub fn settle_search_term(&mut self, ticket: DebounceTicket) -> bool {
        match self.search_input.fire(ticket) {
            Some(term) => {
                tracing::debug!("Search term settled: '{}'", term);
                self.mutate_facets(|f| f.debounced_search_term = term);
                true
            }
            None => false,
        }
    }

    /// Drop a pending search term without emitting it, e.g. on unmount
    pub fn cancel_pending_input(&mut self) {
        self.search_input.cancel();
    }

    pub fn toggle_category(&mut self, category: &str) -> bool {
        self.mutate_facets(|f| f.toggle_category(category))
    }

    pub fn toggle_level(&mut self, level: Level) -> bool {
        self.mutate_facets(|f| f.toggle_level(level))
    }

    pub fn set_price_filter(&mut self, filter: PriceFilter) -> bool {
        self.mutate_facets(|f| f.price_filter = filter)
    }

    pub fn set_price_range(&mut self, range: PriceRange) -> bool {
        self.price_range_touched = true;
        self.mutate_facets(|f| f.price_range = range)
    }

    pub fn set_min_price(&mut self, min: f64) -> bool {
        let max = self.facets.price_range.max;
        self.set_price_range(PriceRange::new(min, max))
    }

    pub fn set_max_price(&mut self, max: f64) -> bool {
        let min = self.facets.price_range.min;
        self.set_price_range(PriceRange::new(min, max))
    }

    pub fn set_free_only(&mut self, is_free: Option<bool>) -> bool {
        self.mutate_facets(|f| f.is_free = is_free)
    }

    pub fn set_discounted_only(&mut self, is_discounted: Option<bool>) -> bool {
        self.mutate_facets(|f| f.is_discounted = is_discounted)
    }

    pub fn set_sort(&mut self, sort: SortOption) -> bool {
        self.mutate_facets(|f| f.sort_by = sort)
    }

    pub fn remove_chip(&mut self, chip: &FilterChip) -> bool {
        if matches!(chip, FilterChip::SearchTerm(_)) {
            self.search_input.cancel();
        }
        self.mutate_facets(|f| f.remove_chip(chip))
    }

    /// Reset every facet and the search input, back to page 0
    pub fn clear_all(&mut self) {
        self.search_input.cancel();
        self.price_range_touched = false;
        let defaults = self.default_price_range();
        self.mutate_facets(|f| f.clear(defaults));
        self.pagination.reset();
        self.validation_error = None;
    }

    /// Route a UI event to the matching mutation
    ///
    /// Unchecking a flag box clears the flag instead of sending `false`.
    pub fn apply_event(&mut self, event: FacetEvent) -> bool {
        tracing::debug!("Facet event: {:?}", event);
        match event {
            FacetEvent::ToggleCategory(name) => self.toggle_category(&name),
            FacetEvent::ToggleLevel(level) => self.toggle_level(level),
            FacetEvent::PriceFilter(filter) => self.set_price_filter(filter),
            FacetEvent::MinPrice(min) => self.set_min_price(min),
            FacetEvent::MaxPrice(max) => self.set_max_price(max),
            FacetEvent::FreeOnly(checked) => self.set_free_only(checked.then_some(true)),
            FacetEvent::DiscountedOnly(checked) => {
                self.set_discounted_only(checked.then_some(true))
            }
            FacetEvent::Sort(sort) => self.set_sort(sort),
            FacetEvent::RemoveChip(chip) => self.remove_chip(&chip),
            FacetEvent::ClearAll => {
                let before = self.trigger_key();
                self.clear_all();
                before != self.trigger_key()
            }
        }
    }

    // ===== Pagination =====

    pub fn set_current_page(&mut self, page: i64) -> bool {
        self.pagination.set_current_page(page)
    }

    /// Follow a pagination control unless it is disabled
    pub fn go_to(&mut self, target: PageTarget) -> bool {
        if self.is_page_control_disabled(target) {
            return false;
        }
        match self.pagination.resolve(target) {
            Some(page) => self.pagination.set_current_page(i64::from(page)),
            None => false,
        }
    }

    // ===== Reference data and deep links =====

    /// Seed facets from page-entry parameters; only the first call has effect
    pub fn apply_deep_link(&mut self, seed: DeepLinkSeed) -> bool {
        if self.deep_link_applied {
            tracing::debug!("Deep link already applied, ignoring {:?}", seed);
            return false;
        }
        self.deep_link_applied = true;
        if seed.is_empty() {
            return false;
        }

        tracing::info!("Seeding search from deep link: {:?}", seed);
        if let Some(term) = seed.search_term.clone() {
            self.search_input.cancel();
            self.facets.search_term = term;
        }
        self.mutate_facets(|f| {
            if let Some(term) = seed.search_term {
                f.debounced_search_term = term;
            }
            if let Some(category) = seed.category {
                if !f.is_category_selected(&category) {
                    f.selected_categories.push(category);
                }
            }
        })
    }

    pub fn apply_categories(&mut self, result: Result<Vec<Category>, BackendError>) {
        self.reference.apply_categories(result);
    }

    /// Store stats and seed the price range unless the learner already edited it
    pub fn apply_stats(&mut self, result: Result<SearchStats, BackendError>) {
        self.reference.apply_stats(result);
        if self.price_range_touched {
            return;
        }
        // Seeding is not a learner change, so the current page stays
        if let Some(bounds) = self.reference.price_bounds() {
            self.facets.price_range = bounds;
        }
    }

    pub fn apply_reference_load(&mut self, load: ReferenceLoad) {
        self.apply_categories(load.categories);
        self.apply_stats(load.stats);
    }

    // ===== Fetch orchestration =====

    fn awaiting_catalog(&self) -> bool {
        !self.facets.selected_categories.is_empty() && self.reference.is_catalog_pending()
    }

    /// Turn the current settled state into at most one request
    pub fn dispatch(&mut self) -> Dispatch {
        if self.awaiting_catalog() {
            tracing::debug!("Category selected before catalog loaded, holding search");
            return Dispatch::AwaitingCatalog;
        }

        let params = match build_search_params(
            &self.facets,
            self.pagination.current_page(),
            self.pagination.page_size(),
            self.reference.categories(),
        ) {
            Ok(params) => params,
            Err(e) => {
                tracing::warn!("Search blocked: {}", e);
                self.validation_error = Some(e.clone());
                return Dispatch::Invalid(e);
            }
        };
        self.validation_error = None;

        if !self.retry_requested && self.last_request.as_ref() == Some(&params) {
            return Dispatch::Unchanged;
        }
        self.retry_requested = false;

        self.generation += 1;
        self.in_flight += 1;
        self.last_request = Some(params.clone());
        self.loading = if self.settled_once {
            LoadingState {
                initial: false,
                section: true,
            }
        } else {
            LoadingState {
                initial: true,
                section: false,
            }
        };

        tracing::debug!("Dispatching search #{}: {:?}", self.generation, params);
        Dispatch::Fetch(FetchTicket {
            generation: self.generation,
            params,
        })
    }

    /// Record the outcome of a request handed out by `dispatch`
    ///
    /// Under `LastArrival` every response is applied in arrival order. A
    /// failure leaves the previous results visible and sets a retryable error.
    /// A discarded response only ends the section tier once nothing else is
    /// in flight.
    pub fn apply_response(
        &mut self,
        generation: u64,
        result: Result<SearchResultPage, BackendError>,
    ) -> ResponseOutcome {
        self.in_flight = self.in_flight.saturating_sub(1);

        if self.config.response_ordering == ResponseOrdering::LatestIssued
            && generation != self.generation
        {
            tracing::debug!(
                "Discarding response #{}, newest request is #{}",
                generation,
                self.generation
            );
            self.finish_loading();
            return ResponseOutcome::Discarded;
        }

        let outcome = match result {
            Ok(page) => {
                tracing::info!(
                    "Search #{} returned {} of {} courses",
                    generation,
                    page.items.len(),
                    page.total_elements
                );
                self.pagination.apply_totals(page.total_pages, page.total_elements);
                self.results = page;
                self.error = None;
                ResponseOutcome::Applied
            }
            Err(e) => {
                tracing::error!("Search #{} failed: {}", generation, e);
                self.error = Some(SearchFailure::from(&e));
                ResponseOutcome::Failed
            }
        };

        // Any applied or failed response ends both tiers, even with older
        // requests still out
        self.settled_once = true;
        self.loading = LoadingState::default();
        outcome
    }

    fn finish_loading(&mut self) {
        if self.in_flight == 0 {
            self.loading.section = false;
        }
    }

    /// Re-issue the last request on the next dispatch, even if unchanged
    pub fn retry(&mut self) {
        tracing::info!("Retrying search");
        self.error = None;
        self.retry_requested = true;
        self.retry_count += 1;
    }

    /// Dispatch and run the resulting request to completion
    ///
    /// Returns `None` when nothing was sent.
    pub async fn refresh<B: CatalogBackend>(&mut self, backend: &B) -> Option<ResponseOutcome> {
        match self.dispatch() {
            Dispatch::Fetch(ticket) => {
                let result = backend.advanced_search(ticket.params).await;
                Some(self.apply_response(ticket.generation, result))
            }
            _ => None,
        }
    }

    /// One-shot load of categories and stats
    pub async fn load_reference_data<B: CatalogBackend>(&mut self, backend: &B) {
        let load =
            super::reference::fetch_reference_data(backend, self.config.category_page_size).await;
        self.apply_reference_load(load);
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
