// catalog/controller/mod.rs - Headless search controller
//
// Everything here is plain Rust with no reactive runtime, so the whole
// search flow can be exercised from ordinary unit tests. The Leptos page
// wraps a SearchController in a signal and forwards events to it.
//
// Structure:
// - debounce.rs: generation-counted debouncer for the search input
// - facets.rs: FacetState and filter chips
// - query.rs: FacetState + page -> SearchParams, with validation
// - pagination.rs: current page, totals, page-button window
// - reference.rs: one-shot categories and search stats
// - deep_link.rs: initial state from page-entry parameters
// - orchestrator.rs: SearchController tying it all together

pub mod debounce;
pub mod deep_link;
pub mod facets;
pub mod orchestrator;
pub mod pagination;
pub mod query;
pub mod reference;

pub use debounce::{DebounceTicket, Debouncer};
pub use deep_link::DeepLinkSeed;
pub use facets::{FacetState, FilterChip};
pub use orchestrator::{
    Dispatch, FacetEvent, FetchTicket, LoadingState, ResponseOutcome, SearchController, TriggerKey,
};
pub use pagination::{page_window, PageItem, PageTarget, PaginationState};
pub use query::{build_search_params, EffectiveConstraint};
pub use reference::{fetch_reference_data, CatalogStatus, ReferenceData, ReferenceLoad};
