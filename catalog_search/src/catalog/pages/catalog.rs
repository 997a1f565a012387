// catalog/pages/catalog.rs - Course catalog search page
//
// The page owns one SearchController in a signal and is the only place that
// talks to the reactive runtime:
// - keystrokes go through the controller's debouncer, one timer per ticket
// - a memo over the controller's trigger key re-runs `dispatch`; each
//   FetchTicket becomes one server function call
// - categories and stats are loaded once at mount
// - the deep link is read once from the query string

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use crate::catalog::backend::{CatalogBackend, ServerFnBackend};
use crate::catalog::components::*;
use crate::catalog::config::SearchConfig;
use crate::catalog::controller::{
    fetch_reference_data, DeepLinkSeed, Dispatch, FacetEvent, PageTarget, SearchController,
};
use crate::catalog::model::CourseSummary;

/// Main catalog page component
///
/// Without `on_course_click` a clicked course opens in a detail modal.
#[component]
pub fn CatalogPage(
    #[prop(optional)]
    config: Option<SearchConfig>,
    /// Invoked with the course id when a card is clicked
    #[prop(optional)]
    on_course_click: Option<Callback<i64>>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let debounce_window = config.debounce_window;
    let category_page_size = config.category_page_size;
    let controller = RwSignal::new(SearchController::new(config));

    // Deep link: read once, never written back
    let query = use_query_map();
    let seed = query.with_untracked(|params| DeepLinkSeed::from_lookup(|key| params.get(key)));
    controller.update_untracked(|c| {
        c.apply_deep_link(seed);
    });

    // Reference data: one shot, failures are absorbed by the controller
    Effect::new(move |_| {
        spawn_local(async move {
            let load = fetch_reference_data(&ServerFnBackend, category_page_size).await;
            controller.try_update(|c| c.apply_reference_load(load));
        });
    });

    // Search orchestration: only changes of the trigger key re-dispatch
    let trigger = Memo::new(move |_| controller.with(SearchController::trigger_key));
    Effect::new(move |_| {
        trigger.track();
        let Some(Dispatch::Fetch(ticket)) = controller.try_update(|c| c.dispatch()) else {
            return;
        };
        spawn_local(async move {
            let result = ServerFnBackend.advanced_search(ticket.params).await;
            controller.try_update(|c| c.apply_response(ticket.generation, result));
        });
    });

    // Debounced search input
    let on_search_input = Callback::new(move |value: String| {
        let Some(ticket) = controller.try_update(|c| c.type_search_term(value)) else {
            return;
        };
        set_timeout(
            move || {
                controller.try_update(|c| c.settle_search_term(ticket));
            },
            debounce_window,
        );
    });
    on_cleanup(move || {
        controller.try_update_untracked(|c| c.cancel_pending_input());
    });

    let on_event = Callback::new(move |event: FacetEvent| {
        controller.update(|c| {
            c.apply_event(event);
        });
    });
    let on_page = Callback::new(move |target: PageTarget| {
        controller.update(|c| {
            c.go_to(target);
        });
    });
    let on_retry = Callback::new(move |()| controller.update(SearchController::retry));

    // Course detail: external handler if given, modal otherwise
    let selected_course = RwSignal::new(None::<CourseSummary>);
    let on_card_click = Callback::new(move |id: i64| match on_course_click {
        Some(handler) => handler.run(id),
        None => {
            let course = controller.with_untracked(|c| {
                c.results()
                    .items
                    .iter()
                    .find(|course| course.id == id)
                    .cloned()
            });
            selected_course.set(course);
        }
    });
    let on_close_modal = Callback::new(move |()| selected_course.set(None));

    // Derived views of the controller
    let search_value = Memo::new(move |_| controller.with(|c| c.facets().search_term.clone()));
    let facets = Memo::new(move |_| controller.with(|c| c.facets().clone()));
    let categories = Memo::new(move |_| controller.with(|c| c.categories().to_vec()));
    let stats = Memo::new(move |_| controller.with(|c| c.stats().cloned()));
    let validation_error = Memo::new(move |_| {
        controller.with(|c| c.validation_error().map(|e| e.to_string()))
    });
    let chips = Memo::new(move |_| controller.with(SearchController::active_chips));
    let courses = Memo::new(move |_| controller.with(|c| c.results().items.clone()));
    let pagination = Memo::new(move |_| controller.with(|c| c.pagination().clone()));
    let sort = Memo::new(move |_| controller.with(|c| c.facets().sort_by));
    let initial_loading = Memo::new(move |_| controller.with(SearchController::is_initial_loading));
    let section_loading = Memo::new(move |_| controller.with(SearchController::is_section_loading));
    let error_message = Memo::new(move |_| {
        controller.with(|c| c.error().map(|e| e.message.clone()))
    });

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center gap-2">
                    <span class="text-2xl">"🎓"</span>
                    <h1 class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-blue-600 to-indigo-600">
                        "Course Catalog"
                    </h1>
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <section class="bg-white rounded-2xl shadow-sm p-6 mb-8 border border-gray-100">
                    <SearchBar value=search_value on_input=on_search_input />
                </section>

                <div class="flex flex-col lg:flex-row gap-8 items-start">
                    <div class="w-full lg:w-72 flex-shrink-0">
                        <FilterPanel
                            facets=facets
                            categories=categories
                            stats=stats
                            validation_error=validation_error
                            locked=initial_loading
                            on_event=on_event
                        />
                    </div>

                    <section class="flex-1 w-full min-w-0">
                        <Show
                            when=move || !initial_loading.get()
                            fallback=|| view! {
                                <div class="bg-white rounded-2xl p-12 shadow-sm border border-gray-100">
                                    <Loading message="Loading courses..." />
                                </div>
                            }
                        >
                            <div class="flex flex-wrap justify-between items-center gap-4 mb-6">
                                <ResultSummary pagination=pagination />
                                <SortDropdown sort=sort on_event=on_event />
                            </div>

                            <ActiveFilterChips chips=chips on_event=on_event />

                            {move || error_message.get().map(|message| view! {
                                <RetryPanel message=message on_retry=on_retry />
                            })}

                            <ResultsGrid courses=courses section_loading=section_loading on_course_click=on_card_click />
                            <Pagination pagination=pagination section_loading=section_loading on_page=on_page />
                        </Show>
                    </section>
                </div>
            </main>

            {move || selected_course.get().map(|course| view! {
                <ModalWrapper title="Course Details" on_close=on_close_modal>
                    <CourseDetail course=course />
                </ModalWrapper>
            })}
        </div>
    }
}
