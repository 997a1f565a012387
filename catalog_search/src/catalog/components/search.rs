// catalog/components/search.rs - Search-related UI components
//
// - SearchBar: free-text input, reports every keystroke
// - SortDropdown: sort option selector
// - FilterPanel: categories, levels, price band and range, flags
// - ActiveFilterChips: removable chips for every active facet
// - Pagination: windowed page bar with previous/next
// - ResultSummary: "Showing X-Y of N courses"
//
// Components never mutate search state themselves. They report FacetEvents
// and page targets through callbacks; the page routes them to the controller.

use leptos::prelude::*;

use crate::catalog::controller::{
    FacetEvent, FacetState, FilterChip, PageItem, PageTarget, PaginationState,
};
use crate::catalog::model::{Category, Level, PriceFilter, SearchStats, SortOption};

/// Search bar component
///
/// The input is not debounced here; the page owns the quiescence timer.
#[component]
pub fn SearchBar(
    /// Raw value of the input
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="relative w-full">
            <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                <span class="text-gray-400">"🔍"</span>
            </div>
            <input
                type="search"
                placeholder="Search courses, topics or instructors..."
                class="w-full pl-10 pr-4 py-3 border-2 border-gray-200 rounded-xl \
                       focus:ring-4 focus:ring-blue-100 focus:border-blue-500 \
                       outline-none text-lg transition-all shadow-sm"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Sort dropdown component
#[component]
pub fn SortDropdown(
    #[prop(into)]
    sort: Signal<SortOption>,
    on_event: Callback<FacetEvent>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 bg-white px-4 py-2 rounded-lg border border-gray-200 shadow-sm">
            <label class="text-sm font-medium text-gray-600">"Sort by:"</label>
            <select
                class="text-sm font-semibold text-gray-800 bg-transparent border-none focus:ring-0 cursor-pointer pr-8"
                on:change=move |ev| {
                    match event_target_value(&ev).parse::<SortOption>() {
                        Ok(option) => on_event.run(FacetEvent::Sort(option)),
                        Err(e) => tracing::warn!("Ignoring sort selection: {}", e),
                    }
                }
            >
                {SortOption::ALL.into_iter().map(|option| {
                    view! {
                        <option
                            value=option.as_key()
                            selected=move || sort.get() == option
                        >
                            {option.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[component]
fn FacetHeading(title: &'static str) -> impl IntoView {
    view! {
        <h3 class="font-bold text-gray-900 flex items-center gap-2 text-sm uppercase tracking-wide">
            <span class="text-blue-500">"▼"</span>
            {title}
        </h3>
    }
}

/// Category checkboxes with per-category course counts
#[component]
pub fn CategoryFacets(
    #[prop(into)]
    categories: Signal<Vec<Category>>,
    #[prop(into)]
    selected: Signal<Vec<String>>,
    #[prop(into)]
    locked: Signal<bool>,
    on_event: Callback<FacetEvent>,
) -> impl IntoView {
    view! {
        <div class="space-y-3">
            <FacetHeading title="Categories" />
            <Show
                when=move || !categories.with(Vec::is_empty)
                fallback=|| view! { <p class="text-sm text-gray-400 px-2">"No categories available"</p> }
            >
                <div class="space-y-1 max-h-60 overflow-y-auto pr-2">
                    <For
                        each=move || categories.get()
                        key=|c| c.id
                        children=move |category| {
                            let name = category.name.clone();
                            let name_for_check = name.clone();
                            let is_checked = move || selected.with(|s| s.contains(&name_for_check));

                            view! {
                                <label class="flex items-center gap-3 cursor-pointer hover:bg-white p-2 rounded-lg transition-colors group">
                                    <input
                                        type="checkbox"
                                        prop:checked=is_checked
                                        disabled=move || locked.get()
                                        on:change=move |_| on_event.run(FacetEvent::ToggleCategory(name.clone()))
                                        class="h-4 w-4 rounded border-gray-300 text-blue-600 focus:ring-blue-500"
                                    />
                                    <span class="flex-1 text-sm text-gray-700 group-hover:text-gray-900 font-medium">
                                        {category.name.clone()}
                                    </span>
                                    <span class="text-xs bg-gray-200 text-gray-600 px-2 py-0.5 rounded-full">
                                        {category.course_count}
                                    </span>
                                </label>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

/// Level checkboxes; counts come from the search stats when loaded
#[component]
pub fn LevelFacets(
    #[prop(into)]
    stats: Signal<Option<SearchStats>>,
    #[prop(into)]
    facets: Signal<FacetState>,
    #[prop(into)]
    locked: Signal<bool>,
    on_event: Callback<FacetEvent>,
) -> impl IntoView {
    view! {
        <div class="space-y-3">
            <FacetHeading title="Level" />
            <div class="space-y-1">
                {Level::ALL.into_iter().map(|level| {
                    let count = move || stats.with(|s| s.as_ref().and_then(|s| s.level_count(level)));
                    view! {
                        <label class="flex items-center gap-3 cursor-pointer hover:bg-white p-2 rounded-lg transition-colors group">
                            <input
                                type="checkbox"
                                prop:checked=move || facets.with(|f| f.is_level_selected(level))
                                disabled=move || locked.get()
                                on:change=move |_| on_event.run(FacetEvent::ToggleLevel(level))
                                class="h-4 w-4 rounded border-gray-300 text-blue-600 focus:ring-blue-500"
                            />
                            <span class="flex-1 text-sm text-gray-700 group-hover:text-gray-900 font-medium">
                                {level.to_string()}
                            </span>
                            {move || count().map(|n| view! {
                                <span class="text-xs bg-gray-200 text-gray-600 px-2 py-0.5 rounded-full">{n}</span>
                            })}
                        </label>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Price band buttons plus the manual min/max range
///
/// The range inputs are inert while the free band is selected.
#[component]
pub fn PriceFilterPanel(
    #[prop(into)]
    facets: Signal<FacetState>,
    /// Inline message when the range cannot be sent
    #[prop(into)]
    validation_error: Signal<Option<String>>,
    #[prop(into)]
    locked: Signal<bool>,
    on_event: Callback<FacetEvent>,
) -> impl IntoView {
    let price_filter = move || facets.with(|f| f.price_filter);
    let range_inert = move || locked.get() || price_filter() == PriceFilter::Free;

    let parse_price = |raw: String| {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
    };

    view! {
        <div class="space-y-3">
            <FacetHeading title="Price" />
            <div class="flex gap-2">
                {PriceFilter::ALL.into_iter().map(|band| {
                    view! {
                        <button
                            type="button"
                            disabled=move || locked.get()
                            class=move || {
                                if price_filter() == band {
                                    "px-3 py-1.5 rounded-lg text-sm font-medium bg-blue-600 text-white shadow-sm transition-all"
                                } else {
                                    "px-3 py-1.5 rounded-lg text-sm font-medium bg-white border border-gray-200 \
                                     text-gray-700 hover:bg-gray-50 hover:border-gray-300 transition-all"
                                }
                            }
                            on:click=move |_| on_event.run(FacetEvent::PriceFilter(band))
                        >
                            {band.to_string()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class=move || {
                if validation_error.with(Option::is_some) {
                    "flex items-center gap-2 bg-white p-1 rounded-lg border border-red-300"
                } else {
                    "flex items-center gap-2 bg-white p-1 rounded-lg border border-gray-200"
                }
            }>
                <div class="relative flex-1">
                    <span class="absolute left-2 top-1/2 -translate-y-1/2 text-gray-400 text-xs">"$"</span>
                    <input
                        type="number"
                        min="0"
                        placeholder="Min"
                        class="w-full pl-5 pr-2 py-1.5 border-none rounded text-sm focus:ring-0 disabled:bg-gray-50"
                        disabled=range_inert
                        prop:value=move || facets.with(|f| f.price_range.min.to_string())
                        on:change=move |ev| {
                            if let Some(min) = parse_price(event_target_value(&ev)) {
                                on_event.run(FacetEvent::MinPrice(min));
                            }
                        }
                    />
                </div>
                <span class="text-gray-300">"–"</span>
                <div class="relative flex-1">
                    <span class="absolute left-2 top-1/2 -translate-y-1/2 text-gray-400 text-xs">"$"</span>
                    <input
                        type="number"
                        min="0"
                        placeholder="Max"
                        class="w-full pl-5 pr-2 py-1.5 border-none rounded text-sm focus:ring-0 disabled:bg-gray-50"
                        disabled=range_inert
                        prop:value=move || facets.with(|f| f.price_range.max.to_string())
                        on:change=move |ev| {
                            if let Some(max) = parse_price(event_target_value(&ev)) {
                                on_event.run(FacetEvent::MaxPrice(max));
                            }
                        }
                    />
                </div>
            </div>
            {move || validation_error.get().map(|message| view! {
                <p class="text-xs font-medium text-red-600" role="alert">{message}</p>
            })}
        </div>
    }
}

/// "Free only" and "On sale" checkboxes
#[component]
pub fn FlagToggles(
    #[prop(into)]
    facets: Signal<FacetState>,
    #[prop(into)]
    locked: Signal<bool>,
    on_event: Callback<FacetEvent>,
) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <label class="flex items-center gap-3 cursor-pointer group p-2 hover:bg-white rounded-lg transition-colors">
                <input
                    type="checkbox"
                    prop:checked=move || facets.with(|f| f.is_free == Some(true))
                    disabled=move || locked.get()
                    on:change=move |ev| on_event.run(FacetEvent::FreeOnly(event_target_checked(&ev)))
                    class="h-5 w-5 rounded border-gray-300 text-blue-600 focus:ring-blue-500"
                />
                <span class="text-sm font-medium text-gray-700 group-hover:text-gray-900">"Free only"</span>
            </label>
            <label class="flex items-center gap-3 cursor-pointer group p-2 hover:bg-white rounded-lg transition-colors">
                <input
                    type="checkbox"
                    prop:checked=move || facets.with(|f| f.is_discounted == Some(true))
                    disabled=move || locked.get()
                    on:change=move |ev| on_event.run(FacetEvent::DiscountedOnly(event_target_checked(&ev)))
                    class="h-5 w-5 rounded border-gray-300 text-blue-600 focus:ring-blue-500"
                />
                <span class="text-sm font-medium text-gray-700 group-hover:text-gray-900">"On sale"</span>
            </label>
        </div>
    }
}

/// Complete filter sidebar
///
/// Reference data shows as soon as it arrives; inputs stay locked until the
/// first search settles.
#[component]
pub fn FilterPanel(
    #[prop(into)]
    facets: Signal<FacetState>,
    #[prop(into)]
    categories: Signal<Vec<Category>>,
    #[prop(into)]
    stats: Signal<Option<SearchStats>>,
    #[prop(into)]
    validation_error: Signal<Option<String>>,
    #[prop(into)]
    locked: Signal<bool>,
    on_event: Callback<FacetEvent>,
) -> impl IntoView {
    let selected_categories =
        Signal::derive(move || facets.with(|f| f.selected_categories.clone()));

    view! {
        <aside class="w-72 bg-gray-50/50 p-6 rounded-2xl border border-gray-100 space-y-8 h-fit sticky top-6">
            <div class="flex justify-between items-center pb-4 border-b border-gray-200">
                <h2 class="font-bold text-lg text-gray-900">"Filters"</h2>
                <button
                    type="button"
                    class="text-xs font-semibold text-blue-600 hover:text-blue-800 hover:underline uppercase tracking-wide"
                    disabled=move || locked.get()
                    on:click=move |_| on_event.run(FacetEvent::ClearAll)
                >
                    "Clear All"
                </button>
            </div>

            <CategoryFacets categories=categories selected=selected_categories locked=locked on_event=on_event />
            <LevelFacets stats=stats facets=facets locked=locked on_event=on_event />
            <PriceFilterPanel facets=facets validation_error=validation_error locked=locked on_event=on_event />

            <div class="pt-4 border-t border-gray-200">
                <FlagToggles facets=facets locked=locked on_event=on_event />
            </div>
        </aside>
    }
}

/// Removable chips for the active facets
#[component]
pub fn ActiveFilterChips(
    #[prop(into)]
    chips: Signal<Vec<FilterChip>>,
    on_event: Callback<FacetEvent>,
) -> impl IntoView {
    view! {
        <Show when=move || !chips.with(Vec::is_empty)>
            <div class="flex flex-wrap items-center gap-2 mb-6">
                {move || chips.get().into_iter().map(|chip| {
                    let label = chip.to_string();
                    view! {
                        <button
                            type="button"
                            class="flex items-center gap-1 px-3 py-1 text-sm rounded-full bg-blue-50 text-blue-700 \
                                   border border-blue-200 hover:bg-blue-100 transition-colors"
                            title="Remove filter"
                            on:click=move |_| on_event.run(FacetEvent::RemoveChip(chip.clone()))
                        >
                            {label}
                            <span class="text-blue-400">"✕"</span>
                        </button>
                    }
                }).collect_view()}
                <button
                    type="button"
                    class="text-xs font-semibold text-gray-500 hover:text-gray-800 hover:underline"
                    on:click=move |_| on_event.run(FacetEvent::ClearAll)
                >
                    "Clear all"
                </button>
            </div>
        </Show>
    }
}

/// Pagination component
///
/// Page buttons come from the pagination window; labels are 1-based.
#[component]
pub fn Pagination(
    #[prop(into)]
    pagination: Signal<PaginationState>,
    #[prop(into)]
    section_loading: Signal<bool>,
    on_page: Callback<PageTarget>,
) -> impl IntoView {
    let disabled = move |target: PageTarget| {
        pagination.with(|p| p.is_disabled(target, section_loading.get()))
    };
    let nav_class = "px-4 py-2 bg-white border border-gray-200 rounded-lg shadow-sm \
                     disabled:opacity-50 disabled:cursor-not-allowed \
                     hover:bg-gray-50 hover:border-gray-300 transition-all font-medium text-gray-700";

    view! {
        <Show when=move || pagination.with(|p| p.total_pages() > 1)>
            <nav class="flex items-center justify-center gap-2 mt-12 mb-8" aria-label="Pagination">
                <button
                    type="button"
                    class=nav_class
                    disabled=move || disabled(PageTarget::Previous)
                    on:click=move |_| on_page.run(PageTarget::Previous)
                >
                    "← Previous"
                </button>

                {move || pagination.with(PaginationState::window).into_iter().map(|item| match item {
                    PageItem::Page(page) => {
                        let is_current = move || pagination.with(|p| p.current_page() == page);
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if is_current() {
                                        "w-10 h-10 rounded-lg text-sm font-bold bg-blue-600 text-white shadow-sm"
                                    } else {
                                        "w-10 h-10 rounded-lg text-sm font-medium bg-white border border-gray-200 \
                                         text-gray-700 hover:bg-gray-50 disabled:opacity-50"
                                    }
                                }
                                aria-current=move || is_current().then_some("page")
                                disabled=move || disabled(PageTarget::Page(page))
                                on:click=move |_| on_page.run(PageTarget::Page(page))
                            >
                                {page + 1}
                            </button>
                        }
                        .into_any()
                    }
                    PageItem::Ellipsis => view! {
                        <span class="px-2 text-gray-400">"…"</span>
                    }
                    .into_any(),
                }).collect_view()}

                <button
                    type="button"
                    class=nav_class
                    disabled=move || disabled(PageTarget::Next)
                    on:click=move |_| on_page.run(PageTarget::Next)
                >
                    "Next →"
                </button>
            </nav>
        </Show>
    }
}

pub fn summary_text(pagination: &PaginationState) -> String {
    match pagination.visible_range() {
        Some((first, last)) => format!(
            "Showing {}-{} of {} courses",
            first,
            last,
            pagination.total_elements()
        ),
        None => "No courses found".to_string(),
    }
}

#[component]
pub fn ResultSummary(#[prop(into)] pagination: Signal<PaginationState>) -> impl IntoView {
    view! {
        <p class="text-sm text-gray-600 font-medium">
            {move || pagination.with(summary_text)}
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_text() {
        let mut p = PaginationState::new(6);
        assert_eq!(summary_text(&p), "No courses found");

        p.apply_totals(2, 7);
        assert_eq!(summary_text(&p), "Showing 1-6 of 7 courses");
        p.set_current_page(1);
        assert_eq!(summary_text(&p), "Showing 7-7 of 7 courses");
    }

    #[test]
    fn test_sort_keys_round_trip_through_select() {
        for option in SortOption::ALL {
            assert_eq!(option.as_key().parse::<SortOption>(), Ok(option));
        }
    }
}
