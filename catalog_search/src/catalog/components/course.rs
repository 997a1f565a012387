// catalog/components/course.rs - Course display components
//
// - CourseCard: grid card for one search result
// - ResultsGrid: card grid with empty state and section-loading overlay
// - CourseDetail: full course view shown in a modal
//
// Opening a course is reported through a callback prop; the page decides
// what "open" means.

use leptos::prelude::*;

use super::common::{Badge, PriceTag, SectionLoading, StarRating};
use crate::catalog::model::CourseSummary;

const PREVIEW_CHARS: usize = 120;

/// First `max` characters of `text`, with an ellipsis when cut
pub fn preview(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
        None => text.to_string(),
    }
}

/// Course card for the results grid
#[component]
pub fn CourseCard(
    course: CourseSummary,
    on_click: Callback<i64>,
) -> impl IntoView {
    let course_id = course.id;
    let description = course
        .description
        .as_deref()
        .map(|d| preview(d, PREVIEW_CHARS))
        .unwrap_or_default();
    let discounted = course.is_discounted();

    view! {
        <div
            class="group bg-white rounded-xl shadow-sm hover:shadow-xl transition-all duration-300 \
                   cursor-pointer border border-gray-100 flex flex-col h-full overflow-hidden"
            on:click=move |_| on_click.run(course_id)
        >
            {match course.thumbnail_url.clone() {
                Some(url) => view! {
                    <img src=url alt=course.title.clone() class="h-40 w-full object-cover" />
                }
                .into_any(),
                None => view! {
                    <div class="h-40 bg-gray-100 flex items-center justify-center text-gray-300">
                        <span class="text-4xl">"🎓"</span>
                    </div>
                }
                .into_any(),
            }}

            <div class="p-5 flex flex-col flex-1">
                <div class="flex justify-between items-start mb-3">
                    {course.rating.map(|rating| view! { <StarRating rating=rating show_value=false /> })}
                    <PriceTag price=course.price discount_price=course.discount_price />
                </div>

                <h3 class="font-bold text-gray-900 mb-2 line-clamp-2 text-lg group-hover:text-blue-600 transition-colors">
                    {course.title.clone()}
                </h3>

                <p class="text-gray-600 text-sm mb-4 line-clamp-3 flex-1">{description}</p>

                <div class="flex justify-between items-center text-xs text-gray-500 pt-3 border-t border-gray-100">
                    <span class="font-medium">{course.instructor_name.clone().unwrap_or_default()}</span>
                    <span class="text-gray-400">{course.category_name.clone().unwrap_or_default()}</span>
                </div>

                <div class="flex items-center gap-2 flex-wrap mt-3">
                    {course.level.map(|level| view! { <Badge variant="blue">{level.to_string()}</Badge> })}
                    {discounted.then(|| view! { <Badge variant="green">"On sale"</Badge> })}
                    <span class="text-xs text-gray-400">{course.enrollment_count} " learners"</span>
                </div>
            </div>
        </div>
    }
}

/// Results grid component
///
/// During a section reload the current cards stay and are dimmed.
#[component]
pub fn ResultsGrid(
    #[prop(into)]
    courses: Signal<Vec<CourseSummary>>,
    #[prop(into)]
    section_loading: Signal<bool>,
    on_course_click: Callback<i64>,
) -> impl IntoView {
    view! {
        <div class="relative w-full" aria-busy=move || section_loading.get().to_string()>
            <SectionLoading active=section_loading />
            <Show
                when=move || !courses.with(Vec::is_empty)
                fallback=|| view! {
                    <div class="text-center py-16 bg-white rounded-2xl border border-dashed border-gray-300">
                        <div class="text-gray-300 text-6xl mb-4">"🔍"</div>
                        <h3 class="text-xl font-bold text-gray-900 mb-2">"No courses found"</h3>
                        <p class="text-gray-500 max-w-md mx-auto">
                            "Try a different search term or remove some filters."
                        </p>
                    </div>
                }
            >
                <div class=move || {
                    if section_loading.get() {
                        "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 opacity-50 pointer-events-none transition-opacity"
                    } else {
                        "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 transition-opacity"
                    }
                }>
                    <For
                        each=move || courses.get()
                        key=|c| c.id
                        children=move |course| view! { <CourseCard course=course on_click=on_course_click /> }
                    />
                </div>
            </Show>
        </div>
    }
}

/// Course detail view, typically shown in a modal
#[component]
pub fn CourseDetail(course: CourseSummary) -> impl IntoView {
    let created = course
        .created_date
        .map(|d| d.format("%B %-d, %Y").to_string());

    view! {
        <div class="space-y-6">
            <div class="flex justify-between items-start gap-4">
                <div>
                    <h2 class="text-2xl font-bold text-gray-900 leading-tight mb-2">{course.title.clone()}</h2>
                    <div class="flex items-center gap-3 text-sm text-gray-500">
                        {course.instructor_name.clone().map(|name| view! {
                            <span class="font-semibold text-gray-900">{name}</span>
                        })}
                        {course.category_name.clone()}
                    </div>
                </div>
                <PriceTag price=course.price discount_price=course.discount_price highlight=true />
            </div>

            <div class="flex items-center gap-4 text-sm text-gray-600">
                {course.rating.map(|rating| view! { <StarRating rating=rating /> })}
                {course.level.map(|level| view! { <Badge variant="blue">{level.to_string()}</Badge> })}
                <span>{course.enrollment_count} " learners"</span>
                {created.map(|date| view! { <span>"Published " {date}</span> })}
            </div>

            <hr class="border-gray-100" />

            <p class="text-gray-600 leading-relaxed">
                {course.description.clone().unwrap_or_else(|| "No description available.".to_string())}
            </p>
        </div>
    }
}
