// catalog/components/common.rs - Reusable UI components
//
// Small stateless components that receive all data via props.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;
use rust_decimal::Decimal;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Thin progress bar over the results grid during a section reload
#[component]
pub fn SectionLoading(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || active.get()>
            <div class="absolute inset-x-0 top-0 h-1 overflow-hidden rounded-full bg-blue-100">
                <div class="h-full w-1/3 bg-blue-600 animate-pulse"></div>
            </div>
        </Show>
    }
}

/// Full-width error panel with a retry action
///
/// Rendered above the results; whatever is already on screen stays.
#[component]
pub fn RetryPanel(
    /// The error message to display
    #[prop(into)]
    message: Signal<String>,
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="w-full bg-red-50 border border-red-200 rounded-xl p-6 mb-6 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div class="flex-1">
                <h3 class="text-red-800 font-bold mb-1">"Could not load courses"</h3>
                <p class="text-red-600 text-sm">{move || message.get()}</p>
            </div>
            <button
                type="button"
                class="px-4 py-2 bg-white text-red-700 rounded-lg border border-red-300 \
                       hover:bg-red-100 transition-colors font-medium shadow-sm"
                on:click=move |_| on_retry.run(())
            >
                "Try again"
            </button>
        </div>
    }
}

/// Modal wrapper component
///
/// The parent decides whether the modal is mounted.
#[component]
pub fn ModalWrapper(
    children: Children,
    on_close: Callback<()>,
    #[prop(default = "")]
    title: &'static str,
) -> impl IntoView {
    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 sm:p-6"
            on:keydown=handle_keydown
        >
            <div
                class="absolute inset-0 bg-gray-900/60 backdrop-blur-sm"
                on:click=move |_| on_close.run(())
            ></div>

            <div
                class="relative bg-white rounded-2xl shadow-2xl w-full max-w-2xl max-h-[90vh] flex flex-col overflow-hidden"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex justify-between items-center px-6 py-4 border-b border-gray-100 bg-gray-50/50">
                    <h2 class="text-xl font-bold text-gray-800">{title}</h2>
                    <button
                        class="text-gray-400 hover:text-gray-600 hover:bg-gray-100 rounded-full p-2 transition-colors"
                        on:click=move |_| on_close.run(())
                        title="Close"
                    >
                        "✕"
                    </button>
                </div>
                <div class="p-6 overflow-y-auto">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Full, half and empty star counts for a 0-5 rating
pub fn star_counts(rating: f64) -> (usize, bool, usize) {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let half = full < 5 && (rating - rating.floor()) >= 0.5;
    let empty = 5 - full - usize::from(half);
    (full, half, empty)
}

/// Star rating display component
#[component]
pub fn StarRating(
    rating: f64,
    #[prop(default = true)]
    show_value: bool,
) -> impl IntoView {
    let (full_stars, has_half, empty_stars) = star_counts(rating);

    view! {
        <div class="flex items-center gap-0.5" title=format!("Rating: {:.1}", rating)>
            {(0..full_stars).map(|_| view! {
                <span class="text-yellow-400">"★"</span>
            }).collect_view()}

            {has_half.then(|| view! {
                <div class="relative inline-block">
                    <span class="text-gray-200">"★"</span>
                    <span class="absolute top-0 left-0 overflow-hidden w-1/2 text-yellow-400">"★"</span>
                </div>
            })}

            {(0..empty_stars).map(|_| view! {
                <span class="text-gray-200">"★"</span>
            }).collect_view()}

            {show_value.then(|| view! {
                <span class="ml-2 text-sm font-bold text-gray-700">{format!("{:.1}", rating)}</span>
            })}
        </div>
    }
}

pub fn badge_class(variant: &str) -> &'static str {
    match variant {
        "green" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-green-100 text-green-800 border border-green-200",
        "red" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-red-100 text-red-800 border border-red-200",
        "blue" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-blue-100 text-blue-800 border border-blue-200",
        _ => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800 border border-gray-200",
    }
}

/// Badge component
#[component]
pub fn Badge(
    children: Children,
    #[prop(default = "gray")]
    variant: &'static str,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant)>
            {children()}
        </span>
    }
}

/// "$12.50", or "Free" for a zero price
pub fn format_price(price: Decimal) -> String {
    if price.is_zero() {
        "Free".to_string()
    } else {
        format!("${:.2}", price)
    }
}

/// Course price, with the list price struck through when discounted
#[component]
pub fn PriceTag(
    price: Decimal,
    #[prop(default = None)]
    discount_price: Option<Decimal>,
    #[prop(default = false)]
    highlight: bool,
) -> impl IntoView {
    let class = if highlight {
        "text-2xl font-bold text-blue-600"
    } else {
        "text-lg font-bold text-blue-600"
    };

    match discount_price.filter(|d| *d < price) {
        Some(discount) => view! {
            <span class="flex items-baseline gap-2">
                <span class=class>{format_price(discount)}</span>
                <span class="text-sm text-gray-400 line-through">{format_price(price)}</span>
            </span>
        }
        .into_any(),
        None => view! { <span class=class>{format_price(price)}</span> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_star_counts() {
        assert_eq!(star_counts(4.5), (4, true, 0));
        assert_eq!(star_counts(4.4), (4, false, 1));
        assert_eq!(star_counts(3.0), (3, false, 2));
        assert_eq!(star_counts(0.0), (0, false, 5));
        assert_eq!(star_counts(0.5), (0, true, 4));
    }

    #[test]
    fn test_star_counts_clamped() {
        assert_eq!(star_counts(5.0), (5, false, 0));
        assert_eq!(star_counts(7.2), (5, false, 0));
        assert_eq!(star_counts(-1.0), (0, false, 5));
    }

    #[test]
    fn test_badge_variants() {
        assert!(badge_class("green").contains("bg-green-100"));
        assert!(badge_class("blue").contains("bg-blue-100"));
        assert!(badge_class("unknown").contains("bg-gray-100"));
        for variant in ["green", "red", "blue", "gray"] {
            assert!(badge_class(variant).contains("rounded-full"), "{}", variant);
        }
    }

    #[test]
    fn test_price_formatting() {
        assert_eq!(format_price(Decimal::ZERO), "Free");
        assert_eq!(format_price(Decimal::from_str("49.9").unwrap()), "$49.90");
        assert_eq!(format_price(Decimal::from(120)), "$120.00");
    }
}
