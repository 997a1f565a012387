// lib.rs - Root module of the catalog_search library
//
// The headless search controller and the shared model compile without any
// feature. The Leptos UI needs `ssr` (server) or `hydrate` (browser).

pub mod catalog;

/// WASM entry point: hydrate the server-rendered page
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(catalog::App);
}
