// catalog/api/client.rs - Process-wide backend client
//
// The server binary installs one RestBackend at startup; server functions
// look it up here when it is not provided through Leptos context.

use std::sync::OnceLock;

use super::rest::RestBackend;

static CLIENT: OnceLock<RestBackend> = OnceLock::new();

/// Initialize the global backend client
pub fn init_client(client: RestBackend) {
    tracing::info!("Initializing course backend client for {}", client.base_url());
    if CLIENT.set(client).is_err() {
        tracing::warn!("Course backend client already initialized");
    }
}

/// Get the global backend client
pub fn get_client() -> Option<RestBackend> {
    let client = CLIENT.get().cloned();
    if client.is_none() {
        tracing::warn!("Course backend client is not initialized");
    }
    client
}
