// catalog/mod.rs - Root module of the course catalog search application
//
// Architecture:
// - model/: Shared data types (used by both client and server)
// - config.rs, error.rs: configuration and error taxonomy
// - controller/: Headless search state machine (no features required)
// - backend.rs: The backend operations the controller consumes
// - server_fns.rs: Server function declarations (both client and server)
// - api/: REST client for the course backend (SSR only)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;

// Server function declarations - must be available to both client and server
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

// REST client for the course backend (SSR only)
#[cfg(feature = "ssr")]
pub mod api;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
