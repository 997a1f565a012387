// catalog/api/mod.rs - Server-side access to the course backend
//
// - rest.rs: typed REST client for the three backend endpoints
// - client.rs: process-wide client handle used by the server functions

pub mod client;
pub mod rest;

pub use rest::RestBackend;
