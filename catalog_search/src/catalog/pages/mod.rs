// catalog/pages/mod.rs - Page components module
//
// - CatalogPage: faceted course search with pagination

pub mod catalog;

pub use catalog::CatalogPage;
