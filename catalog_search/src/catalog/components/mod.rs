// catalog/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Loading, RetryPanel, Modal, etc.)
// - search.rs: Search bar, sort control, filter sidebar, chips, pagination
// - course.rs: Course cards, results grid and the course detail view

pub mod common;
pub mod course;
pub mod search;

// Re-export commonly used components for convenience
pub use common::*;
pub use course::*;
pub use search::*;
