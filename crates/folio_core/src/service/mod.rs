//! Page-level use-case services.
//!
//! # Responsibility
//! - Own per-page state (the sorted catalog) for its whole lifetime.
//! - Combine catalog, search and render layers into one call per input event.

pub mod projects_page;
