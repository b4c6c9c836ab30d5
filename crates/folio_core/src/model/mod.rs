//! Domain model for the project listing feed.
//!
//! # Responsibility
//! - Define the record shape read from `projects.json`.
//! - Keep coercion rules for loosely-typed feed fields in one place.
//!
//! # Invariants
//! - Records are immutable once loaded; no API mutates a catalog in place.
//! - `slug` determines the detail page URL `/projects/<slug>/`.

pub mod project;
