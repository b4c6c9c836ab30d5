//! Project listing search and ordering.
//!
//! # Responsibility
//! - Decide which records match a live text query.
//! - Produce the canonical display order for a record set.
//!
//! # Invariants
//! - Both operations are pure and never mutate their input.
//! - Filtering preserves the order of the input slice.

pub mod filter;
pub mod sort;
