//! Canonical display order for project records.
//!
//! # Invariants
//! - Order is year descending, then title ascending.
//! - Sorting is stable, so equal keys keep their input order.

use crate::model::project::ProjectRecord;
use std::cmp::Ordering;

/// Returns a newly ordered copy of `records`.
pub fn sort_projects(records: &[ProjectRecord]) -> Vec<ProjectRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(compare_projects);
    sorted
}

/// Comparator behind [`sort_projects`].
pub fn compare_projects(a: &ProjectRecord, b: &ProjectRecord) -> Ordering {
    b.numeric_year()
        .total_cmp(&a.numeric_year())
        .then_with(|| compare_titles(&a.title, &b.title))
}

/// Case-insensitive title comparison with a raw tiebreak.
///
/// Approximates root-locale collation: `"apple"` sorts next to `"Apple"`
/// rather than after every capitalized title.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}
