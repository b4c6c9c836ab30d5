//! Case-insensitive substring filtering.
//!
//! # Invariants
//! - Blank queries match every record.
//! - Matching is a plain contiguous substring test: no tokenizing, no fuzziness,
//!   no field weighting.

use crate::model::project::ProjectRecord;

/// Trims and lowercases raw input-box text.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Builds the lowercased search text for one record.
///
/// Fields are joined with single spaces in the order title, summary, tags,
/// year, status. Absent fields contribute nothing.
pub fn haystack(record: &ProjectRecord) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(5);
    parts.push(record.title.clone());
    if let Some(summary) = record.summary.as_deref() {
        parts.push(summary.to_string());
    }
    if !record.tags().is_empty() {
        parts.push(record.tags().join(" "));
    }
    if let Some(year) = record.year.as_ref() {
        parts.push(year.display());
    }
    if let Some(status) = record.status.as_deref() {
        parts.push(status.to_string());
    }
    parts.join(" ").to_lowercase()
}

/// Returns whether `record` matches `query`.
///
/// `query` may be raw input; it is normalized here.
pub fn matches(record: &ProjectRecord, query: &str) -> bool {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return true;
    }
    haystack(record).contains(&needle)
}

/// Returns the matching records in input order.
pub fn filter_projects<'a>(records: &'a [ProjectRecord], query: &str) -> Vec<&'a ProjectRecord> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| haystack(record).contains(&needle))
        .collect()
}
