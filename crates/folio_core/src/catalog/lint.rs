//! Authoring checks over loaded records.
//!
//! Nothing here rejects a feed. A duplicate slug means two cards point at the
//! same detail page, which is worth a warning but never a broken listing.

use crate::model::project::ProjectRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z0-9][a-z0-9._-]*$").expect("valid slug regex"));

/// Non-fatal feed authoring problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogWarning {
    /// Same slug used by records at these feed positions.
    DuplicateSlug { slug: String, indexes: Vec<usize> },
    /// Slug is empty or not safe as a single URL path segment.
    UnsafeSlug { index: usize, slug: String },
}

impl Display for CatalogWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateSlug { slug, indexes } => {
                let positions = indexes
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                write!(f, "warning=duplicate_slug slug={slug} indexes={positions}")
            }
            Self::UnsafeSlug { index, slug } => {
                write!(f, "warning=unsafe_slug index={index} slug={slug:?}")
            }
        }
    }
}

/// Returns warnings in feed order: per-record slug problems first, then duplicates.
pub fn lint_records(records: &[ProjectRecord]) -> Vec<CatalogWarning> {
    let mut warnings = Vec::new();
    let mut seen = BTreeMap::<&str, Vec<usize>>::new();

    for (index, record) in records.iter().enumerate() {
        if !SLUG_RE.is_match(&record.slug) {
            warnings.push(CatalogWarning::UnsafeSlug {
                index,
                slug: record.slug.clone(),
            });
        }
        seen.entry(record.slug.as_str()).or_default().push(index);
    }

    let mut duplicates = seen
        .into_iter()
        .filter(|(slug, indexes)| !slug.is_empty() && indexes.len() > 1)
        .map(|(slug, indexes)| CatalogWarning::DuplicateSlug {
            slug: slug.to_string(),
            indexes,
        })
        .collect::<Vec<_>>();
    duplicates.sort_by_key(|warning| match warning {
        CatalogWarning::DuplicateSlug { indexes, .. } => indexes[0],
        CatalogWarning::UnsafeSlug { index, .. } => *index,
    });
    warnings.extend(duplicates);
    warnings
}
