//! Project catalog loading.
//!
//! # Responsibility
//! - Fetch the project feed once per page view and parse it into records.
//! - Classify failures into fetch and parse errors for the page boundary.
//!
//! # Invariants
//! - A catalog is immutable after load.
//! - The feed is trusted: no field validation rejects a record.
//! - Authoring mistakes (duplicate or odd slugs) surface as warnings only.

mod fetch;
mod lint;

pub use fetch::FETCH_TIMEOUT;
pub use lint::{lint_records, CatalogWarning};

use crate::model::project::ProjectRecord;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Instant;

/// Canonical site-relative location of the project feed.
pub const DATA_PATH: &str = "/projects/projects.json";

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Load failure for the project feed.
#[derive(Debug)]
pub enum CatalogError {
    /// Transport failure, non-success status, or unreadable file.
    Fetch { source: String, message: String },
    /// Body is not a JSON array of project records.
    Parse { source: String, message: String },
}

impl CatalogError {
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Fetch { .. } => "fetch_failed",
            Self::Parse { .. } => "parse_failed",
        }
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fetch { source, message } => write!(f, "failed to load `{source}`: {message}"),
            Self::Parse { source, message } => {
                write!(f, "failed to parse `{source}`: {message}")
            }
        }
    }
}

impl Error for CatalogError {}

/// Where the feed is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Http(String),
    File(PathBuf),
}

impl FeedSource {
    /// Interprets `http://` and `https://` inputs as URLs, anything else as a path.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Http(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }

    /// Feed URL for a deployed site, e.g. `https://example.org` + [`DATA_PATH`].
    pub fn default_for_site(base_url: &str) -> Self {
        Self::Http(format!("{}{DATA_PATH}", base_url.trim_end_matches('/')))
    }

    fn mode(&self) -> &'static str {
        match self {
            Self::Http(_) => "http",
            Self::File(_) => "file",
        }
    }
}

impl Display for FeedSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// In-memory collection of all records loaded for one page view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectCatalog {
    records: Vec<ProjectRecord>,
    warnings: Vec<CatalogWarning>,
}

impl ProjectCatalog {
    /// Wraps already-decoded records.
    pub fn from_records(records: Vec<ProjectRecord>) -> Self {
        let warnings = lint_records(&records);
        Self { records, warnings }
    }

    /// Parses a feed body held in memory.
    ///
    /// # Errors
    /// - Returns [`CatalogError::Parse`] when `body` is not a JSON array of records.
    pub fn from_json_str(body: &str) -> CatalogResult<Self> {
        parse_body("<inline>", body)
    }

    /// Loads the feed once from `source`, without retries.
    ///
    /// # Side effects
    /// - Performs one HTTP request or one file read.
    /// - Emits `catalog_load` events with duration and record count.
    ///
    /// # Errors
    /// - [`CatalogError::Fetch`] when the request fails or the status is not 2xx.
    /// - [`CatalogError::Parse`] when the body is not valid feed JSON.
    pub fn load(source: &FeedSource) -> CatalogResult<Self> {
        let started_at = Instant::now();
        info!(
            "event=catalog_load module=catalog status=start mode={}",
            source.mode()
        );

        let result =
            fetch::read_body(source).and_then(|body| parse_body(&source.to_string(), &body));
        match &result {
            Ok(catalog) => {
                info!(
                    "event=catalog_load module=catalog status=ok mode={} duration_ms={} records={} warnings={}",
                    source.mode(),
                    started_at.elapsed().as_millis(),
                    catalog.len(),
                    catalog.warnings.len()
                );
                for warning in &catalog.warnings {
                    warn!("event=catalog_lint module=catalog status=warn {warning}");
                }
            }
            Err(err) => {
                error!(
                    "event=catalog_load module=catalog status=error mode={} duration_ms={} error_code={} error={}",
                    source.mode(),
                    started_at.elapsed().as_millis(),
                    err.kind(),
                    err
                );
            }
        }
        result
    }

    /// Records in feed order.
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Authoring warnings found at load time.
    pub fn warnings(&self) -> &[CatalogWarning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn parse_body(source: &str, body: &str) -> CatalogResult<ProjectCatalog> {
    let records: Vec<ProjectRecord> =
        serde_json::from_str(body).map_err(|err| CatalogError::Parse {
            source: source.to_string(),
            message: err.to_string(),
        })?;
    Ok(ProjectCatalog::from_records(records))
}
