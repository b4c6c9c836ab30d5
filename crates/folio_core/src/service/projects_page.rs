//! Projects listing page service.
//!
//! # Responsibility
//! - Load the catalog once and sort it once.
//! - Re-derive the visible list for every query change.
//!
//! # Invariants
//! - The sorted record set is never mutated after construction.
//! - A failed load makes every render return the static failure message;
//!   no partial listing is ever produced.

use crate::catalog::{CatalogError, FeedSource, ProjectCatalog};
use crate::model::project::ProjectRecord;
use crate::render::{render_projects, LOAD_FAILED_HTML};
use crate::search::filter::filter_projects;
use crate::search::sort::sort_projects;
use log::{debug, error};

/// What the page containers should show after one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Markup for the list container.
    pub list_html: String,
    /// Number of rendered cards.
    pub count: usize,
    /// Whether the "no results" element is visible.
    pub empty_state_visible: bool,
    /// Diagnostic for a failed load; `None` when the catalog is ready.
    pub load_error: Option<String>,
}

#[derive(Debug, Clone)]
enum PageState {
    Ready(Vec<ProjectRecord>),
    LoadFailed(String),
}

/// Listing state for one page view.
#[derive(Debug, Clone)]
pub struct ProjectsPage {
    state: PageState,
}

impl ProjectsPage {
    /// Creates a ready page from a loaded catalog, sorting it once.
    pub fn new(catalog: &ProjectCatalog) -> Self {
        Self {
            state: PageState::Ready(sort_projects(catalog.records())),
        }
    }

    /// Creates a page whose catalog could not be loaded.
    pub fn failed(err: &CatalogError) -> Self {
        error!("event=projects_page module=service status=error error={err}");
        Self {
            state: PageState::LoadFailed(err.to_string()),
        }
    }

    /// Loads the feed from `source` and builds the page.
    ///
    /// Never fails: load errors turn into the failed page state.
    pub fn load(source: &FeedSource) -> Self {
        match ProjectCatalog::load(source) {
            Ok(catalog) => Self::new(&catalog),
            Err(err) => Self::failed(&err),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, PageState::Ready(_))
    }

    /// Load diagnostic when the feed could not be loaded.
    pub fn load_error(&self) -> Option<&str> {
        match &self.state {
            PageState::Ready(_) => None,
            PageState::LoadFailed(message) => Some(message),
        }
    }

    /// Sorted records; empty when the load failed.
    pub fn records(&self) -> &[ProjectRecord] {
        match &self.state {
            PageState::Ready(records) => records,
            PageState::LoadFailed(_) => &[],
        }
    }

    /// Renders the listing for the current input-box text.
    pub fn render(&self, query: &str) -> PageView {
        match &self.state {
            PageState::Ready(records) => {
                let visible = filter_projects(records, query);
                let rendered = render_projects(visible);
                debug!(
                    "event=projects_render module=service status=ok query_chars={} matches={} total={}",
                    query.trim().chars().count(),
                    rendered.count,
                    records.len()
                );
                PageView {
                    list_html: rendered.html,
                    count: rendered.count,
                    empty_state_visible: rendered.empty_state_visible,
                    load_error: None,
                }
            }
            PageState::LoadFailed(message) => PageView {
                list_html: LOAD_FAILED_HTML.to_string(),
                count: 0,
                empty_state_visible: false,
                load_error: Some(message.clone()),
            },
        }
    }
}
