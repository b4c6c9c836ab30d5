//! Core logic for the folio academic site.
//! This crate owns the project listing invariants and the site chrome markup.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod render;
pub mod search;
pub mod service;
pub mod site;

pub use catalog::{
    CatalogError, CatalogResult, CatalogWarning, FeedSource, ProjectCatalog, DATA_PATH,
};
pub use logging::{default_log_level, init_logging, logging_status, LogSettings, LoggingError};
pub use model::project::{ProjectLinks, ProjectRecord, Year};
pub use render::{
    escape_html, render_card, render_footer, render_header, render_projects, RenderedList,
};
pub use search::filter::{filter_projects, haystack, matches, normalize_query};
pub use search::sort::sort_projects;
pub use service::projects_page::{PageView, ProjectsPage};
pub use site::{SiteConfig, SiteConfigError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
