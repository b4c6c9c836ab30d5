//! Site header and footer markup.

use super::card::LINK_SEPARATOR;
use super::escape::escape_html;
use crate::site::config::SiteConfig;
use crate::site::nav::{is_active, NAV_ITEMS};
use chrono::{Datelike, Utc};

/// Copyright year for the footer, taken from the UTC clock.
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Renders the site header with the primary navigation.
///
/// The link for the section containing `current_path` gets `class="active"`
/// and `aria-current="page"`; other links carry neither.
pub fn render_header(config: &SiteConfig, current_path: &str) -> String {
    let links = NAV_ITEMS
        .iter()
        .map(|item| {
            let active_attrs = if is_active(current_path, item.href) {
                " class=\"active\" aria-current=\"page\""
            } else {
                ""
            };
            format!(
                "      <a data-nav href=\"{}\"{active_attrs}>{}</a>\n",
                item.href, item.label
            )
        })
        .collect::<String>();

    format!(
        "<header class=\"site-header\">\n  <div class=\"container header-inner\">\n    <a class=\"site-title\" href=\"/\">{}</a>\n    <nav class=\"site-nav\" aria-label=\"Primary\">\n{links}    </nav>\n  </div>\n</header>\n",
        escape_html(&config.name)
    )
}

/// Renders the site footer for the given copyright `year`.
pub fn render_footer(config: &SiteConfig, year: i32) -> String {
    let email = escape_html(&config.email);
    let mut links = vec![format!("<a href=\"mailto:{email}\">{email}</a>")];
    if let Some(orcid_url) = config.orcid_url() {
        links.push(format!(
            "<a href=\"{}\" rel=\"me\">ORCID</a>",
            escape_html(&orcid_url)
        ));
    }
    if let Some(scholar_url) = config.scholar_url() {
        links.push(format!(
            "<a href=\"{}\" rel=\"me\">Google Scholar</a>",
            escape_html(scholar_url)
        ));
    }
    links.push(format!(
        "<a href=\"{}\" rel=\"me\">GitHub</a>",
        escape_html(&config.github_url)
    ));

    format!(
        "<footer class=\"site-footer\">\n  <div class=\"container footer-inner\">\n    <p>© {year} {}</p>\n    <p class=\"footer-links\">{}</p>\n  </div>\n</footer>\n",
        escape_html(&config.name),
        links.join(LINK_SEPARATOR)
    )
}
