//! Project card markup.

use super::escape::escape_html;
use crate::model::project::ProjectRecord;

/// Visible separator between meta values and between link items.
pub const LINK_SEPARATOR: &str = r#"<span aria-hidden="true"> · </span>"#;

/// Static list body shown when the feed cannot be loaded.
pub const LOAD_FAILED_HTML: &str = "<p>Could not load projects right now.</p>";

const META_SEPARATOR: &str = " · ";

/// Rendered list plus the state of the "no results" indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedList {
    /// Concatenated card markup; empty when no record matched.
    pub html: String,
    /// Number of cards in `html`.
    pub count: usize,
    /// Whether the empty-state element should be shown.
    pub empty_state_visible: bool,
}

/// Renders cards for `records` in the given order.
pub fn render_projects<'a, I>(records: I) -> RenderedList
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let mut html = String::new();
    let mut count = 0;
    for record in records {
        html.push_str(&render_card(record));
        count += 1;
    }

    RenderedList {
        html,
        count,
        empty_state_visible: count == 0,
    }
}

/// Renders one `<article class="project-card">`.
pub fn render_card(record: &ProjectRecord) -> String {
    let mut card = String::from("<article class=\"project-card\">\n");

    card.push_str(&format!(
        "  <h2 class=\"project-title\"><a href=\"{}\">{}</a></h2>\n",
        escape_html(&record.detail_path()),
        escape_html(&record.title)
    ));
    card.push_str(&format!(
        "  <p class=\"project-meta\">{}</p>\n",
        render_meta(record)
    ));
    card.push_str(&format!(
        "  <p class=\"project-summary\">{}</p>\n",
        escape_html(record.summary())
    ));

    let tags = record
        .tags()
        .iter()
        .map(|tag| format!("<span class=\"tag\">{}</span>", escape_html(tag)))
        .collect::<String>();
    if !tags.is_empty() {
        card.push_str(&format!("  <div class=\"tags\">{tags}</div>\n"));
    }

    let links = render_links(record);
    if !links.is_empty() {
        card.push_str(&format!("  <p class=\"project-links\">{links}</p>\n"));
    }

    card.push_str("</article>\n");
    card
}

fn render_meta(record: &ProjectRecord) -> String {
    let year = record
        .year
        .as_ref()
        .filter(|year| year.is_present())
        .map(|year| escape_html(&year.display()));
    let status = record.status().map(escape_html);

    match (year, status) {
        (Some(year), Some(status)) => format!("{year}{META_SEPARATOR}{status}"),
        (Some(year), None) => year,
        (None, Some(status)) => status,
        (None, None) => String::new(),
    }
}

fn render_links(record: &ProjectRecord) -> String {
    let Some(links) = record.links.as_ref() else {
        return String::new();
    };

    links
        .items()
        .into_iter()
        .map(|(label, url)| format!("<a href=\"{}\">{label}</a>", escape_html(url)))
        .collect::<Vec<_>>()
        .join(LINK_SEPARATOR)
}
