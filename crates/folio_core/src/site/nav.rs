//! Primary navigation and active-link rules.

/// One entry of the primary navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

/// Primary navigation in display order.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Projects",
        href: "/projects/",
    },
    NavItem {
        label: "Publications",
        href: "/publications/",
    },
    NavItem {
        label: "CV",
        href: "/cv/",
    },
    NavItem {
        label: "About",
        href: "/about/",
    },
];

/// Appends a trailing `/` when missing.
pub fn normalize_path(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}

/// Whether the link to `link_path` is the current section for `current_path`.
///
/// A link is active on its own page and on any page nested below it. `/` is
/// only active on the root page.
pub fn is_active(current_path: &str, link_path: &str) -> bool {
    let current = normalize_path(strip_query(current_path));
    let link = normalize_path(strip_query(link_path));
    current == link || (link != "/" && current.starts_with(&link))
}

fn strip_query(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = &path[..end];
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::{is_active, normalize_path};

    #[test]
    fn normalize_adds_trailing_slash_once() {
        assert_eq!(normalize_path("/cv"), "/cv/");
        assert_eq!(normalize_path("/cv/"), "/cv/");
    }

    #[test]
    fn nested_pages_activate_their_section() {
        assert!(is_active("/projects/tone-sandhi/", "/projects/"));
        assert!(is_active("/projects", "/projects/"));
        assert!(!is_active("/publications/", "/projects/"));
    }

    #[test]
    fn root_link_is_only_active_on_root() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/about/", "/"));
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert!(is_active("/cv?print=1", "/cv/"));
        assert!(is_active("/about/#contact", "/about/"));
    }
}
