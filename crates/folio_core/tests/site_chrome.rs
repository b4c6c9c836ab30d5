use folio_core::site::{is_active, NAV_ITEMS};
use folio_core::{render_footer, render_header, SiteConfig};

fn config() -> SiteConfig {
    SiteConfig::from_json_str(
        r#"{
            "name": "Test Owner",
            "email": "owner@example.edu",
            "githubUrl": "https://github.com/owner"
        }"#,
    )
    .unwrap()
}

#[test]
fn header_marks_only_current_section_active() {
    let html = render_header(&config(), "/projects/tone-sandhi/");

    assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
    assert!(html.contains(
        "<a data-nav href=\"/projects/\" class=\"active\" aria-current=\"page\">Projects</a>"
    ));
    assert!(html.contains("<a data-nav href=\"/cv/\">CV</a>"));
    assert!(html.contains("<nav class=\"site-nav\" aria-label=\"Primary\">"));
}

#[test]
fn header_on_home_page_has_no_active_link() {
    let html = render_header(&config(), "/");
    assert!(!html.contains("aria-current"));
    assert!(!html.contains("class=\"active\""));
}

#[test]
fn every_nav_item_is_active_on_its_own_page() {
    for item in NAV_ITEMS {
        let active = NAV_ITEMS
            .iter()
            .filter(|other| is_active(item.href, other.href))
            .count();
        assert_eq!(active, 1, "{}", item.href);
    }
}

#[test]
fn footer_omits_scholar_link_when_unset() {
    let html = render_footer(&config(), 2025);
    assert!(html.contains("<p>© 2025 Test Owner</p>"));
    assert!(!html.contains("Google Scholar"));
    assert!(!html.contains("href=\"\""));
    assert_eq!(html.matches("aria-hidden=\"true\"").count(), 1);
}

#[test]
fn footer_includes_scholar_link_when_configured() {
    let mut config = config();
    config.scholar_url = Some("https://scholar.google.com/citations?user=a&hl=en".to_string());

    let html = render_footer(&config, 2025);
    assert!(html.contains(
        "<a href=\"https://scholar.google.com/citations?user=a&amp;hl=en\" rel=\"me\">Google Scholar</a>"
    ));
    assert_eq!(html.matches("aria-hidden=\"true\"").count(), 2);
}

#[test]
fn site_config_loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.json");
    std::fs::write(
        &path,
        r#"{"name":"Disk Owner","email":"d@example.edu","githubUrl":"https://github.com/d"}"#,
    )
    .unwrap();

    let config = SiteConfig::load(&path).unwrap();
    assert_eq!(config.name, "Disk Owner");
    assert!(SiteConfig::load(dir.path().join("missing.json")).is_err());
}
