use folio_core::{CatalogError, FeedSource, ProjectCatalog, ProjectsPage, DATA_PATH};
use std::io::Write;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FEED: &str = r#"[
  {
    "slug": "tone-sandhi",
    "title": "Tone Sandhi in Taiwanese",
    "year": 2023,
    "status": "In progress",
    "summary": "Production study.",
    "tags": ["phonology", "fieldwork"],
    "links": {"paper": "https://doi.org/10.1/x"}
  },
  {"slug": "corpus", "title": "Learner Corpus", "year": "2021"}
]"#;

fn write_feed(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

async fn load_blocking(url: String) -> Result<ProjectCatalog, CatalogError> {
    tokio::task::spawn_blocking(move || ProjectCatalog::load(&FeedSource::Http(url)))
        .await
        .unwrap()
}

#[test]
fn file_feed_loads_records_in_feed_order() {
    let file = write_feed(FEED);
    let source = FeedSource::parse(file.path().to_str().unwrap());

    let catalog = ProjectCatalog::load(&source).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.records()[0].slug, "tone-sandhi");
    assert_eq!(catalog.records()[1].numeric_year(), 2021.0);
    assert!(catalog.warnings().is_empty());
}

#[test]
fn missing_file_is_fetch_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = FeedSource::File(dir.path().join("projects.json"));

    let err = ProjectCatalog::load(&source).unwrap_err();
    assert!(err.is_fetch());
}

#[test]
fn malformed_file_is_parse_error() {
    let file = write_feed("[{\"slug\": \"a\",");
    let source = FeedSource::File(file.path().to_path_buf());

    let err = ProjectCatalog::load(&source).unwrap_err();
    assert!(err.is_parse());
    assert!(err.to_string().contains("failed to parse"));
}

#[test]
fn wrongly_typed_field_is_parse_error() {
    let err = ProjectCatalog::from_json_str(r#"[{"slug":"a","title":"A","tags":"solo"}]"#)
        .unwrap_err();
    assert!(err.is_parse());
}

#[test]
fn null_and_numeric_text_fields_do_not_reject_feed() {
    let catalog = ProjectCatalog::from_json_str(
        r#"[
            {"slug":"a","title":null},
            {"slug":null,"title":1984,"summary":null,"status":2},
            {"slug":"b","title":"Fine"}
        ]"#,
    )
    .unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.records()[0].title, "");
    assert_eq!(catalog.records()[1].slug, "");
    assert_eq!(catalog.records()[1].title, "1984");
    assert_eq!(catalog.records()[1].status(), Some("2"));
    assert_eq!(catalog.records()[2].title, "Fine");

    let page = ProjectsPage::new(&catalog);
    let view = page.render("");
    assert!(view.load_error.is_none());
    assert_eq!(view.count, 3);
    assert!(page.render("1984").list_html.contains(">1984</a>"));
}

#[test]
fn duplicate_slugs_load_with_warning() {
    let catalog = ProjectCatalog::from_json_str(
        r#"[{"slug":"same","title":"One"},{"slug":"same","title":"Two"}]"#,
    )
    .unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.warnings().len(), 1);
    assert!(catalog.warnings()[0].to_string().contains("duplicate_slug"));
}

#[tokio::test(flavor = "multi_thread")]
async fn http_feed_is_fetched_with_no_store() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(DATA_PATH))
        .and(header("cache-control", "no-store"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
        .expect(1)
        .mount(&server)
        .await;

    let catalog = load_blocking(format!("{}{DATA_PATH}", server.uri()))
        .await
        .unwrap();
    assert_eq!(catalog.len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn http_not_found_is_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(DATA_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = load_blocking(format!("{}{DATA_PATH}", server.uri()))
        .await
        .unwrap_err();
    assert!(err.is_fetch());
    assert!(err.to_string().contains("404"));
}

#[tokio::test(flavor = "multi_thread")]
async fn http_html_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(DATA_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<!doctype html><p>oops</p>"))
        .mount(&server)
        .await;

    let err = load_blocking(format!("{}{DATA_PATH}", server.uri()))
        .await
        .unwrap_err();
    assert!(err.is_parse());
}

#[tokio::test(flavor = "multi_thread")]
async fn server_error_turns_page_into_static_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let source = FeedSource::default_for_site(&server.uri());
    let page = tokio::task::spawn_blocking(move || ProjectsPage::load(&source))
        .await
        .unwrap();

    let view = page.render("anything");
    assert_eq!(view.list_html, "<p>Could not load projects right now.</p>");
    assert!(!view.empty_state_visible);
    assert!(page.load_error().unwrap().contains("503"));
}
