//! Raw feed retrieval over HTTP or from disk.
//!
//! # Invariants
//! - HTTP requests always bypass caches so feed edits show up immediately.
//! - Exactly one attempt is made per call.

use super::{CatalogError, CatalogResult, FeedSource};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CACHE_CONTROL, PRAGMA};
use std::time::Duration;

/// Upper bound for a single feed request.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub(super) fn read_body(source: &FeedSource) -> CatalogResult<String> {
    match source {
        FeedSource::Http(url) => fetch_http(url),
        FeedSource::File(path) => {
            std::fs::read_to_string(path).map_err(|err| CatalogError::Fetch {
                source: path.display().to_string(),
                message: err.to_string(),
            })
        }
    }
}

fn fetch_http(url: &str) -> CatalogResult<String> {
    let fetch_error = |message: String| CatalogError::Fetch {
        source: url.to_string(),
        message,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .default_headers(no_store_headers())
        .build()
        .map_err(|err| fetch_error(format!("failed to create HTTP client: {err}")))?;

    let response = client
        .get(url)
        .send()
        .map_err(|err| fetch_error(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(fetch_error(format!("HTTP status {}", status.as_u16())));
    }

    response.text().map_err(|err| fetch_error(err.to_string()))
}

fn no_store_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}
