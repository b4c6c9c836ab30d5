//! Site owner configuration.

use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Identity and profile links rendered into the site chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub orcid_id: Option<String>,
    pub github_url: String,
    #[serde(default)]
    pub school_page: Option<String>,
    /// Google Scholar profile; the footer link is dropped when unset.
    #[serde(default)]
    pub scholar_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "David Honeycutt".to_string(),
            email: "dhoney88@hawaii.edu".to_string(),
            orcid_id: Some("0009-0006-3880-898X".to_string()),
            github_url: "https://github.com/hanikatto".to_string(),
            school_page: Some("https://www.hawaii.edu/sls/people/david-honeycutt/".to_string()),
            scholar_url: None,
        }
    }
}

#[derive(Debug)]
pub enum SiteConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
}

impl Display for SiteConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read site config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid site config: {err}"),
        }
    }
}

impl Error for SiteConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SiteConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl SiteConfig {
    pub fn from_json_str(body: &str) -> Result<Self, SiteConfigError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Reads a JSON site config from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SiteConfigError> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path).map_err(|source| SiteConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&body)?;
        info!(
            "event=site_config_load module=site status=ok path={} scholar_link={}",
            path.display(),
            config.scholar_url().is_some()
        );
        Ok(config)
    }

    /// Scholar URL when configured and non-blank.
    pub fn scholar_url(&self) -> Option<&str> {
        self.scholar_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }

    /// Public ORCID profile URL.
    pub fn orcid_url(&self) -> Option<String> {
        self.orcid_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .map(|id| format!("https://orcid.org/{}", id.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::SiteConfig;

    #[test]
    fn parses_camel_case_fields() {
        let config = SiteConfig::from_json_str(
            r#"{
                "name": "A. Author",
                "email": "a@example.edu",
                "githubUrl": "https://github.com/a",
                "scholarUrl": "https://scholar.google.com/citations?user=x"
            }"#,
        )
        .unwrap();
        assert_eq!(config.name, "A. Author");
        assert_eq!(
            config.scholar_url(),
            Some("https://scholar.google.com/citations?user=x")
        );
        assert_eq!(config.orcid_url(), None);
    }

    #[test]
    fn blank_scholar_url_counts_as_unset() {
        let config = SiteConfig {
            scholar_url: Some("  ".to_string()),
            ..SiteConfig::default()
        };
        assert_eq!(config.scholar_url(), None);
    }

    #[test]
    fn default_has_orcid_profile() {
        assert_eq!(
            SiteConfig::default().orcid_url().as_deref(),
            Some("https://orcid.org/0009-0006-3880-898X")
        );
    }

    #[test]
    fn missing_required_field_is_parse_error() {
        assert!(SiteConfig::from_json_str(r#"{"name":"x"}"#).is_err());
    }
}
