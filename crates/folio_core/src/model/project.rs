//! Project record model.
//!
//! # Responsibility
//! - Mirror one entry of the JSON feed with lenient, optional fields.
//! - Provide coercion helpers for `year` (numeric for sorting, text for display).
//!
//! # Invariants
//! - Deserialization never fails because an optional field is missing, null,
//!   or a scalar of the wrong JSON type.
//! - `Year::numeric()` never returns NaN or negative zero.
//! - Empty link URLs behave exactly like absent ones.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Path prefix for project detail pages.
pub const PROJECTS_PATH: &str = "/projects/";

/// Year value as authored in the feed.
///
/// The feed is hand-edited, so both `2021` and `"2021"` appear in practice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(serde_json::Number),
    Text(String),
}

impl Year {
    /// Returns the sort value, coercing missing or non-numeric text to `0.0`.
    pub fn numeric(&self) -> f64 {
        let value = match self {
            Self::Number(number) => number.as_f64().unwrap_or(0.0),
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed
                        .parse::<f64>()
                        .ok()
                        .filter(|value| value.is_finite())
                        .unwrap_or(0.0)
                }
            }
        };

        if value.is_nan() || value == 0.0 {
            0.0
        } else {
            value
        }
    }

    /// Whether the year should be shown at all (`0` and `""` are hidden).
    pub fn is_present(&self) -> bool {
        match self {
            Self::Number(number) => number.as_f64().is_some_and(|value| value != 0.0),
            Self::Text(text) => !text.is_empty(),
        }
    }

    /// Display text for the year, printing integral numbers without a fraction.
    pub fn display(&self) -> String {
        match self {
            Self::Number(number) => number_text(number),
            Self::Text(text) => text.clone(),
        }
    }
}

fn number_text(number: &serde_json::Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        Some(value) if value.is_finite() && value.fract() == 0.0 => format!("{value:.0}"),
        Some(value) => value.to_string(),
        None => number.to_string(),
    }
}

/// Scalar feed value as display text; `None` for null, arrays and objects.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number_text(&number)),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn lenient_year<'de, D>(deserializer: D) -> Result<Option<Year>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => Some(Year::Number(number)),
        other => scalar_text(other).map(Year::Text),
    })
}

impl From<i64> for Year {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for Year {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for Year {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Optional outbound links for one project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
}

impl ProjectLinks {
    /// Returns `(label, url)` pairs in display order, skipping absent URLs.
    pub fn items(&self) -> Vec<(&'static str, &str)> {
        [
            ("Paper", self.paper.as_deref()),
            ("Code", self.code.as_deref()),
            ("Demo", self.demo.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| match url {
            Some(url) if !url.is_empty() => Some((label, url)),
            _ => None,
        })
        .collect()
    }
}

/// One project entry from the feed.
///
/// Only `slug` and `title` are expected on every record, but they default to
/// empty strings so one sparse entry does not reject the whole feed. Text
/// fields also accept numbers and booleans (as their string form) and treat
/// null as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub slug: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(
        default,
        deserialize_with = "lenient_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<Year>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ProjectLinks>,
}

impl ProjectRecord {
    /// Creates a record with only identity fields set.
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Builder-style setter used by fixtures and import code.
    pub fn with_year(mut self, year: impl Into<Year>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Detail page path, `/projects/<slug>/`.
    pub fn detail_path(&self) -> String {
        format!("{PROJECTS_PATH}{}/", self.slug)
    }

    /// Sort value of `year`; absent years sort as `0`.
    pub fn numeric_year(&self) -> f64 {
        self.year.as_ref().map_or(0.0, Year::numeric)
    }

    /// Tags in authored order; empty when absent.
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    /// Non-empty status text, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref().filter(|status| !status.is_empty())
    }

    /// Summary text, defaulting to the empty string.
    pub fn summary(&self) -> &str {
        self.summary.as_deref().unwrap_or("")
    }
}
