//! Content collection schema
//!
//! Site content lives in Markdown files with a YAML frontmatter block. Each
//! collection validates its frontmatter against a typed record; a missing
//! required field or a mistyped value rejects the entry before it can reach
//! the gallery. Unknown keys are ignored.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Frontmatter of an entry in the `illustrations` collection
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Illustration {
    pub title: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    /// Image URL or site-relative path
    pub image: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Frontmatter of an entry in the `projects` collection
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    pub cover_image: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: Option<bool>,
}

/// Frontmatter dates: a plain `YYYY-MM-DD` date, an RFC 3339 timestamp or a
/// `YYYY-MM-DD HH:MM:SS` timestamp. Timestamps keep only their date part.
fn deserialize_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_date(raw.trim()).ok_or_else(|| de::Error::custom(format!("invalid date `{raw}`")))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Records that carry a publication date
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl Dated for Illustration {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for Project {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// The content collections a site declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Illustrations,
    Projects,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Illustrations, Collection::Projects];

    /// Directory name of the collection inside the content root
    pub fn dir_name(self) -> &'static str {
        match self {
            Collection::Illustrations => "illustrations",
            Collection::Projects => "projects",
        }
    }
}

/// Errors raised while reading a content entry
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Entry does not start with a `---` frontmatter block")]
    MissingFrontmatter,
    #[error("Frontmatter block is never closed with `---`")]
    UnterminatedFrontmatter,
    #[error("Frontmatter does not match schema: {0}")]
    Schema(#[from] serde_yaml::Error),
}

/// A validated content entry
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T> {
    /// File stem of the source file
    pub slug: String,
    pub data: T,
    /// Markdown after the frontmatter block
    pub body: String,
}

/// Split a source file into its frontmatter YAML and the remaining body.
pub fn split_frontmatter(source: &str) -> Result<(&str, &str), ContentError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let rest = source
        .strip_prefix("---\n")
        .or_else(|| source.strip_prefix("---\r\n"))
        .ok_or(ContentError::MissingFrontmatter)?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            return Ok((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    Err(ContentError::UnterminatedFrontmatter)
}

/// Parse and validate one entry of a collection.
pub fn parse_entry<T: DeserializeOwned>(slug: &str, source: &str) -> Result<Entry<T>, ContentError> {
    let (frontmatter, body) = split_frontmatter(source)?;
    let data = serde_yaml::from_str(frontmatter)?;
    Ok(Entry {
        slug: slug.to_string(),
        data,
        body: body.to_string(),
    })
}

/// Order entries by date, newest first. Entries sharing a date keep their order.
pub fn sort_newest_first<T: Dated>(entries: &mut [Entry<T>]) {
    entries.sort_by(|a, b| b.data.date().cmp(&a.data.date()));
}

/// Projects flagged `featured: true`, in their current order
pub fn featured_projects(entries: &[Entry<Project>]) -> Vec<&Entry<Project>> {
    entries
        .iter()
        .filter(|entry| entry.data.featured == Some(true))
        .collect()
}
