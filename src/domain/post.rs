//! Post records produced by the ingestion pipeline

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry in a post's table of contents.
///
/// Anchors carry a leading `#` so they can be used directly as fragment
/// links against the compiled body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub title: String,
    pub anchor: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TocEntry>,
}

impl TocEntry {
    pub fn new(title: String, anchor: String) -> Self {
        TocEntry {
            title,
            anchor,
            children: Vec::new(),
        }
    }
}

/// Metrics derived from the post body at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMetadata {
    /// Estimated reading time in minutes (200 words per minute).
    pub reading_time: u32,
    pub word_count: usize,
}

/// A single blog post: front matter fields plus the compiled body.
///
/// Posts are immutable once ingested. The catalog and tag logic never
/// modify them, and `content` (the compiled HTML fragment) is opaque to
/// everything downstream of the build step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique identifier derived from the source file stem.
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tag labels exactly as authored. Case-sensitive, not trimmed.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Compiled HTML fragment produced by the trusted build step.
    pub content: String,
    pub table_of_contents: Vec<TocEntry>,
    pub metadata: PostMetadata,
    /// Relative path of the originating file, for diagnostics.
    pub source: String,
}
