//! Front matter extraction
//!
//! Every post source opens with a TOML block delimited by `+++` lines:
//!
//! ```text
//! +++
//! title = "My post"
//! date = "2025-01-17"
//! description = "Optional summary"
//! tags = ["rust", "blog"]
//! +++
//!
//! Body markdown follows the closing delimiter.
//! ```
//!
//! Tags are taken verbatim: no case normalization, no trimming.
//! Differently-cased tags stay distinct.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

pub const DELIMITER: &str = "+++";

/// Errors raised while splitting or parsing a front matter block.
///
/// The ingestion service wraps these into `QuillError::InvalidPost`
/// together with the offending file path.
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("missing `+++` front matter delimiter")]
    MissingOpeningDelimiter,

    #[error("unterminated front matter block")]
    UnterminatedBlock,

    #[error("invalid front matter: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid date '{0}': expected ISO-8601 (YYYY-MM-DD)")]
    InvalidDate(String),
}

/// Parsed front matter fields of a post source.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
    pub title: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

/// Raw TOML shape; the date stays a string until validated.
#[derive(Debug, Deserialize)]
struct RawFrontMatter {
    title: String,
    date: String,
    description: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

/// Split a post source into its front matter and the markdown body.
///
/// The opening `+++` must be the first line of the file (a UTF-8 BOM is
/// tolerated). The body is everything after the closing delimiter line.
pub fn split(source: &str) -> Result<(FrontMatter, &str), FrontMatterError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let rest = source
        .strip_prefix(DELIMITER)
        .ok_or(FrontMatterError::MissingOpeningDelimiter)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .ok_or(FrontMatterError::MissingOpeningDelimiter)?;

    let mut offset = 0;
    let mut bounds = None;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            bounds = Some((offset, offset + line.len()));
            break;
        }
        offset += line.len();
    }
    let (block_end, body_start) = bounds.ok_or(FrontMatterError::UnterminatedBlock)?;

    let raw: RawFrontMatter = toml::from_str(&rest[..block_end])?;
    let date = NaiveDate::parse_from_str(raw.date.trim(), "%Y-%m-%d")
        .map_err(|_| FrontMatterError::InvalidDate(raw.date.clone()))?;

    Ok((
        FrontMatter {
            title: raw.title,
            date,
            description: raw.description,
            tags: raw.tags,
        },
        &rest[body_start..],
    ))
}
