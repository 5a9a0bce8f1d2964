//! Slug derivation for posts and heading anchors

use regex::Regex;
use std::sync::OnceLock;

/// Regex matching runs of characters that separate slug words
fn separator_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^\p{Letter}\p{Number}]+").unwrap())
}

/// Derive a URL-safe slug from arbitrary text.
///
/// Lowercases the input, collapses every run of non-alphanumeric
/// characters into a single hyphen, and trims hyphens from both ends.
/// Unicode letters and digits are kept as-is.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    separator_regex()
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
