//! quill - Terminal blog content engine
//!
//! A command-line tool that ingests a directory of markdown posts with
//! TOML front matter and answers the queries a static blog needs:
//! chronological listings, slug lookup with prev/next adjacency, tag
//! aggregation with counts, tag-filtered views, and a JSON index export
//! for the presentation layer.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::QuillError;
