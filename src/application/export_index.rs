//! Index export use case
//!
//! Serializes the finalized post collection as a JSON index — the
//! artifact a static presentation layer consumes. Posts are written in
//! chronological order (newest first) so the file is reproducible.

use crate::domain::PostCatalog;
use crate::error::{QuillError, Result};
use crate::infrastructure::repository::BlogRepository;
use crate::infrastructure::FileSystemRepository;
use std::fs;
use std::path::PathBuf;

/// Default index location under the blog root
const DEFAULT_INDEX_PATH: &str = ".quill/index.json";

/// Service for exporting the post index
pub struct ExportService {
    repository: FileSystemRepository,
}

impl ExportService {
    /// Create a new export service
    pub fn new(repository: FileSystemRepository) -> Self {
        ExportService { repository }
    }

    /// Write the index and return the path it was written to.
    ///
    /// A relative `output` is resolved against the blog root; `None`
    /// writes to `.quill/index.json`.
    pub fn execute(&self, catalog: &PostCatalog, output: Option<PathBuf>) -> Result<PathBuf> {
        let json = serde_json::to_string_pretty(&catalog.chronological())?;

        let output_path = match output {
            Some(path) if path.is_absolute() => path,
            Some(path) => self.repository.root().join(path),
            None => self.repository.root().join(DEFAULT_INDEX_PATH),
        };

        if let Some(parent) = output_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(QuillError::Io)?;
            }
        }

        fs::write(&output_path, format!("{}\n", json)).map_err(QuillError::Io)?;

        Ok(output_path)
    }
}
