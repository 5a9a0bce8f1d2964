//! Initialize blog use case

use crate::error::Result;
use crate::infrastructure::{BlogRepository, Config, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Initialize a new blog at the specified path.
pub fn init(path: &Path, title: &str) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    repo.initialize()?;

    let config = Config::new(title);
    repo.save_config(&config)?;

    repo.create_dir_all(&config.content_dir)?;

    println!("Initialized quill blog at {}", path.display());
    println!("Title: {}", title);

    Ok(())
}
