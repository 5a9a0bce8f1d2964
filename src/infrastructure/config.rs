//! Configuration management

use crate::error::{QuillError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_content_dir() -> String {
    "content/posts".to_string()
}

fn default_recent_posts() -> usize {
    3
}

fn default_popular_tags() -> usize {
    6
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Directory holding post sources, relative to the blog root.
    #[serde(default = "default_content_dir")]
    pub content_dir: String,
    /// How many posts the overview's recent section shows.
    #[serde(default = "default_recent_posts")]
    pub recent_posts: usize,
    /// How many tags the overview's popular section shows.
    #[serde(default = "default_popular_tags")]
    pub popular_tags: usize,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new(title: &str) -> Self {
        Config {
            title: title.to_string(),
            description: String::new(),
            content_dir: default_content_dir(),
            recent_posts: default_recent_posts(),
            popular_tags: default_popular_tags(),
            created: Utc::now(),
        }
    }

    /// Load config from .quill/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".quill").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                QuillError::NotBlogDirectory(path.to_path_buf())
            } else {
                QuillError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| QuillError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .quill/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let quill_dir = path.join(".quill");
        let config_path = quill_dir.join("config.toml");

        if !quill_dir.exists() {
            fs::create_dir(&quill_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| QuillError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
