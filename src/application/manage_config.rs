//! Config management use case

use crate::error::{QuillError, Result};
use crate::infrastructure::{BlogRepository, Config, FileSystemRepository};

const VALID_KEYS: &str = "title, description, content_dir, recent_posts, popular_tags, created";

/// Service for managing blog configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "title" => Ok(config.title.clone()),
            "description" => Ok(config.description.clone()),
            "content_dir" => Ok(config.content_dir.clone()),
            "recent_posts" => Ok(config.recent_posts.to_string()),
            "popular_tags" => Ok(config.popular_tags.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(QuillError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "title" => {
                config.title = value.to_string();
            }
            "description" => {
                config.description = value.to_string();
            }
            "content_dir" => {
                config.content_dir = value.to_string();
            }
            "recent_posts" => {
                config.recent_posts = parse_count(key, value)?;
            }
            "popular_tags" => {
                config.popular_tags = parse_count(key, value)?;
            }
            "created" => {
                return Err(QuillError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(QuillError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, VALID_KEYS
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize> {
    value.parse().map_err(|_| {
        QuillError::Config(format!(
            "Invalid value for '{}': expected a non-negative integer, got '{}'",
            key, value
        ))
    })
}
