//! Error types for quill

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the quill application
#[derive(Debug, Error)]
pub enum QuillError {
    #[error("Not a quill blog directory: {0}")]
    NotBlogDirectory(PathBuf),

    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Invalid post {path}: {reason}")]
    InvalidPost { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuillError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            QuillError::NotBlogDirectory(_) => 2,
            QuillError::PostNotFound(_) => 3,
            QuillError::InvalidPost { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            QuillError::NotBlogDirectory(path) => {
                format!(
                    "Not a quill blog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'quill init' in this directory to create a new blog\n\
                    • Navigate to an existing quill blog directory\n\
                    • Set QUILL_ROOT environment variable to your blog path",
                    path.display()
                )
            }
            QuillError::PostNotFound(slug) => {
                format!(
                    "Post not found: '{}'\n\n\
                    Suggestions:\n\
                    • Check the slug spelling (slugs are lowercase, hyphen-separated)\n\
                    • Use 'quill list' to see all posts and their slugs",
                    slug
                )
            }
            QuillError::InvalidPost { path, reason } => {
                format!(
                    "Invalid post {}: {}\n\n\
                    Posts open with a TOML front matter block:\n\
                    +++\n\
                    title = \"My post\"\n\
                    date = \"2025-01-17\"\n\
                    description = \"Optional summary\"\n\
                    tags = [\"rust\", \"blog\"]\n\
                    +++",
                    path.display(),
                    reason
                )
            }
            QuillError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!("{}\n\nExample: quill config recent_posts 5", msg)
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using QuillError
pub type Result<T> = std::result::Result<T, QuillError>;
