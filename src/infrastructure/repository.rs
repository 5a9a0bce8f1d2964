//! File system repository

use crate::error::{QuillError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Abstract repository for blog operations
pub trait BlogRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .quill/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .quill/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .quill directory exists
    fn is_initialized(&self) -> bool;

    /// Create .quill directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of BlogRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover blog root by walking up from current directory
    /// First checks QUILL_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("QUILL_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_quill_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(QuillError::Config(format!(
                    "QUILL_ROOT is set to '{}' but no .quill directory found. \
                    Run 'quill init' in that directory or unset QUILL_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover blog root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_quill_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(QuillError::NotBlogDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .quill directory
    fn has_quill_dir(path: &Path) -> bool {
        path.join(".quill").is_dir()
    }
}

impl BlogRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_quill_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let quill_dir = self.root.join(".quill");

        if quill_dir.exists() {
            return Err(QuillError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&quill_dir)?;
        Ok(())
    }
}

// Source operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    fn normalize_relative_path(path: &Path) -> Option<String> {
        let parts: Vec<&str> = path
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }

    /// List post sources under `content_dir`, recursively.
    ///
    /// Only `.md` files count; dot-directories are skipped. Paths are
    /// relative to the blog root, slash-normalized, and sorted lexically
    /// so ingestion order is reproducible across platforms.
    pub fn list_sources(&self, content_dir: &str) -> Result<Vec<String>> {
        let content_root = self.root.join(content_dir);
        if !content_root.is_dir() {
            return Ok(Vec::new());
        }

        let mut sources = Vec::new();

        let walker = WalkDir::new(&content_root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if !name.ends_with(".md") {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            if let Some(normalized) = Self::normalize_relative_path(rel) {
                sources.push(normalized);
            }
        }

        sources.sort();
        Ok(sources)
    }

    /// Read a post source by its root-relative path.
    pub fn read_source(&self, relative: &str) -> Result<String> {
        fs::read_to_string(self.root.join(relative)).map_err(QuillError::Io)
    }

    /// Create a directory (and parents) relative to the repository root.
    pub fn create_dir_all(&self, dir: &str) -> Result<()> {
        let path = self.root.join(dir);
        fs::create_dir_all(path).map_err(QuillError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    #[test]
    fn test_new_repository() {
        let path = PathBuf::from("/tmp/test");
        let repo = FileSystemRepository::new(path.clone());
        assert_eq!(repo.root, path);
    }

    #[test]
    fn test_is_initialized() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());

        repo.initialize().unwrap();

        assert!(repo.is_initialized());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();

        let result = repo.initialize();
        assert!(result.is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();

        fs::create_dir(temp.path().join(".quill")).unwrap();

        let subdir = temp.path().join("content").join("posts");
        fs::create_dir_all(&subdir).unwrap();

        let repo = FileSystemRepository::discover_from(&subdir).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_quill_dir() {
        let temp = TempDir::new().unwrap();

        let result = FileSystemRepository::discover_from(temp.path());
        assert!(result.is_err());

        match result.unwrap_err() {
            QuillError::NotBlogDirectory(_) => {}
            _ => panic!("Expected NotBlogDirectory error"),
        }
    }

    #[test]
    fn test_discover_with_quill_root_env() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("QUILL_ROOT");

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".quill")).unwrap();

        std::env::set_var("QUILL_ROOT", temp.path());

        let repo = FileSystemRepository::discover().unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_quill_root_not_initialized() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("QUILL_ROOT");

        let temp = TempDir::new().unwrap();

        std::env::set_var("QUILL_ROOT", temp.path());

        let result = FileSystemRepository::discover();
        assert!(result.is_err());

        match result.unwrap_err() {
            QuillError::Config(msg) => {
                assert!(msg.contains("no .quill directory"));
            }
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();

        let config = Config::new("Roundtrip");
        repo.save_config(&config).unwrap();

        let loaded = repo.load_config().unwrap();
        assert_eq!(loaded.title, config.title);
    }

    #[test]
    fn test_list_sources_empty_when_content_dir_missing() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        let sources = repo.list_sources("content/posts").unwrap();
        assert!(sources.is_empty());
    }

    #[test]
    fn test_list_sources_only_markdown() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        fs::create_dir_all(temp.path().join("content/posts")).unwrap();
        fs::write(temp.path().join("content/posts/one.md"), "a").unwrap();
        fs::write(temp.path().join("content/posts/image.png"), "b").unwrap();
        fs::write(temp.path().join("content/posts/notes.txt"), "c").unwrap();

        let sources = repo.list_sources("content/posts").unwrap();
        assert_eq!(sources, vec!["content/posts/one.md"]);
    }

    #[test]
    fn test_list_sources_recursive_and_sorted() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        fs::create_dir_all(temp.path().join("content/posts/series")).unwrap();
        fs::write(temp.path().join("content/posts/zeta.md"), "z").unwrap();
        fs::write(temp.path().join("content/posts/alpha.md"), "a").unwrap();
        fs::write(temp.path().join("content/posts/series/part-one.md"), "p").unwrap();

        let sources = repo.list_sources("content/posts").unwrap();
        assert_eq!(
            sources,
            vec![
                "content/posts/alpha.md",
                "content/posts/series/part-one.md",
                "content/posts/zeta.md",
            ]
        );
    }

    #[test]
    fn test_list_sources_skips_dot_dirs() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        fs::create_dir_all(temp.path().join("content/posts/.drafts")).unwrap();
        fs::write(temp.path().join("content/posts/live.md"), "a").unwrap();
        fs::write(temp.path().join("content/posts/.drafts/wip.md"), "b").unwrap();

        let sources = repo.list_sources("content/posts").unwrap();
        assert_eq!(sources, vec!["content/posts/live.md"]);
    }

    #[test]
    fn test_read_source() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        fs::create_dir_all(temp.path().join("content/posts")).unwrap();
        fs::write(temp.path().join("content/posts/one.md"), "hello").unwrap();

        let content = repo.read_source("content/posts/one.md").unwrap();
        assert_eq!(content, "hello");
    }

    #[test]
    fn test_create_dir_all() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.create_dir_all("content/posts").unwrap();

        assert!(temp.path().join("content/posts").is_dir());
    }
}
