//! Catalog build use case
//!
//! The build step of the system: turns the content directory into the
//! finalized, immutable post collection every query runs against. All
//! source validation lives here; the catalog itself never validates.

use crate::domain::compile::{compile_markdown, reading_time};
use crate::domain::front_matter;
use crate::domain::post::{Post, PostMetadata};
use crate::domain::slug::slugify;
use crate::domain::PostCatalog;
use crate::error::{QuillError, Result};
use crate::infrastructure::repository::BlogRepository;
use crate::infrastructure::FileSystemRepository;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Maximum post title length, in characters
const MAX_TITLE_LEN: usize = 99;

/// Service that builds the post catalog from the content directory.
pub struct BuildCatalogService {
    repository: FileSystemRepository,
}

impl BuildCatalogService {
    /// Create a new build catalog service
    pub fn new(repository: FileSystemRepository) -> Self {
        BuildCatalogService { repository }
    }

    /// Ingest every post source and return the finalized catalog.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPost` for the first source with malformed front
    /// matter, an empty or over-long title, an empty slug, or a slug
    /// already claimed by another source.
    pub fn execute(&self) -> Result<PostCatalog> {
        let config = self.repository.load_config()?;
        let sources = self.repository.list_sources(&config.content_dir)?;

        let mut posts = Vec::with_capacity(sources.len());
        let mut claimed_slugs: HashMap<String, String> = HashMap::new();

        for source in sources {
            let raw = self.repository.read_source(&source)?;
            let post = ingest_source(&source, &raw, &mut claimed_slugs)?;
            posts.push(post);
        }

        Ok(PostCatalog::new(posts))
    }
}

/// Build one `Post` from a source file, enforcing the ingestion contract.
fn ingest_source(
    source: &str,
    raw: &str,
    claimed_slugs: &mut HashMap<String, String>,
) -> Result<Post> {
    let invalid = |reason: String| QuillError::InvalidPost {
        path: PathBuf::from(source),
        reason,
    };

    let (front, body) = front_matter::split(raw).map_err(|e| invalid(e.to_string()))?;

    if front.title.trim().is_empty() {
        return Err(invalid("title must not be empty".to_string()));
    }
    if front.title.chars().count() > MAX_TITLE_LEN {
        return Err(invalid(format!(
            "title exceeds {} characters",
            MAX_TITLE_LEN
        )));
    }

    let stem = Path::new(source)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    let slug = slugify(stem);
    if slug.is_empty() {
        return Err(invalid("file name yields an empty slug".to_string()));
    }
    if let Some(other) = claimed_slugs.insert(slug.clone(), source.to_string()) {
        return Err(invalid(format!(
            "slug '{}' already used by {}",
            slug, other
        )));
    }

    let compiled = compile_markdown(body);

    Ok(Post {
        slug,
        title: front.title,
        date: front.date,
        description: front.description,
        tags: front.tags,
        content: compiled.html,
        table_of_contents: compiled.table_of_contents,
        metadata: PostMetadata {
            reading_time: reading_time(compiled.word_count),
            word_count: compiled.word_count,
        },
        source: source.to_string(),
    })
}
