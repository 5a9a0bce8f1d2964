//! Show post use case
//!
//! The boundary where absence becomes an error: the catalog reports a
//! missing slug as `None`, and this use case maps it to `PostNotFound`
//! for the CLI to surface.

use crate::domain::{Post, PostCatalog};
use crate::error::{QuillError, Result};

/// A post together with its chronological neighbours.
#[derive(Debug, Clone, Copy)]
pub struct PostView<'a> {
    pub post: &'a Post,
    /// The immediately older post, if any.
    pub previous: Option<&'a Post>,
    /// The immediately newer post, if any.
    pub next: Option<&'a Post>,
}

/// Look up a post by slug along with its prev/next adjacency.
pub fn show_post<'a>(catalog: &'a PostCatalog, slug: &str) -> Result<PostView<'a>> {
    let post = catalog
        .find(slug)
        .ok_or_else(|| QuillError::PostNotFound(slug.to_string()))?;

    let adjacency = catalog.adjacent(slug);

    Ok(PostView {
        post,
        previous: adjacency.previous,
        next: adjacency.next,
    })
}
