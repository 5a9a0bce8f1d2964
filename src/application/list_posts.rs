//! List posts use case

use crate::domain::{Post, PostCatalog};

/// Chronological listing with an optional tag filter and limit.
pub fn list_posts<'a>(
    catalog: &'a PostCatalog,
    tag: Option<&str>,
    limit: Option<usize>,
) -> Vec<&'a Post> {
    let mut view = match tag {
        Some(tag) => catalog.filter_by_tag(tag),
        None => catalog.chronological(),
    };

    if let Some(n) = limit {
        view.truncate(n);
    }

    view
}
