//! List tags use case

use crate::domain::{tags, PostCatalog, TagCount};

/// Aggregate tag counts, optionally limited to the first `top` entries.
pub fn list_tags(catalog: &PostCatalog, top: Option<usize>) -> Vec<TagCount> {
    let aggregate = tags::aggregate(catalog.posts());

    match top {
        Some(n) => tags::top(&aggregate, n).to_vec(),
        None => aggregate,
    }
}
