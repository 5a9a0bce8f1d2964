//! Tag aggregation over the post collection
//!
//! Counts are derived values, recomputed from the collection on every
//! request and never cached. No operation here can fail.

use crate::domain::post::Post;
use serde::Serialize;
use std::collections::HashMap;

/// A tag label with the number of posts carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
}

/// Count occurrences of each distinct tag string across `posts`.
///
/// Tags are compared verbatim (case-sensitive, no trimming). The result
/// is ordered by count descending; equal counts order by ascending name,
/// so the aggregate is reproducible regardless of ingestion order.
pub fn aggregate(posts: &[Post]) -> Vec<TagCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for post in posts {
        for tag in &post.tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut aggregate: Vec<TagCount> = counts
        .into_iter()
        .map(|(name, count)| TagCount {
            name: name.to_string(),
            count,
        })
        .collect();
    aggregate.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    aggregate
}

/// The first `n` entries of an aggregate, or all of them if fewer exist.
pub fn top(aggregate: &[TagCount], n: usize) -> &[TagCount] {
    &aggregate[..aggregate.len().min(n)]
}
