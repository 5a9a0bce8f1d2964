//! The immutable post collection and its query views
//!
//! Every view is a pure function recomputed on demand; nothing is cached
//! between calls and nothing here can fail. Absence is an empty sequence
//! or `None`, never an error.

use crate::domain::post::Post;

/// Neighbours of a post in the chronological view.
#[derive(Debug, Clone, Copy, Default)]
pub struct Adjacency<'a> {
    /// The immediately older post, if any.
    pub previous: Option<&'a Post>,
    /// The immediately newer post, if any.
    pub next: Option<&'a Post>,
}

/// The full set of posts, fixed for the lifetime of a command.
#[derive(Debug, Clone, Default)]
pub struct PostCatalog {
    posts: Vec<Post>,
}

impl PostCatalog {
    pub fn new(posts: Vec<Post>) -> Self {
        PostCatalog { posts }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// All posts in collection (ingestion) order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Posts by descending date. Equal dates order by ascending slug, so
    /// the view is reproducible regardless of ingestion order.
    pub fn chronological(&self) -> Vec<&Post> {
        let mut view: Vec<&Post> = self.posts.iter().collect();
        view.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
        view
    }

    /// Look up a post by slug.
    pub fn find(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    /// Neighbours of `slug` in the chronological view: `previous` is the
    /// immediately older post, `next` the immediately newer. Both are
    /// `None` at the respective boundary, and for an unknown slug.
    pub fn adjacent(&self, slug: &str) -> Adjacency<'_> {
        let view = self.chronological();
        let Some(index) = view.iter().position(|post| post.slug == slug) else {
            return Adjacency::default();
        };

        Adjacency {
            previous: view.get(index + 1).copied(),
            next: index.checked_sub(1).and_then(|i| view.get(i)).copied(),
        }
    }

    /// The chronological view restricted to posts carrying `tag`.
    /// Matching is exact and case-sensitive; an unknown tag yields an
    /// empty sequence.
    pub fn filter_by_tag(&self, tag: &str) -> Vec<&Post> {
        self.chronological()
            .into_iter()
            .filter(|post| post.tags.iter().any(|t| t == tag))
            .collect()
    }
}
