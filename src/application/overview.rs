//! Overview use case
//!
//! The blog's front-page view: the newest posts and the most frequent
//! tags, with both counts taken from configuration.

use crate::domain::{tags, Post, PostCatalog, TagCount};
use crate::infrastructure::Config;

/// Recent posts and popular tags for the overview display.
#[derive(Debug)]
pub struct Overview<'a> {
    pub recent: Vec<&'a Post>,
    pub popular: Vec<TagCount>,
}

/// Compute the overview per the configured section sizes.
pub fn overview<'a>(catalog: &'a PostCatalog, config: &Config) -> Overview<'a> {
    let mut recent = catalog.chronological();
    recent.truncate(config.recent_posts);

    let aggregate = tags::aggregate(catalog.posts());
    let popular = tags::top(&aggregate, config.popular_tags).to_vec();

    Overview { recent, popular }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::PostMetadata;
    use chrono::NaiveDate;

    fn post(slug: &str, date: &str, tags: &[&str]) -> Post {
        Post {
            slug: slug.to_string(),
            title: format!("Post {}", slug),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            description: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            content: String::new(),
            table_of_contents: Vec::new(),
            metadata: PostMetadata {
                reading_time: 1,
                word_count: 10,
            },
            source: format!("content/posts/{}.md", slug),
        }
    }

    #[test]
    fn test_overview_sections_respect_config() {
        let catalog = PostCatalog::new(vec![
            post("a", "2024-01-01", &["go"]),
            post("b", "2024-02-01", &["go", "rust"]),
            post("c", "2024-03-01", &["go", "cli"]),
            post("d", "2024-04-01", &["cli"]),
        ]);
        let mut config = Config::new("Test");
        config.recent_posts = 2;
        config.popular_tags = 1;

        let view = overview(&catalog, &config);

        let recent: Vec<&str> = view.recent.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(recent, vec!["d", "c"]);

        assert_eq!(view.popular.len(), 1);
        assert_eq!(view.popular[0].name, "go");
        assert_eq!(view.popular[0].count, 3);
    }

    #[test]
    fn test_overview_empty_catalog() {
        let catalog = PostCatalog::default();
        let config = Config::new("Test");

        let view = overview(&catalog, &config);
        assert!(view.recent.is_empty());
        assert!(view.popular.is_empty());
    }
}
