//! Output formatting utilities

use crate::application::{Overview, PostView};
use crate::domain::{Post, TagCount, TocEntry};

/// Format a list of posts for display, newest first
pub fn format_post_list(posts: &[&Post]) -> String {
    if posts.is_empty() {
        return "No posts found\n".to_string();
    }

    let mut output = String::new();
    for post in posts {
        output.push_str(&format!(
            "{}  {:<24}  {}{}\n",
            post.date.format("%Y-%m-%d"),
            post.slug,
            post.title,
            format_tag_suffix(&post.tags)
        ));
    }
    output
}

fn format_tag_suffix(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let labels: Vec<String> = tags.iter().map(|tag| format!("#{}", tag)).collect();
    format!("  {}", labels.join(" "))
}

/// Format a tag aggregate for display, most used first
pub fn format_tag_list(tags: &[TagCount]) -> String {
    if tags.is_empty() {
        return "No tags found\n".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("#{} ({})\n", tag.name, tag.count));
    }
    output
}

fn push_toc_entries(output: &mut String, entries: &[TocEntry], depth: usize) {
    for entry in entries {
        output.push_str(&format!(
            "{}{} ({})\n",
            "  ".repeat(depth),
            entry.title,
            entry.anchor
        ));
        push_toc_entries(output, &entry.children, depth + 1);
    }
}

/// Format a single post with metadata, contents, and neighbours
pub fn format_post_view(view: &PostView) -> String {
    let post = view.post;
    let mut output = String::new();

    output.push_str(&format!("{}\n", post.title));
    output.push_str(&format!(
        "{}  ·  {} min read{}\n",
        post.date.format("%Y-%m-%d"),
        post.metadata.reading_time,
        format_tag_suffix(&post.tags)
    ));
    if let Some(description) = &post.description {
        output.push_str(&format!("{}\n", description));
    }

    if !post.table_of_contents.is_empty() {
        output.push_str("\nContents:\n");
        push_toc_entries(&mut output, &post.table_of_contents, 1);
    }

    if !post.content.is_empty() {
        output.push('\n');
        output.push_str(&post.content);
    }

    if view.previous.is_some() || view.next.is_some() {
        output.push('\n');
        if let Some(previous) = view.previous {
            output.push_str(&format!("Previous: {}  {}\n", previous.slug, previous.title));
        }
        if let Some(next) = view.next {
            output.push_str(&format!("Next:     {}  {}\n", next.slug, next.title));
        }
    }

    output
}

/// Format the overview: recent posts and popular tags
pub fn format_overview(overview: &Overview, blog_title: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n\n", blog_title));
    output.push_str("Recent posts\n\n");
    output.push_str(&format_post_list(&overview.recent));
    output.push_str("\nPopular tags\n\n");
    output.push_str(&format_tag_list(&overview.popular));

    output
}
