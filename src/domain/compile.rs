//! Markdown body compilation
//!
//! A post body is compiled exactly once, at ingestion, into everything
//! derived from it: the HTML fragment (with anchor ids injected into
//! headings), the nested table of contents, and the word count feeding
//! the reading-time estimate. Downstream code treats the fragment as an
//! opaque artifact.

use crate::domain::post::TocEntry;
use crate::domain::slug::slugify;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::collections::HashMap;

/// Words per minute assumed by the reading-time estimate
const WORDS_PER_MINUTE: usize = 200;

/// Everything derived from one post body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledBody {
    pub html: String,
    pub table_of_contents: Vec<TocEntry>,
    pub word_count: usize,
}

fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES
}

/// Reading time in whole minutes: `ceil(words / 200)`, 0 for an empty body.
pub fn reading_time(word_count: usize) -> u32 {
    word_count.div_ceil(WORDS_PER_MINUTE) as u32
}

/// A heading encountered in the body, with its assigned anchor.
#[derive(Debug)]
struct Heading {
    level: usize,
    title: String,
    anchor: String,
}

/// Assign a unique anchor for a slugified heading. Duplicates get a
/// numeric suffix: `intro`, `intro-1`, `intro-2`.
fn unique_anchor(base: String, seen: &mut HashMap<String, usize>) -> String {
    let occurrences = seen.entry(base.clone()).or_insert(0);
    *occurrences += 1;
    if *occurrences == 1 {
        base
    } else {
        format!("{}-{}", base, *occurrences - 1)
    }
}

/// First pass: gather headings (with anchors) and the body word count.
fn collect_headings(body: &str) -> (Vec<Heading>, usize) {
    let mut headings = Vec::new();
    let mut word_count = 0;
    let mut seen_anchors: HashMap<String, usize> = HashMap::new();
    let mut open_heading: Option<(usize, String)> = None;

    for event in Parser::new_ext(body, parser_options()) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                open_heading = Some((level as usize, String::new()));
            }

            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, title)) = open_heading.take() {
                    let anchor = unique_anchor(slugify(&title), &mut seen_anchors);
                    headings.push(Heading {
                        level,
                        title,
                        anchor,
                    });
                }
            }

            Event::Text(text) => {
                word_count += text.split_whitespace().count();
                if let Some((_, buffer)) = open_heading.as_mut() {
                    buffer.push_str(&text);
                }
            }

            Event::Code(code) => {
                word_count += code.split_whitespace().count();
                if let Some((_, buffer)) = open_heading.as_mut() {
                    buffer.push_str(&code);
                }
            }

            _ => {}
        }
    }

    (headings, word_count)
}

/// Nest a flat heading sequence by level. A deeper heading becomes a
/// child of the nearest shallower open entry; skipped levels nest under
/// whatever is open above them.
fn build_toc(headings: &[Heading]) -> Vec<TocEntry> {
    let mut root: Vec<TocEntry> = Vec::new();
    let mut open_levels: Vec<usize> = Vec::new();

    for heading in headings {
        while open_levels
            .last()
            .is_some_and(|&level| level >= heading.level)
        {
            open_levels.pop();
        }

        let mut siblings = &mut root;
        for _ in 0..open_levels.len() {
            if siblings.is_empty() {
                break;
            }
            let last = siblings.len() - 1;
            siblings = &mut siblings[last].children;
        }

        siblings.push(TocEntry::new(
            heading.title.clone(),
            format!("#{}", heading.anchor),
        ));
        open_levels.push(heading.level);
    }

    root
}

/// Compile a markdown body to its HTML fragment, TOC, and word count.
pub fn compile_markdown(body: &str) -> CompiledBody {
    let (headings, word_count) = collect_headings(body);

    let mut anchors = headings.iter().map(|h| h.anchor.as_str());
    let events = Parser::new_ext(body, parser_options()).map(|event| match event {
        Event::Start(Tag::Heading {
            level,
            classes,
            attrs,
            ..
        }) => Event::Start(Tag::Heading {
            level,
            id: anchors
                .next()
                .filter(|anchor| !anchor.is_empty())
                .map(|anchor| CowStr::from(anchor.to_string())),
            classes,
            attrs,
        }),
        other => other,
    });

    let mut html = String::with_capacity(body.len() * 3 / 2);
    html::push_html(&mut html, events);

    CompiledBody {
        html,
        table_of_contents: build_toc(&headings),
        word_count,
    }
}
