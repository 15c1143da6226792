//! Heading slugs
//!
//! Every heading gets a GitHub-style `id` so in-document links and the
//! viewer's hash navigation work. Duplicate slugs are deduplicated with
//! numeric suffixes, matching github-slugger.

use std::collections::HashMap;

use crate::core::RenderError;
use crate::dom::{Document, Node};
use crate::pipeline::Transform;

const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Adds GitHub-style `id` attributes to headings
pub struct HeadingSlugs;

impl Transform for HeadingSlugs {
    fn name(&self) -> &'static str {
        "heading-slugs"
    }

    fn apply(&self, doc: &mut Document) -> Result<(), RenderError> {
        let mut slugger = Slugger::new();
        doc.visit_elements_mut(&mut |el| {
            if !HEADING_TAGS.contains(&el.tag.as_str()) {
                return;
            }
            let mut text = String::new();
            collect_text(&el.children, &mut text);
            el.set_attr("id", slugger.slug(&text));
        });
        Ok(())
    }
}

/// Heading text for slugging
///
/// Childless elements (the emoji images the pipeline spliced in
/// earlier) contribute their `alt` or `title` text.
fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(value) => out.push_str(value),
            Node::Element(el) => {
                if el.children.is_empty() {
                    if let Some(text) = el.attr("alt").or_else(|| el.attr("title")) {
                        out.push_str(text);
                    }
                } else {
                    collect_text(&el.children, out);
                }
            }
            Node::Raw(_) => {}
        }
    }
}

/// Stateful slug generator with duplicate tracking
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self {
            seen: HashMap::new(),
        }
    }

    /// Produce a unique slug for the given heading text
    ///
    /// Suffixed candidates are re-checked against earlier output, since
    /// a literal `a-1` heading already occupies that slug.
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut slug = base.clone();
        while self.seen.contains_key(&slug) {
            let count = self.seen.entry(base.clone()).or_insert(0);
            *count += 1;
            slug = format!("{}-{}", base, count);
        }
        self.seen.insert(slug.clone(), 0);
        slug
    }
}

impl Default for Slugger {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase, strip punctuation, spaces to dashes
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.to_lowercase().chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == '-' {
            slug.push(ch);
        } else if ch == ' ' {
            slug.push('-');
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lower::parse_markdown;
    use crate::serialize::serialize;

    #[test]
    fn test_basic_slug() {
        let mut doc = parse_markdown("# Hello World");
        HeadingSlugs.apply(&mut doc).unwrap();
        assert!(serialize(&doc).contains("<h1 id=\"hello-world\">"));
    }

    #[test]
    fn test_punctuation_stripped() {
        let mut doc = parse_markdown("## What's new, exactly?");
        HeadingSlugs.apply(&mut doc).unwrap();
        assert!(serialize(&doc).contains("<h2 id=\"whats-new-exactly\">"));
    }

    #[test]
    fn test_duplicate_headings_deduplicated() {
        let mut doc = parse_markdown("# Setup\n\n# Setup\n\n# Setup");
        HeadingSlugs.apply(&mut doc).unwrap();
        let html = serialize(&doc);
        assert!(html.contains("id=\"setup\""));
        assert!(html.contains("id=\"setup-1\""));
        assert!(html.contains("id=\"setup-2\""));
    }

    #[test]
    fn test_slug_from_inline_markup() {
        let mut doc = parse_markdown("### Using `render` *fast*");
        HeadingSlugs.apply(&mut doc).unwrap();
        assert!(serialize(&doc).contains("id=\"using-render-fast\""));
    }

    #[test]
    fn test_spliced_emoji_contributes_to_slug() {
        use crate::dom::{Element, Node};

        let heading = Element::new("h1")
            .with_child(Node::text("Hello "))
            .with_child(Element::new("img").with_attr("alt", ":tada:"));
        let mut doc = Document::from_nodes(vec![heading.into()]);
        HeadingSlugs.apply(&mut doc).unwrap();
        assert!(serialize(&doc).contains("id=\"hello-tada\""));
    }

    #[test]
    fn test_unicode_kept() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Überblick"), "überblick");
    }

    #[test]
    fn test_literal_suffix_heading_not_shadowed() {
        let mut doc = parse_markdown("# a-1\n\n# a\n\n# a");
        HeadingSlugs.apply(&mut doc).unwrap();
        let html = serialize(&doc);
        assert_eq!(html.matches("id=\"a-1\"").count(), 1);
        assert!(html.contains("id=\"a\""));
        assert!(html.contains("id=\"a-2\""));
    }

    #[test]
    fn test_slugger_skips_taken_suffix() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("a-1"), "a-1");
        assert_eq!(slugger.slug("a"), "a");
        assert_eq!(slugger.slug("a"), "a-2");
    }

    #[test]
    fn test_slugger_counts_independently() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("a"), "a");
        assert_eq!(slugger.slug("b"), "b");
        assert_eq!(slugger.slug("a"), "a-1");
        assert_eq!(slugger.slug("a"), "a-2");
        assert_eq!(slugger.slug("b"), "b-1");
    }
}
