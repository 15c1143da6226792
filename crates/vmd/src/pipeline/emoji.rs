//! Emoji substitution
//!
//! Two phases over the document's text nodes, matching the viewer's
//! plugin pair: unicode emoji are first rewritten to `:shortcode:`
//! text, then shortcode occurrences are spliced out of their text node
//! and replaced with `<img>` elements pointing at the `emoji://` URL
//! scheme the host viewer resolves.
//!
//! A `:name:` whose shortcode is not in the gemoji registry leaves the
//! entire text node untouched. Text inside `code` and `pre` is never
//! rewritten.

use crate::core::RenderError;
use crate::dom::{Document, Element, Node};
use crate::pipeline::Transform;

/// Longest emoji sequence tried when scanning for unicode emoji, in
/// chars (covers keycaps, variation selectors, flag pairs, and ZWJ
/// family sequences like `family_man_woman_girl_boy`)
const MAX_EMOJI_CHARS: usize = 10;

/// Replaces emoji with image elements
pub struct EmojiImages;

impl Transform for EmojiImages {
    fn name(&self) -> &'static str {
        "emoji-images"
    }

    fn apply(&self, doc: &mut Document) -> Result<(), RenderError> {
        process_nodes(&mut doc.children);
        Ok(())
    }
}

fn process_nodes(nodes: &mut Vec<Node>) {
    let mut index = 0;
    while index < nodes.len() {
        let replacement = match &mut nodes[index] {
            Node::Element(el) => {
                if el.tag != "code" && el.tag != "pre" {
                    process_nodes(&mut el.children);
                }
                None
            }
            Node::Text(value) => {
                if let Some(converted) = replace_unicode_emoji(value) {
                    *value = converted;
                }
                expand_shortcodes(value)
            }
            Node::Raw(_) => None,
        };

        match replacement {
            Some(new_nodes) => {
                let count = new_nodes.len();
                nodes.splice(index..index + 1, new_nodes);
                index += count;
            }
            None => index += 1,
        }
    }
}

/// Rewrite unicode emoji sequences to `:shortcode:` text
///
/// Returns `None` when the text contains no emoji.
fn replace_unicode_emoji(text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut changed = false;
    let mut rest = text;

    'scan: while !rest.is_empty() {
        // Longest match first so multi-codepoint sequences win over
        // their prefixes
        let ends: Vec<usize> = rest
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .take(MAX_EMOJI_CHARS)
            .collect();
        for &end in ends.iter().rev() {
            let candidate = &rest[..end];
            if candidate.is_ascii() {
                continue;
            }
            if let Some(shortcode) = emojis::get(candidate).and_then(|e| e.shortcode()) {
                out.push(':');
                out.push_str(shortcode);
                out.push(':');
                rest = &rest[end..];
                changed = true;
                continue 'scan;
            }
        }

        let ch = rest.chars().next().expect("rest is non-empty");
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    changed.then_some(out)
}

/// Split a text value around `:name:` shortcodes
///
/// Returns the replacement node list, or `None` to leave the node
/// untouched: either no shortcode was found, or one of the candidates
/// is not a known gemoji name (the viewer bails out of the whole node
/// in that case).
fn expand_shortcodes(value: &str) -> Option<Vec<Node>> {
    let mut nodes = Vec::new();
    let mut last_index = 0;
    let mut search_from = 0;

    while let Some(open_rel) = value[search_from..].find(':') {
        let open = search_from + open_rel;
        let name_start = open + 1;
        let close_rel = match value[name_start..].find(':') {
            Some(rel) => rel,
            None => break,
        };
        if close_rel == 0 {
            // Adjacent colons carry no name; the second colon may
            // still open a match
            search_from = name_start;
            continue;
        }

        let close = name_start + close_rel;
        let name = &value[name_start..close];
        if emojis::get_by_shortcode(name).is_none() {
            return None;
        }

        if open != last_index {
            nodes.push(Node::text(&value[last_index..open]));
        }
        nodes.push(emoji_image(name));

        last_index = close + 1;
        search_from = last_index;
    }

    if nodes.is_empty() {
        return None;
    }
    if last_index != value.len() {
        nodes.push(Node::text(&value[last_index..]));
    }
    Some(nodes)
}

fn emoji_image(name: &str) -> Node {
    Element::new("img")
        .with_attr("src", format!("emoji://{}", name))
        .with_attr("title", format!(":{}:", name))
        .with_attr("align", "absmiddle")
        .with_attr("alt", format!(":{}:", name))
        .with_attr("class", "emoji")
        .into()
}
