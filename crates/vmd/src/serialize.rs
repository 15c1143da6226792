//! HTML serialization of the document tree
//!
//! Turns a [`Document`](crate::dom::Document) into an HTML fragment.
//! Text and attribute values are escaped; raw nodes pass through
//! untouched, matching the viewer's unsanitized output.

use crate::dom::{Document, Element, Node};

/// Elements serialized without a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements followed by a newline in the output, for readable fragments
const BLOCK_ELEMENTS: &[&str] = &[
    "blockquote",
    "div",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "hr",
    "li",
    "ol",
    "p",
    "pre",
    "table",
    "tbody",
    "td",
    "th",
    "thead",
    "tr",
    "ul",
];

/// Serialize a document to an HTML fragment
pub fn serialize(doc: &Document) -> String {
    let mut out = String::new();
    for node in &doc.children {
        serialize_node(node, &mut out);
    }
    out
}

/// Serialize a single node into the output buffer
pub fn serialize_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(value) => escape_text(value, out),
        Node::Raw(value) => out.push_str(value),
        Node::Element(el) => serialize_element(el, out),
    }
}

fn serialize_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);

    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        // Value-less attributes (checked, disabled) serialize bare
        if !value.is_empty() {
            out.push_str("=\"");
            escape_attr(value, out);
            out.push('"');
        }
    }
    out.push('>');

    let is_void = VOID_ELEMENTS.contains(&el.tag.as_str());
    if !is_void {
        for child in &el.children {
            serialize_node(child, out);
        }
        out.push_str("</");
        out.push_str(&el.tag);
        out.push('>');
    }

    if BLOCK_ELEMENTS.contains(&el.tag.as_str()) {
        out.push('\n');
    }
}

fn escape_text(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
