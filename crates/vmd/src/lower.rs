//! Markdown parsing and lowering into the document tree
//!
//! comrak parses the Markdown source with the GFM extensions the viewer
//! relies on (tables, strikethrough, autolinks, task lists). Lowering
//! walks the comrak AST and produces the [`Document`](crate::dom::Document)
//! tree the transformers patch.
//!
//! Lowering is purely structural: styling classes, heading ids, and the
//! front matter block are added later by the pipeline.

use comrak::nodes::{AstNode, ListType, NodeValue, TableAlignment};
use comrak::{parse_document, Arena, Options};
use tracing::{debug, span, Level};

use crate::dom::{Document, Element, Node};

/// Parse Markdown text into a document tree
pub fn parse_markdown(input: &str) -> Document {
    let parse_span = span!(Level::DEBUG, "parse_markdown", input_len = input.len());
    let _enter = parse_span.enter();

    let options = comrak_options();
    let arena = Arena::new();
    let root = parse_document(&arena, input, &options);

    let doc = Document::from_nodes(lower_children(root, false));
    debug!(node_count = doc.node_count(), "Lowered Markdown AST");
    doc
}

/// comrak options matching the viewer's Markdown dialect
fn comrak_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options
}

/// Lower all children of an AST node
///
/// `tight` unwraps paragraphs, used inside tight list items.
fn lower_children<'a>(node: &'a AstNode<'a>, tight: bool) -> Vec<Node> {
    let mut out = Vec::new();
    for child in node.children() {
        lower_node(child, tight, &mut out);
    }
    out
}

fn lower_node<'a>(node: &'a AstNode<'a>, tight: bool, out: &mut Vec<Node>) {
    let data = node.data.borrow();
    match &data.value {
        NodeValue::Document => out.extend(lower_children(node, false)),

        NodeValue::Paragraph => {
            if tight {
                out.extend(lower_children(node, false));
            } else {
                let mut el = Element::new("p");
                el.children = lower_children(node, false);
                out.push(el.into());
            }
        }

        NodeValue::Heading(heading) => {
            let mut el = Element::new(format!("h{}", heading.level));
            el.children = lower_children(node, false);
            out.push(el.into());
        }

        NodeValue::ThematicBreak => out.push(Element::new("hr").into()),

        NodeValue::BlockQuote => {
            let mut el = Element::new("blockquote");
            el.children = lower_children(node, false);
            out.push(el.into());
        }

        NodeValue::List(list) => {
            let mut el = match list.list_type {
                ListType::Bullet => Element::new("ul"),
                ListType::Ordered => {
                    let mut el = Element::new("ol");
                    if list.start != 1 {
                        el.set_attr("start", list.start.to_string());
                    }
                    el
                }
            };
            el.children = lower_children(node, list.tight);
            out.push(el.into());
        }

        NodeValue::Item(_) => {
            let mut el = Element::new("li");
            el.children = lower_children(node, tight);
            out.push(el.into());
        }

        NodeValue::TaskItem(symbol) => {
            let mut checkbox = Element::new("input")
                .with_attr("type", "checkbox")
                .with_attr("disabled", "");
            if symbol.is_some() {
                checkbox.set_attr("checked", "");
            }

            let mut el = Element::new("li");
            el.children.push(checkbox.into());
            el.children.push(Node::text(" "));
            el.children.extend(lower_children(node, tight));
            out.push(el.into());
        }

        NodeValue::CodeBlock(code_block) => {
            let mut code = Element::new("code");
            if let Some(lang) = code_block.info.split_whitespace().next() {
                code.add_class(&format!("language-{}", lang));
            }
            code.children.push(Node::text(code_block.literal.clone()));

            let pre = Element::new("pre").with_child(code);
            out.push(pre.into());
        }

        NodeValue::HtmlBlock(html_block) => out.push(Node::raw(html_block.literal.clone())),
        NodeValue::HtmlInline(html) => out.push(Node::raw(html.clone())),

        NodeValue::Table(table) => out.push(lower_table(node, &table.alignments)),
        // Handled by lower_table; reaching here means a malformed tree
        NodeValue::TableRow(_) | NodeValue::TableCell => {}

        NodeValue::Text(text) => out.push(Node::text(text.clone())),
        NodeValue::SoftBreak => out.push(Node::text("\n")),
        NodeValue::LineBreak => out.push(Element::new("br").into()),

        NodeValue::Code(code) => {
            let el = Element::new("code").with_child(Node::text(code.literal.clone()));
            out.push(el.into());
        }

        NodeValue::Emph => {
            let mut el = Element::new("em");
            el.children = lower_children(node, false);
            out.push(el.into());
        }

        NodeValue::Strong => {
            let mut el = Element::new("strong");
            el.children = lower_children(node, false);
            out.push(el.into());
        }

        NodeValue::Strikethrough => {
            let mut el = Element::new("del");
            el.children = lower_children(node, false);
            out.push(el.into());
        }

        NodeValue::Link(link) => {
            let mut el = Element::new("a").with_attr("href", link.url.clone());
            if !link.title.is_empty() {
                el.set_attr("title", link.title.clone());
            }
            el.children = lower_children(node, false);
            out.push(el.into());
        }

        NodeValue::Image(link) => {
            let mut alt = String::new();
            for child in lower_children(node, false) {
                child.text_content(&mut alt);
            }

            let mut el = Element::new("img")
                .with_attr("src", link.url.clone())
                .with_attr("alt", alt);
            if !link.title.is_empty() {
                el.set_attr("title", link.title.clone());
            }
            out.push(el.into());
        }

        // Front matter is stripped before parsing; anything else unknown
        // contributes its children only
        _ => out.extend(lower_children(node, tight)),
    }
}

fn lower_table<'a>(node: &'a AstNode<'a>, alignments: &[TableAlignment]) -> Node {
    let mut thead = Element::new("thead");
    let mut tbody = Element::new("tbody");

    for row in node.children() {
        let header = matches!(row.data.borrow().value, NodeValue::TableRow(true));
        let mut tr = Element::new("tr");

        for (column, cell) in row.children().enumerate() {
            let mut el = Element::new(if header { "th" } else { "td" });
            if let Some(align) = alignment_name(alignments.get(column)) {
                el.set_attr("align", align);
            }
            el.children = lower_children(cell, false);
            tr.children.push(el.into());
        }

        if header {
            thead.children.push(tr.into());
        } else {
            tbody.children.push(tr.into());
        }
    }

    let mut table = Element::new("table");
    table.children.push(thead.into());
    if !tbody.children.is_empty() {
        table.children.push(tbody.into());
    }
    table.into()
}

fn alignment_name(alignment: Option<&TableAlignment>) -> Option<&'static str> {
    match alignment {
        Some(TableAlignment::Left) => Some("left"),
        Some(TableAlignment::Center) => Some("center"),
        Some(TableAlignment::Right) => Some("right"),
        Some(TableAlignment::None) | None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize::serialize;

    #[test]
    fn test_lower_heading_and_paragraph() {
        let doc = parse_markdown("# Title\n\nSome *text*.");
        let html = serialize(&doc);
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<p>Some <em>text</em>.</p>"));
    }

    #[test]
    fn test_lower_tight_list_unwraps_paragraphs() {
        let doc = parse_markdown("- one\n- two");
        let html = serialize(&doc);
        assert!(html.contains("<li>one</li>"));
        assert!(!html.contains("<li><p>"));
    }

    #[test]
    fn test_lower_loose_list_keeps_paragraphs() {
        let doc = parse_markdown("- one\n\n- two");
        let html = serialize(&doc);
        assert!(html.contains("<li><p>one</p>"));
    }

    #[test]
    fn test_lower_task_items() {
        let doc = parse_markdown("- [x] done\n- [ ] open");
        let html = serialize(&doc);
        assert!(html.contains("<input type=\"checkbox\" disabled checked> done"));
        assert!(html.contains("<input type=\"checkbox\" disabled> open"));
    }

    #[test]
    fn test_lower_code_block_language() {
        let doc = parse_markdown("```rust\nfn main() {}\n```");
        let html = serialize(&doc);
        assert!(html.contains("<pre><code class=\"language-rust\">"));
        assert!(html.contains("fn main() {}"));
    }

    #[test]
    fn test_lower_code_block_without_language() {
        let doc = parse_markdown("```\nplain\n```");
        let html = serialize(&doc);
        assert!(html.contains("<pre><code>"));
    }

    #[test]
    fn test_lower_table_with_alignment() {
        let doc = parse_markdown("| a | b |\n|:-:|--:|\n| 1 | 2 |");
        let html = serialize(&doc);
        assert!(html.contains("<th align=\"center\">a</th>"));
        assert!(html.contains("<th align=\"right\">b</th>"));
        assert!(html.contains("<td align=\"center\">1</td>"));
    }

    #[test]
    fn test_lower_strikethrough_and_autolink() {
        let doc = parse_markdown("~~gone~~ https://example.com");
        let html = serialize(&doc);
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("<a href=\"https://example.com\">"));
    }

    #[test]
    fn test_lower_raw_html_passthrough() {
        let doc = parse_markdown("<div class=\"x\">raw</div>");
        let html = serialize(&doc);
        assert!(html.contains("<div class=\"x\">raw</div>"));
    }

    #[test]
    fn test_lower_image_alt_from_children() {
        let doc = parse_markdown("![some *alt*](pic.png \"caption\")");
        let html = serialize(&doc);
        assert!(html.contains("src=\"pic.png\""));
        assert!(html.contains("alt=\"some alt\""));
        assert!(html.contains("title=\"caption\""));
    }

    #[test]
    fn test_lower_empty_input() {
        let doc = parse_markdown("");
        assert!(doc.children.is_empty());
    }
}
