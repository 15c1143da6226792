//! Front matter extraction and rendering
//!
//! Front matter is recognized only at the very top of the document:
//! YAML between `---` lines, TOML between `+++` lines, and JSON between
//! a lone `{` line and a lone `}` line. The extracted block is parsed
//! lazily when rendered; a parse failure never fails the render, it
//! degrades to a code block carrying the error message in its `title`
//! attribute.

use serde_json::Value;
use tracing::debug;

use crate::core::{FrontMatterFormat, FrontMatterMode, RenderError, RenderOptions};
use crate::dom::{Document, Element, Node};
use crate::pipeline::Transform;

/// An extracted front matter block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub format: FrontMatterFormat,
    /// Text between the fence lines, fences excluded
    pub raw: String,
}

impl FrontMatter {
    /// Parse the raw text into a JSON value
    ///
    /// All three formats funnel into `serde_json::Value` so the table
    /// renderer has a single value model to walk. The JSON form is
    /// stored without its braces and re-wrapped here.
    pub fn parse(&self) -> Result<Value, String> {
        match self.format {
            FrontMatterFormat::Yaml => {
                serde_yaml_ng::from_str(&self.raw).map_err(|e| e.to_string())
            }
            FrontMatterFormat::Toml => toml::from_str(&self.raw).map_err(|e| e.to_string()),
            FrontMatterFormat::Json => {
                serde_json::from_str(&format!("{{{}}}", self.raw)).map_err(|e| e.to_string())
            }
        }
    }
}

/// Extract front matter from the top of the input
///
/// Returns the extracted block (if any) and the remaining Markdown
/// source. Only formats enabled in the options are recognized, and the
/// opening fence must be the first line of the input. An unclosed
/// fence is not front matter.
pub fn extract<'a>(input: &'a str, options: &RenderOptions) -> (Option<FrontMatter>, &'a str) {
    let mut lines = input.split_inclusive('\n');
    let first = match lines.next() {
        Some(line) => line.trim_end_matches(['\n', '\r']),
        None => return (None, input),
    };

    for &format in FrontMatterFormat::all() {
        if !options.format_enabled(format) {
            continue;
        }
        let (open, close) = format.fences();
        if first != open {
            continue;
        }

        // Scan for the closing fence line, tracking byte offsets.
        // Skip past the opening fence and its newline first.
        let mut offset = first.len();
        offset = input[offset..]
            .find('\n')
            .map(|i| offset + i + 1)
            .unwrap_or(input.len());
        let body_start = offset;

        for line in input[body_start..].split_inclusive('\n') {
            if line.trim_end_matches(['\n', '\r']) == close {
                let raw = input[body_start..offset].to_string();
                let rest = &input[offset + line.len()..];
                debug!(format = %format, bytes = raw.len(), "Extracted front matter");
                return (Some(FrontMatter { format, raw }), rest);
            }
            offset += line.len();
        }
    }

    (None, input)
}

/// Convert a parsed front matter value into a table node
///
/// Maps become a two-row table (keys as headers, values as cells),
/// sequences a single-row table, and scalars plain text. Nested maps
/// and sequences recurse into nested tables. Every generated table
/// carries the `frontmatter` class and center-aligned cells.
pub fn value_to_node(value: &Value) -> Node {
    match value {
        Value::Object(map) => {
            let head = map
                .keys()
                .map(|key| cell("th", Node::text(key.clone())))
                .collect();
            let body = map.values().map(|v| cell("td", value_to_node(v))).collect();
            table(vec![row(head), row(body)])
        }
        Value::Array(items) => {
            let body = items.iter().map(|v| cell("td", value_to_node(v))).collect();
            table(vec![row(body)])
        }
        scalar => Node::text(scalar_text(scalar)),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

fn table(rows: Vec<Node>) -> Node {
    let mut el = Element::new("table");
    el.add_class("frontmatter");
    el.children = rows;
    el.into()
}

fn row(cells: Vec<Node>) -> Node {
    let mut el = Element::new("tr");
    el.children = cells;
    el.into()
}

fn cell(tag: &str, content: Node) -> Node {
    let mut el = Element::new(tag);
    el.set_attr("align", "center");
    el.children.push(content);
    el.into()
}

/// Build the nodes that replace the front matter block, per mode
pub fn render_nodes(matter: &FrontMatter, mode: FrontMatterMode) -> Vec<Node> {
    match mode {
        FrontMatterMode::None => Vec::new(),
        FrontMatterMode::Code => vec![code_block(&matter.raw, matter.format.name(), None)],
        FrontMatterMode::Table => match matter.parse() {
            Ok(value) => vec![value_to_node(&value)],
            // Parse failures degrade to a code block; the viewer has
            // always tagged this fallback as toml
            Err(message) => vec![code_block(&matter.raw, "toml", Some(&message))],
        },
    }
}

fn code_block(raw: &str, lang: &str, title: Option<&str>) -> Node {
    let mut code = Element::new("code");
    code.add_class(&format!("language-{}", lang));
    if let Some(title) = title {
        code.set_attr("title", title);
    }
    code.children.push(Node::text(raw));

    Element::new("pre").with_child(code).into()
}

/// Pipeline transform splicing the rendered front matter at the start
/// of the document
pub struct FrontMatterBlock {
    matter: Option<FrontMatter>,
    mode: FrontMatterMode,
}

impl FrontMatterBlock {
    pub fn new(matter: Option<FrontMatter>, mode: FrontMatterMode) -> Self {
        Self { matter, mode }
    }
}

impl Transform for FrontMatterBlock {
    fn name(&self) -> &'static str {
        "front-matter-block"
    }

    fn apply(&self, doc: &mut Document) -> Result<(), RenderError> {
        if let Some(matter) = &self.matter {
            let mut nodes = render_nodes(matter, self.mode);
            nodes.append(&mut doc.children);
            doc.children = nodes;
        }
        Ok(())
    }
}
