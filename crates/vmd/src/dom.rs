//! Document tree the transformers operate on
//!
//! A small HTML node tree sitting between the Markdown parser and the
//! HTML serializer. Transformers patch and splice these nodes before
//! serialization.

use std::fmt;

/// A node in the document tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An HTML element with attributes and children
    Element(Element),
    /// A text node, escaped on serialization
    Text(String),
    /// Raw HTML carried through unescaped (author HTML in the source)
    Raw(String),
}

impl Node {
    /// Create a text node
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    /// Create a raw HTML node
    pub fn raw(value: impl Into<String>) -> Self {
        Node::Raw(value.into())
    }

    /// Borrow the inner element, if this is an element node
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Mutably borrow the inner element, if this is an element node
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Concatenated text content of this node and its descendants
    ///
    /// Raw HTML does not contribute.
    pub fn text_content(&self, out: &mut String) {
        match self {
            Node::Text(value) => out.push_str(value),
            Node::Element(el) => {
                for child in &el.children {
                    child.text_content(out);
                }
            }
            Node::Raw(_) => {}
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An HTML element
///
/// Attributes keep insertion order so serialized output is stable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder-style child appender
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing any existing value
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    /// Returns true if the element has the given attribute
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Append a class token to the `class` attribute
    ///
    /// Existing classes are kept; duplicates are not added.
    pub fn add_class(&mut self, class: &str) {
        match self.attr("class") {
            Some(existing) => {
                if existing.split_ascii_whitespace().any(|c| c == class) {
                    return;
                }
                let combined = format!("{} {}", existing, class);
                self.set_attr("class", combined);
            }
            None => self.set_attr("class", class),
        }
    }

    /// Returns true if the `class` attribute contains the given token
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|value| value.split_ascii_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.tag)
    }
}

/// A rendered document fragment
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from a list of block nodes
    pub fn from_nodes(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Visit every element in the document, depth-first, mutably
    pub fn visit_elements_mut(&mut self, visit: &mut impl FnMut(&mut Element)) {
        fn walk(nodes: &mut [Node], visit: &mut impl FnMut(&mut Element)) {
            for node in nodes {
                if let Node::Element(el) = node {
                    visit(el);
                    walk(&mut el.children, visit);
                }
            }
        }
        walk(&mut self.children, visit);
    }

    /// Total node count, including text and raw nodes
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[Node]) -> usize {
            nodes
                .iter()
                .map(|node| match node {
                    Node::Element(el) => 1 + count(&el.children),
                    _ => 1,
                })
                .sum()
        }
        count(&self.children)
    }
}
