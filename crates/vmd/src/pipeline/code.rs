//! Code-block styling
//!
//! Fenced and indented code blocks are tagged with the `hljs` class so
//! the viewer's client-side highlighter picks them up. Inline code is
//! left alone.

use crate::core::RenderError;
use crate::dom::{Document, Node};
use crate::pipeline::Transform;

/// Adds the `hljs` class to `pre > code` elements
pub struct CodeBlockClasses;

impl Transform for CodeBlockClasses {
    fn name(&self) -> &'static str {
        "code-block-classes"
    }

    fn apply(&self, doc: &mut Document) -> Result<(), RenderError> {
        doc.visit_elements_mut(&mut |el| {
            if el.tag != "pre" {
                return;
            }
            for child in &mut el.children {
                if let Node::Element(code) = child {
                    if code.tag == "code" {
                        code.add_class("hljs");
                    }
                }
            }
        });
        Ok(())
    }
}
