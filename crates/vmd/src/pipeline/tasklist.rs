//! Checklist styling
//!
//! GitHub-style task list items get the `task-list-item` class so the
//! viewer stylesheet can strip their bullets and align the checkboxes.

use crate::core::RenderError;
use crate::dom::{Document, Node};
use crate::pipeline::Transform;

/// Adds `task-list-item` to checkbox list items
pub struct TaskListClasses;

impl Transform for TaskListClasses {
    fn name(&self) -> &'static str {
        "task-list-classes"
    }

    fn apply(&self, doc: &mut Document) -> Result<(), RenderError> {
        doc.visit_elements_mut(&mut |el| {
            if el.tag != "li" {
                return;
            }
            let is_task = el
                .children
                .iter()
                .find_map(Node::as_element)
                .map(|first| first.tag == "input" && first.attr("type") == Some("checkbox"))
                .unwrap_or(false);
            if is_task {
                el.add_class("task-list-item");
            }
        });
        Ok(())
    }
}
