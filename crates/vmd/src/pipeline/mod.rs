//! Tree transformers applied between lowering and serialization
//!
//! Each transformer patches the document tree in place. The pipeline
//! runs them in a fixed order matching the viewer's plugin chain:
//! emoji substitution, checklist styling, code-block styling, heading
//! slugs, then the front matter block.

pub mod code;
pub mod emoji;
pub mod slug;
pub mod tasklist;

pub use code::CodeBlockClasses;
pub use emoji::EmojiImages;
pub use slug::HeadingSlugs;
pub use tasklist::TaskListClasses;

use tracing::{debug, span, Level};

use crate::core::{RenderError, RenderOptions};
use crate::dom::Document;
use crate::frontmatter::{FrontMatter, FrontMatterBlock};

/// A single in-place document transformation
pub trait Transform {
    /// Short name used in logs and error messages
    fn name(&self) -> &'static str;

    /// Apply the transformation to the document
    fn apply(&self, doc: &mut Document) -> Result<(), RenderError>;
}

/// An ordered chain of transforms
///
/// The pipeline wires the individual transformers together so callers
/// can run the full chain without handling each one manually.
#[derive(Default)]
pub struct Pipeline {
    transforms: Vec<Box<dyn Transform>>,
}

impl Pipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the standard pipeline for the given options
    ///
    /// `matter` is the front matter extracted from the source, if any;
    /// its rendered form is spliced in by the final transform.
    pub fn standard(options: &RenderOptions, matter: Option<FrontMatter>) -> Self {
        let mut pipeline = Self::new();
        pipeline.push(Box::new(EmojiImages));
        pipeline.push(Box::new(TaskListClasses));
        pipeline.push(Box::new(CodeBlockClasses));
        pipeline.push(Box::new(HeadingSlugs));
        pipeline.push(Box::new(FrontMatterBlock::new(
            matter,
            options.front_matter_mode,
        )));
        pipeline
    }

    /// Append a transform to the end of the chain
    pub fn push(&mut self, transform: Box<dyn Transform>) {
        self.transforms.push(transform);
    }

    /// Names of the registered transforms, in execution order
    pub fn transform_names(&self) -> Vec<&'static str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }

    /// Run every transform over the document, in order
    pub fn apply(&self, doc: &mut Document) -> Result<(), RenderError> {
        let pipeline_span = span!(Level::DEBUG, "pipeline", transforms = self.transforms.len());
        let _enter = pipeline_span.enter();

        for transform in &self.transforms {
            let transform_span = span!(Level::DEBUG, "transform", name = transform.name());
            let _transform_enter = transform_span.enter();
            transform.apply(doc)?;
            debug!(transform = transform.name(), "Transform applied");
        }

        Ok(())
    }
}
