//! The rendering façade
//!
//! Ties the stages together: front matter extraction, Markdown
//! parsing, the transform pipeline, and HTML serialization.

use std::fs;
use std::path::Path;

use tracing::{debug, info, span, Level};

use crate::core::{RenderError, RenderOptions, SourceKind};
use crate::frontmatter;
use crate::lower::parse_markdown;
use crate::pipeline::Pipeline;
use crate::serialize::serialize;

/// Renders Markdown sources to HTML fragments
///
/// A `Renderer` is cheap to construct and holds only the options, so
/// it can be reused across documents.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Create a renderer with the given options
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// The options this renderer was built with
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render Markdown text to an HTML fragment
    pub fn render(&self, input: &str) -> Result<String, RenderError> {
        let render_span = span!(Level::INFO, "render", input_len = input.len());
        let _enter = render_span.enter();

        info!("Starting render pipeline");

        let (matter, rest) = frontmatter::extract(input, &self.options);
        let mut doc = parse_markdown(rest);

        let pipeline = Pipeline::standard(&self.options, matter);
        pipeline.apply(&mut doc)?;

        let html = serialize(&doc);
        debug!(output_len = html.len(), "Render completed");
        Ok(html)
    }

    /// Render a file, passing `.html`/`.htm` sources through verbatim
    pub fn render_file(&self, path: &Path) -> Result<String, RenderError> {
        let contents = fs::read_to_string(path)?;
        match SourceKind::from_path(path) {
            SourceKind::Html => {
                debug!(path = %path.display(), "HTML source passed through");
                Ok(contents)
            }
            SourceKind::Markdown => self.render(&contents),
        }
    }
}
