//! vmd - Markdown-to-HTML rendering pipeline
//!
//! The rendering core of the vmd Markdown viewer: GitHub Flavored
//! Markdown in, an HTML fragment out, with the viewer's extras applied
//! as an ordered chain of tree transformers: emoji image substitution,
//! checklist and code-block styling, heading slugs, and front matter
//! rendering (YAML, TOML, or JSON) as a table or code block.
//!
//! # Quick Start
//!
//! ```rust
//! let html = vmd::render("# Hello :tada:").unwrap();
//! assert!(html.contains("<h1 id=\"hello-tada\">"));
//! assert!(html.contains("emoji://tada"));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, build a [`Renderer`] with explicit options:
//!
//! ```rust
//! use vmd::prelude::*;
//!
//! let options = RenderOptions {
//!     front_matter_mode: FrontMatterMode::Code,
//!     front_matter_formats: vec![FrontMatterFormat::Yaml],
//! };
//! let renderer = Renderer::new(options);
//!
//! let html = renderer.render("---\ntitle: Notes\n---\n# Notes").unwrap();
//! assert!(html.contains("language-yaml"));
//! ```

pub mod core;
pub mod dom;
pub mod frontmatter;
pub mod lower;
pub mod pipeline;
pub mod render;
pub mod serialize;

pub use core::*;
pub use render::Renderer;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        FrontMatterFormat, FrontMatterMode, RenderError, RenderOptions, SourceKind,
    };
    pub use crate::dom::{Document, Element, Node};
    pub use crate::pipeline::{Pipeline, Transform};
    pub use crate::render::Renderer;
}

/// Render Markdown text to an HTML fragment with default options
///
/// This is the simplest way to run the full pipeline: all front matter
/// formats enabled, front matter rendered as a table.
///
/// # Example
/// ```rust
/// let html = vmd::render("- [x] ship it").unwrap();
/// assert!(html.contains("task-list-item"));
/// ```
pub fn render(input: &str) -> anyhow::Result<String> {
    render_with_options(input, &RenderOptions::default())
}

/// Render Markdown text with explicit options
///
/// # Example
/// ```rust
/// use vmd::{FrontMatterMode, RenderOptions};
///
/// let options = RenderOptions::with_mode(FrontMatterMode::None);
/// let html = vmd::render_with_options("---\na: 1\n---\ntext", &options).unwrap();
/// assert_eq!(html.trim(), "<p>text</p>");
/// ```
pub fn render_with_options(input: &str, options: &RenderOptions) -> anyhow::Result<String> {
    let renderer = Renderer::new(options.clone());
    Ok(renderer.render(input)?)
}
