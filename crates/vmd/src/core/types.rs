//! Core type definitions for the rendering pipeline
//!
//! This module contains the fundamental option types used throughout vmd:
//! front matter modes and formats, render options, and source kinds.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::core::error::RenderError;

/// How extracted front matter is rendered into the document
///
/// Mirrors the viewer's `frontmatter.renderer` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum FrontMatterMode {
    /// Drop the front matter entirely
    None,
    /// Emit the raw front matter as a fenced code block tagged with its format
    Code,
    /// Convert the parsed front matter into a key/value table
    #[default]
    Table,
}

impl FrontMatterMode {
    /// Get all valid mode names
    pub fn variants() -> &'static [&'static str] {
        &["none", "code", "table"]
    }
}

impl fmt::Display for FrontMatterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontMatterMode::None => write!(f, "none"),
            FrontMatterMode::Code => write!(f, "code"),
            FrontMatterMode::Table => write!(f, "table"),
        }
    }
}

impl FromStr for FrontMatterMode {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(FrontMatterMode::None),
            "code" => Ok(FrontMatterMode::Code),
            "table" => Ok(FrontMatterMode::Table),
            _ => Err(RenderError::unknown_mode(s)),
        }
    }
}

/// Front matter formats recognized at the top of a document
///
/// YAML is fenced by `---` lines, TOML by `+++` lines, and JSON by a
/// lone `{` line and a lone `}` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrontMatterFormat {
    Yaml,
    Toml,
    Json,
}

impl FrontMatterFormat {
    /// All supported formats, in detection order
    pub fn all() -> &'static [FrontMatterFormat] {
        &[
            FrontMatterFormat::Yaml,
            FrontMatterFormat::Toml,
            FrontMatterFormat::Json,
        ]
    }

    /// The name used for code-block language tags and CLI flags
    pub fn name(&self) -> &'static str {
        match self {
            FrontMatterFormat::Yaml => "yaml",
            FrontMatterFormat::Toml => "toml",
            FrontMatterFormat::Json => "json",
        }
    }

    /// Fence markers for this format: opening line and closing line
    pub fn fences(&self) -> (&'static str, &'static str) {
        match self {
            FrontMatterFormat::Yaml => ("---", "---"),
            FrontMatterFormat::Toml => ("+++", "+++"),
            FrontMatterFormat::Json => ("{", "}"),
        }
    }

    /// Parse a comma-separated format list, e.g. `"yaml,toml"`
    ///
    /// Whitespace around entries is ignored and matching is
    /// case-insensitive. Empty entries are rejected.
    pub fn parse_list(s: &str) -> Result<Vec<FrontMatterFormat>, RenderError> {
        s.split(',')
            .map(|entry| entry.trim().parse())
            .collect()
    }
}

impl fmt::Display for FrontMatterFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FrontMatterFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" => Ok(FrontMatterFormat::Yaml),
            "toml" => Ok(FrontMatterFormat::Toml),
            "json" => Ok(FrontMatterFormat::Json),
            _ => Err(RenderError::unknown_format(s)),
        }
    }
}

/// Options controlling a render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// How front matter is rendered
    pub front_matter_mode: FrontMatterMode,
    /// Which front matter formats are recognized
    pub front_matter_formats: Vec<FrontMatterFormat>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            front_matter_mode: FrontMatterMode::default(),
            front_matter_formats: FrontMatterFormat::all().to_vec(),
        }
    }
}

impl RenderOptions {
    /// Create options with a specific front matter mode, all formats enabled
    pub fn with_mode(mode: FrontMatterMode) -> Self {
        Self {
            front_matter_mode: mode,
            ..Self::default()
        }
    }

    /// Returns true if the given format is enabled
    pub fn format_enabled(&self, format: FrontMatterFormat) -> bool {
        self.front_matter_formats.contains(&format)
    }
}

/// Kind of source document, decided from the file extension
///
/// The viewer renders `.html`/`.htm` files verbatim instead of running
/// them through the Markdown pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum SourceKind {
    #[default]
    Markdown,
    Html,
}

impl SourceKind {
    /// Decide the source kind from a file path
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm") => {
                SourceKind::Html
            }
            _ => SourceKind::Markdown,
        }
    }

    /// Returns true if this source is raw HTML
    pub fn is_html(&self) -> bool {
        matches!(self, SourceKind::Html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_mode_parsing() {
        assert_eq!(
            "none".parse::<FrontMatterMode>().unwrap(),
            FrontMatterMode::None
        );
        assert_eq!(
            "CODE".parse::<FrontMatterMode>().unwrap(),
            FrontMatterMode::Code
        );
        assert_eq!(
            "table".parse::<FrontMatterMode>().unwrap(),
            FrontMatterMode::Table
        );
        assert!("fancy".parse::<FrontMatterMode>().is_err());
    }

    #[test]
    fn test_mode_display_round_trip() {
        for name in FrontMatterMode::variants() {
            let mode: FrontMatterMode = name.parse().unwrap();
            assert_eq!(&mode.to_string(), name);
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(
            "yaml".parse::<FrontMatterFormat>().unwrap(),
            FrontMatterFormat::Yaml
        );
        assert_eq!(
            "TOML".parse::<FrontMatterFormat>().unwrap(),
            FrontMatterFormat::Toml
        );
        assert!("ini".parse::<FrontMatterFormat>().is_err());
    }

    #[test]
    fn test_format_fences() {
        assert_eq!(FrontMatterFormat::Yaml.fences(), ("---", "---"));
        assert_eq!(FrontMatterFormat::Toml.fences(), ("+++", "+++"));
        assert_eq!(FrontMatterFormat::Json.fences(), ("{", "}"));
    }

    #[test]
    fn test_format_list_parsing() {
        let formats = FrontMatterFormat::parse_list("yaml, toml,json").unwrap();
        assert_eq!(
            formats,
            vec![
                FrontMatterFormat::Yaml,
                FrontMatterFormat::Toml,
                FrontMatterFormat::Json
            ]
        );
        assert!(FrontMatterFormat::parse_list("yaml,,toml").is_err());
        assert!(FrontMatterFormat::parse_list("yaml,ini").is_err());
    }

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.front_matter_mode, FrontMatterMode::Table);
        assert!(options.format_enabled(FrontMatterFormat::Yaml));
        assert!(options.format_enabled(FrontMatterFormat::Toml));
        assert!(options.format_enabled(FrontMatterFormat::Json));
    }

    #[test]
    fn test_source_kind_from_path() {
        assert_eq!(
            SourceKind::from_path(&PathBuf::from("README.md")),
            SourceKind::Markdown
        );
        assert_eq!(
            SourceKind::from_path(&PathBuf::from("page.html")),
            SourceKind::Html
        );
        assert_eq!(
            SourceKind::from_path(&PathBuf::from("page.HTM")),
            SourceKind::Html
        );
        assert_eq!(
            SourceKind::from_path(&PathBuf::from("notes")),
            SourceKind::Markdown
        );
    }
}
