//! End-to-end front matter rendering tests
//!
//! Covers the three formats, the three render modes, and the parse
//! error fallback through the full pipeline.

use vmd::{FrontMatterMode, RenderOptions};

fn render_with_mode(input: &str, mode: FrontMatterMode) -> String {
    vmd::render_with_options(input, &RenderOptions::with_mode(mode)).unwrap()
}

// =============================================================================
// Table mode
// =============================================================================

mod table_mode {
    use super::*;

    #[test]
    fn test_yaml_table() {
        let html = render_with_mode("---\ntitle: Doc\nversion: 2\n---\nbody", FrontMatterMode::Table);
        assert!(html.contains("<table class=\"frontmatter\">"));
        assert!(html.contains("<th align=\"center\">title</th>"));
        assert!(html.contains("<th align=\"center\">version</th>"));
        assert!(html.contains("<td align=\"center\">Doc</td>"));
        assert!(html.contains("<td align=\"center\">2</td>"));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_toml_table() {
        let html = render_with_mode("+++\nname = \"x\"\n+++\nbody", FrontMatterMode::Table);
        assert!(html.contains("<table class=\"frontmatter\">"));
        assert!(html.contains("<th align=\"center\">name</th>"));
        assert!(html.contains("<td align=\"center\">x</td>"));
    }

    #[test]
    fn test_json_table() {
        let html = render_with_mode("{\n\"a\": true\n}\nbody", FrontMatterMode::Table);
        assert!(html.contains("<table class=\"frontmatter\">"));
        assert!(html.contains("<td align=\"center\">true</td>"));
    }

    #[test]
    fn test_nested_values_become_nested_tables() {
        let input = "---\nauthor:\n  name: Ada\n  id: 1\n---\n";
        let html = render_with_mode(input, FrontMatterMode::Table);
        // Outer table holds an inner table for the map value
        assert_eq!(html.matches("<table class=\"frontmatter\">").count(), 2);
        assert!(html.contains("<th align=\"center\">name</th>"));
        assert!(html.contains("<td align=\"center\">Ada</td>"));
    }

    #[test]
    fn test_sequence_becomes_single_row_table() {
        let html = render_with_mode("---\ntags:\n  - a\n  - b\n---\n", FrontMatterMode::Table);
        assert!(html.contains("<td align=\"center\">a</td>"));
        assert!(html.contains("<td align=\"center\">b</td>"));
    }

    #[test]
    fn test_parse_error_degrades_to_code_block() {
        let html = render_with_mode("---\n{invalid yaml: [\n---\nbody", FrontMatterMode::Table);
        assert!(html.contains("class=\"language-toml\""));
        assert!(html.contains("title=\""));
        assert!(html.contains("<p>body</p>"));
    }
}

// =============================================================================
// Code and none modes
// =============================================================================

mod other_modes {
    use super::*;

    #[test]
    fn test_code_mode_tags_format() {
        let html = render_with_mode("---\ntitle: Doc\n---\n", FrontMatterMode::Code);
        assert!(html.contains("<pre><code class=\"language-yaml\">title: Doc"));
    }

    #[test]
    fn test_code_mode_toml() {
        let html = render_with_mode("+++\na = 1\n+++\n", FrontMatterMode::Code);
        assert!(html.contains("<pre><code class=\"language-toml\">a = 1"));
    }

    #[test]
    fn test_code_mode_never_parses() {
        // Invalid content is fine in code mode, it is shown verbatim
        let html = render_with_mode("---\n: : :\n---\n", FrontMatterMode::Code);
        assert!(html.contains("language-yaml"));
        assert!(!html.contains("title=\""));
    }

    #[test]
    fn test_none_mode_drops_front_matter() {
        let html = render_with_mode("---\ntitle: Doc\n---\n# Hi", FrontMatterMode::None);
        assert!(!html.contains("title"));
        assert!(html.contains("<h1 id=\"hi\">Hi</h1>"));
    }
}

// =============================================================================
// Extraction boundaries
// =============================================================================

mod extraction {
    use super::*;

    #[test]
    fn test_front_matter_only_at_document_start() {
        let html = render_with_mode("intro\n\n---\na: 1\n---\n", FrontMatterMode::Table);
        assert!(!html.contains("frontmatter"));
        // A --- line mid-document is a thematic break
        assert!(html.contains("<hr>"));
    }

    #[test]
    fn test_unclosed_front_matter_is_content() {
        let html = render_with_mode("---\ntitle: Doc\n", FrontMatterMode::Table);
        assert!(!html.contains("frontmatter"));
    }

    #[test]
    fn test_document_with_only_front_matter() {
        let html = render_with_mode("---\ntitle: Doc\n---\n", FrontMatterMode::Table);
        assert!(html.contains("<table class=\"frontmatter\">"));
        assert!(!html.contains("<p>"));
    }
}
