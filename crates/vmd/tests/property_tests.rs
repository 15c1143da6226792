//! Property tests for the rendering pipeline

use proptest::prelude::*;
use vmd::pipeline::slug::Slugger;

proptest! {
    /// Rendering never panics, whatever the input text
    #[test]
    fn render_never_panics(input in "\\PC{0,400}") {
        let _ = vmd::render(&input);
    }

    /// Rendering is deterministic
    #[test]
    fn render_is_deterministic(input in "\\PC{0,200}") {
        let first = vmd::render(&input).unwrap();
        let second = vmd::render(&input).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Output never contains an unescaped bare ampersand from text input
    #[test]
    fn plain_text_is_escaped(word in "[a-z]{1,10}") {
        let input = format!("{} & {}", word, word);
        let html = vmd::render(&input).unwrap();
        prop_assert!(html.contains("&amp;"));
    }

    /// Slugs from one slugger never collide
    #[test]
    fn slugs_are_unique(headings in proptest::collection::vec("[a-zA-Z ]{0,30}", 1..20)) {
        let mut slugger = Slugger::new();
        let slugs: Vec<String> = headings.iter().map(|h| slugger.slug(h)).collect();
        let mut deduped = slugs.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), slugs.len());
    }

    /// Slugs contain no characters needing URL escaping
    #[test]
    fn slugs_are_url_safe(heading in "\\PC{0,50}") {
        let mut slugger = Slugger::new();
        let slug = slugger.slug(&heading);
        prop_assert!(slug.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
    }
}
