//! Restricts editor HTML to the tags the document schema supports.
//!
//! The browser editing engine happily emits `<div>`, `<span style=...>` and
//! pasted markup from other sites. Everything leaving the editor goes through
//! `normalize_html` so stored documents only ever contain headings 1-3,
//! paragraphs, the three marks, lists, quotes, code blocks, rules and
//! `text-align`.

use std::collections::{HashMap, HashSet};

use ammonia::Builder;

const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "div", "span", "h1", "h2", "h3", "strong", "b", "em", "i", "s", "strike",
    "del", "ul", "ol", "li", "blockquote", "pre", "code", "hr",
];

/// Block tags that may carry an alignment.
const ALIGNABLE_TAGS: &[&str] = &["p", "div", "h1", "h2", "h3", "li", "blockquote"];

pub fn normalize_html(input: &str) -> String {
    let tags: HashSet<&str> = ALLOWED_TAGS.iter().copied().collect();
    let styled: HashSet<&str> = ["style"].into_iter().collect();
    let tag_attributes: HashMap<&str, HashSet<&str>> = ALIGNABLE_TAGS
        .iter()
        .map(|tag| (*tag, styled.clone()))
        .collect();
    let style_properties: HashSet<&str> = ["text-align"].into_iter().collect();

    Builder::default()
        .tags(tags)
        .tag_attributes(tag_attributes)
        .generic_attributes(HashSet::new())
        .filter_style_properties(style_properties)
        .clean(input)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_supported_formatting() {
        let html = "<h2>Scope</h2><p><b>Bold</b> and <s>gone</s></p><ul><li>one</li></ul><hr>";
        assert_eq!(normalize_html(html), html);
    }

    #[test]
    fn strips_scripts_and_unknown_attributes() {
        let html = r#"<p onclick="x()">Hi<script>alert(1)</script></p><h4>Small</h4>"#;
        assert_eq!(normalize_html(html), "<p>Hi</p>Small");
    }

    #[test]
    fn keeps_only_text_align_styles() {
        let html = r#"<p style="text-align: center; color: red">Centered</p>"#;
        let cleaned = normalize_html(html);
        assert!(cleaned.contains("text-align"));
        assert!(!cleaned.contains("color"));
        assert!(cleaned.contains("Centered"));
    }

    #[test]
    fn drops_links_but_keeps_their_text() {
        assert_eq!(
            normalize_html(r#"<p><a href="https://x.io">site</a></p>"#),
            "<p>site</p>"
        );
    }
}
