use std::sync::LazyLock;

use regex::Regex;

static BLOCK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(p|div|h[1-6]|li|ul|ol|blockquote|pre|br|hr)\b[^>]*>")
        .expect("block tag pattern")
});
static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));

/// Word and character counts of the visible text in an HTML document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    pub words: usize,
    /// Characters excluding whitespace.
    pub characters: usize,
}

impl TextStats {
    pub fn of_html(html: &str) -> Self {
        let text = plain_text(html);
        Self {
            words: text.split_whitespace().count(),
            characters: text.chars().filter(|c| !c.is_whitespace()).count(),
        }
    }

    /// `true` for documents with no visible text, e.g. `<p><br></p>`.
    pub fn is_blank(&self) -> bool {
        self.characters == 0
    }
}

/// Visible text of `html`, with block boundaries turned into spaces so words
/// from adjacent paragraphs are not glued together.
pub fn plain_text(html: &str) -> String {
    let spaced = BLOCK_TAG.replace_all(html, " ");
    let stripped = ANY_TAG.replace_all(&spaced, "");
    stripped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_words_across_blocks() {
        let stats = TextStats::of_html("<h1>Terms</h1><p>These <b>apply</b> to&nbsp;you.</p>");
        assert_eq!(stats.words, 5);
        assert_eq!(stats.characters, "TermsTheseapplytoyou.".len());
    }

    #[test]
    fn inline_marks_do_not_split_words() {
        assert_eq!(TextStats::of_html("<p>bo<b>ld</b></p>").words, 1);
    }

    #[test]
    fn empty_paragraph_is_blank() {
        assert!(TextStats::of_html("<p><br></p>").is_blank());
        assert!(!TextStats::of_html("<p>x</p>").is_blank());
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(plain_text("<p>A &amp; B &lt;C&gt;</p>").trim(), "A & B <C>");
    }
}
