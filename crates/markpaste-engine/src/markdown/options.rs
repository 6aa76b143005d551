use serde::{Deserialize, Serialize};

/// Knobs for [`markdown_to_html_with`](super::markdown_to_html_with).
///
/// The defaults reproduce the editor's historical output. Fenced code is
/// always escaped regardless of these settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownOptions {
    /// Escape inline code text, link text/href and image alt/src.
    pub escape_inline_spans: bool,
    /// Trim whitespace around table cell content.
    pub trim_table_cells: bool,
    /// Rewrite images before links. Otherwise `![alt](src)` is caught by the
    /// link rule first and comes out as `!<a href="src">alt</a>`.
    pub images_before_links: bool,
}

impl MarkdownOptions {
    /// Options for HTML that ends up on a public page.
    pub fn strict() -> Self {
        Self {
            escape_inline_spans: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_literal_behaviour() {
        let options = MarkdownOptions::default();
        assert!(!options.escape_inline_spans);
        assert!(!options.trim_table_cells);
        assert!(!options.images_before_links);
    }

    #[test]
    fn strict_escapes_spans_only() {
        let options = MarkdownOptions::strict();
        assert!(options.escape_inline_spans);
        assert!(!options.trim_table_cells);
        assert!(!options.images_before_links);
    }
}
