/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default for any non-blank
/// line no other block claims. Lines that an earlier stage already turned
/// into a block element pass through untouched.
pub struct Paragraph;

impl Paragraph {
    /// Prefixes of lines that are already block-level HTML.
    pub const BLOCK_TAGS: [&'static str; 6] =
        ["<h", "<pre", "<ul", "<ol", "<table", "<blockquote"];

    pub fn is_block_html(trimmed: &str) -> bool {
        Self::BLOCK_TAGS.iter().any(|tag| trimmed.starts_with(tag))
    }

    /// Wraps a trimmed line in `<p>` unless it is already block HTML.
    pub fn render(trimmed: &str) -> String {
        if Self::is_block_html(trimmed) {
            trimmed.to_string()
        } else {
            format!("<p>{trimmed}</p>")
        }
    }
}
