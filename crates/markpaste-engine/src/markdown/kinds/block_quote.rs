/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Item pushed for a blank line inside a quote run.
    pub const EMPTY_PARAGRAPH: &'static str = "<p></p>";

    /// Returns the trimmed content of a quote line, or `None` if the trimmed
    /// line does not start with `>`.
    ///
    /// Only one prefix is stripped: `>> x` yields `> x`.
    pub fn content(trimmed: &str) -> Option<&str> {
        trimmed.strip_prefix(Self::PREFIX).map(str::trim)
    }

    /// Renders one quote line as a paragraph item.
    pub fn item(content: &str) -> String {
        if content.is_empty() {
            Self::EMPTY_PARAGRAPH.to_string()
        } else {
            format!("<p>{content}</p>")
        }
    }

    /// Wraps a finished run of items, dropping one empty paragraph at each
    /// end. Returns `None` when nothing is left.
    pub fn render(items: &[String]) -> Option<String> {
        let mut items = items;
        if let Some((first, rest)) = items.split_first()
            && first == Self::EMPTY_PARAGRAPH
        {
            items = rest;
        }
        if let Some((last, rest)) = items.split_last()
            && last == Self::EMPTY_PARAGRAPH
        {
            items = rest;
        }
        if items.is_empty() {
            return None;
        }
        Some(format!("<blockquote>{}</blockquote>", items.concat()))
    }
}
