use crate::markdown::{
    kinds::{BlockQuote, ListItem, ThematicBreak},
    protect::ProtectedSpans,
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of the block stage: each line is classified on its own,
/// first match wins in variant order. Context (an open quote or list) is the
/// builder's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Holds a code block placeholder. Carries the untrimmed line.
    CodeBlock(&'a str),
    ThematicBreak,
    /// `>` line with its trimmed content.
    Quote(&'a str),
    Blank,
    /// List item with the text after its marker.
    ListItem(&'a str),
    /// Anything else, trimmed.
    Text(&'a str),
}

/// Classifies individual lines for the block stage.
pub struct LineClassifier<'s> {
    spans: &'s ProtectedSpans,
}

impl<'s> LineClassifier<'s> {
    pub fn new(spans: &'s ProtectedSpans) -> Self {
        Self { spans }
    }

    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();

        if self.spans.is_code_block_line(trimmed) {
            return LineClass::CodeBlock(line);
        }
        if ThematicBreak::is_break(trimmed) {
            return LineClass::ThematicBreak;
        }
        if let Some(content) = BlockQuote::content(trimmed) {
            return LineClass::Quote(content);
        }
        if trimmed.is_empty() {
            return LineClass::Blank;
        }
        if let Some(content) = ListItem::content(trimmed) {
            return LineClass::ListItem(content);
        }
        LineClass::Text(trimmed)
    }
}
