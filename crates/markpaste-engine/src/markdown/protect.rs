use regex::Captures;

use super::{
    kinds::{CodeFence, CodeSpan},
    options::MarkdownOptions,
};

/// The two kinds of content hidden from the structural stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    CodeBlock,
    InlineCode,
}

impl SpanKind {
    fn tag(self) -> &'static str {
        match self {
            SpanKind::CodeBlock => "CODEBLOCK",
            SpanKind::InlineCode => "INLINECODE",
        }
    }
}

/// Per-call table of protected spans and their placeholder tokens.
///
/// Tokens look like `__CODEBLOCK_3__`. If the input contains a salted tag
/// (`CODEBLOCK`, `INLINECODE`) anywhere, the salt grows until neither tag
/// appears. Checking the bare tag rather than the full `__TAG_` prefix keeps
/// substituted tokens from completing a prefix with the text around them
/// (`__CODEBLOCK` + `` `_` ``). Nothing here is shared between calls.
#[derive(Debug, Default)]
pub struct ProtectedSpans {
    salt: String,
    code_blocks: Vec<String>,
    inline_codes: Vec<String>,
}

impl ProtectedSpans {
    pub fn for_input(input: &str) -> Self {
        let mut salt = String::new();
        while [SpanKind::CodeBlock, SpanKind::InlineCode]
            .iter()
            .any(|&kind| input.contains(&format!("{salt}{}", kind.tag())))
        {
            salt.push('X');
        }
        Self {
            salt,
            ..Self::default()
        }
    }

    fn prefix_with(salt: &str, kind: SpanKind) -> String {
        format!("__{salt}{}_", kind.tag())
    }

    /// The token prefix shared by every placeholder of `kind`.
    pub fn prefix(&self, kind: SpanKind) -> String {
        Self::prefix_with(&self.salt, kind)
    }

    /// The placeholder token for the `index`-th span of `kind`.
    pub fn token(&self, kind: SpanKind, index: usize) -> String {
        format!("{}{index}__", self.prefix(kind))
    }

    /// Whether `line` carries a fenced code block placeholder.
    ///
    /// Such lines are never reinterpreted by the table, heading or block
    /// stages.
    pub fn is_code_block_line(&self, line: &str) -> bool {
        line.contains(&self.prefix(SpanKind::CodeBlock))
    }

    pub fn code_block_count(&self) -> usize {
        self.code_blocks.len()
    }

    pub fn inline_code_count(&self) -> usize {
        self.inline_codes.len()
    }

    fn push(&mut self, kind: SpanKind, html: String) -> String {
        let list = match kind {
            SpanKind::CodeBlock => &mut self.code_blocks,
            SpanKind::InlineCode => &mut self.inline_codes,
        };
        list.push(html);
        let index = list.len() - 1;
        self.token(kind, index)
    }

    /// Replaces every fenced code block with a placeholder. Fence content is
    /// escaped before it is stored.
    pub fn extract_code_blocks(&mut self, text: &str) -> String {
        CodeFence::pattern()
            .replace_all(text, |caps: &Captures<'_>| {
                self.push(SpanKind::CodeBlock, CodeFence::render(&caps[1]))
            })
            .into_owned()
    }

    /// Replaces every single-line code span with a placeholder.
    pub fn extract_inline_code(&mut self, text: &str, options: &MarkdownOptions) -> String {
        CodeSpan::pattern()
            .replace_all(text, |caps: &Captures<'_>| {
                self.push(
                    SpanKind::InlineCode,
                    CodeSpan::render(&caps[1], options.escape_inline_spans),
                )
            })
            .into_owned()
    }

    /// Swaps placeholders back for their HTML in ascending index order.
    ///
    /// Inline code goes first: a code span may have swallowed a fence token,
    /// while fence content can never hold an inline token.
    pub fn restore(&self, mut text: String) -> String {
        for (kind, list) in [
            (SpanKind::InlineCode, &self.inline_codes),
            (SpanKind::CodeBlock, &self.code_blocks),
        ] {
            for (index, html) in list.iter().enumerate() {
                text = text.replacen(&self.token(kind, index), html, 1);
            }
        }
        text
    }
}
