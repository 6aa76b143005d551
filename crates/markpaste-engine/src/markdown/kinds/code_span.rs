use std::sync::LazyLock;

use regex::Regex;

use crate::markdown::html;

static CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\n]+)`").expect("valid code span pattern"));

/// Inline code span type with owned pattern.
///
/// Code spans are raw zones like fences, but stay on a single line.
pub struct CodeSpan;

impl CodeSpan {
    /// Single-line backtick span. Group 1 is the content.
    pub fn pattern() -> &'static Regex {
        &CODE_SPAN
    }

    pub fn render(code: &str, escape: bool) -> String {
        format!("<code>{}</code>", html::escape_if(code, escape))
    }
}
