use std::sync::LazyLock;

use regex::Regex;

use crate::markdown::html;

static FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").expect("valid fence pattern"));

/// Fenced code block type with owned delimiter knowledge.
///
/// Fences are raw zones: their content is escaped once and never seen by any
/// later conversion stage.
pub struct CodeFence;

impl CodeFence {
    /// The triple backtick that opens and closes a fence.
    pub const DELIMITER: &'static str = "```";

    /// Non-greedy, multi-line match of a whole fence. Group 1 is the content.
    pub fn pattern() -> &'static Regex {
        &FENCE
    }

    /// Renders fence content as an escaped `<pre><code>` block.
    pub fn render(code: &str) -> String {
        format!("<pre><code>{}</code></pre>", html::escape(code))
    }
}
