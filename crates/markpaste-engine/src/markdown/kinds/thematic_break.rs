use std::sync::LazyLock;

use regex::Regex;

static RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*_]{3,}$").expect("valid thematic break pattern"));

/// Horizontal rule (`---`, `***`, `___`).
pub struct ThematicBreak;

impl ThematicBreak {
    pub const HTML: &'static str = "<hr />";

    /// Three or more of `-`, `*`, `_` and nothing else. Characters may mix.
    pub fn is_break(trimmed: &str) -> bool {
        RULE.is_match(trimmed)
    }
}
