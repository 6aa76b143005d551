//! Small HTML helpers shared by the conversion stages.

use std::borrow::Cow;

/// Escapes `&`, `<`, `>`, `"` and `'`.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Escapes only when `enabled`, for spans whose escaping is opt-in.
pub fn escape_if(text: &str, enabled: bool) -> Cow<'_, str> {
    if enabled {
        escape(text)
    } else {
        Cow::Borrowed(text)
    }
}
