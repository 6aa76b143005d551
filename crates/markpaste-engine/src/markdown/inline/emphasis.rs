use super::cursor::Cursor;
use crate::markdown::kinds::Emphasis;

/// Rewrites `*text*` as `<em>text</em>`.
///
/// An opening star must not follow another star, the content must be at
/// least one non-star byte, and the closing star must not be followed by a
/// star. Content may span lines. When a candidate fails, scanning resumes one
/// byte later. Bold has already been rewritten by the time this runs, so
/// leftover double stars are literal and stay untouched.
pub fn replace_emphasis(s: &str) -> String {
    let mut cur = Cursor::new(s);
    let mut out = String::with_capacity(s.len());
    let mut copied = 0;

    while !cur.eof() {
        if cur.peek() == Some(Emphasis::MARKER)
            && cur.prev() != Some(Emphasis::MARKER)
            && let Some(close) = cur.find_from(cur.i + 1, Emphasis::MARKER)
            && close > cur.i + 1
            && cur.byte_at(close + 1) != Some(Emphasis::MARKER)
        {
            out.push_str(&s[copied..cur.i]);
            out.push_str(&Emphasis::render(&s[cur.i + 1..close]));
            cur.i = close + 1;
            copied = cur.i;
            continue;
        }
        cur.bump();
    }

    out.push_str(&s[copied..]);
    out
}
