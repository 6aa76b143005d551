//! Inline span types: bold, italic, images and links.

use std::sync::LazyLock;

use regex::Regex;

use crate::markdown::html;

static STRONG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid strong pattern"));

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("valid image pattern"));

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link pattern"));

/// `**text**`, single line, shortest match.
pub struct Strong;

impl Strong {
    pub fn pattern() -> &'static Regex {
        &STRONG
    }

    pub const REPLACEMENT: &'static str = "<strong>${1}</strong>";
}

/// `*text*` where neither star touches another star.
pub struct Emphasis;

impl Emphasis {
    pub const MARKER: u8 = b'*';

    pub fn render(content: &str) -> String {
        format!("<em>{content}</em>")
    }
}

/// `![alt](src)`. The alt text may be empty.
pub struct Image;

impl Image {
    pub fn pattern() -> &'static Regex {
        &IMAGE
    }

    pub fn render(alt: &str, src: &str, escape: bool) -> String {
        format!(
            r#"<img src="{}" alt="{}" />"#,
            html::escape_if(src, escape),
            html::escape_if(alt, escape)
        )
    }
}

/// `[text](href)`.
pub struct Link;

impl Link {
    pub fn pattern() -> &'static Regex {
        &LINK
    }

    pub fn render(text: &str, href: &str, escape: bool) -> String {
        format!(
            r#"<a href="{}">{}</a>"#,
            html::escape_if(href, escape),
            html::escape_if(text, escape)
        )
    }
}
