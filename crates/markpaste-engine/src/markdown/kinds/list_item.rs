use std::sync::LazyLock;

use regex::Regex;

static ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-*+]|[0-9]+\.)\s(.+)$").expect("valid list item pattern"));

/// List item type with owned marker knowledge.
///
/// Bullet (`-`, `*`, `+`) and numbered (`1.`) markers are both accepted and
/// both render into `<ul>`: the marker itself is discarded.
pub struct ListItem;

impl ListItem {
    /// Returns the item text after the marker and one whitespace character.
    pub fn content(trimmed: &str) -> Option<&str> {
        ITEM.captures(trimmed)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    pub fn render(content: &str) -> String {
        format!("<li>{content}</li>")
    }

    /// Wraps a finished run of rendered items.
    pub fn render_list(items: &[String]) -> String {
        format!("<ul>{}</ul>", items.concat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- item", Some("item"))]
    #[case("* item", Some("item"))]
    #[case("+ item", Some("item"))]
    #[case("1. first", Some("first"))]
    #[case("42. answer", Some("answer"))]
    #[case("-  two spaces", Some(" two spaces"))]
    #[case("-", None)]
    #[case("-item", None)]
    #[case("**bold** start", None)]
    #[case("1 two", None)]
    fn extracts_content(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(ListItem::content(line), expected);
    }

    #[test]
    fn numbered_lists_render_unordered() {
        let items = vec![ListItem::render("a"), ListItem::render("b")];
        assert_eq!(ListItem::render_list(&items), "<ul><li>a</li><li>b</li></ul>");
    }
}
