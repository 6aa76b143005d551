use crate::markdown::kinds::{BlockQuote, ListItem, Paragraph, ThematicBreak};

use super::classify::LineClass;

/// The run currently being accumulated. Lists and quotes never overlap.
#[derive(Debug, Default)]
enum RunState {
    #[default]
    None,
    List(Vec<String>),
    Quote(Vec<String>),
}

/// Phase 2 of the block stage: a line-at-a-time state machine that groups
/// list and quote runs and emits one output line per input line or run.
#[derive(Debug, Default)]
pub struct BlockBuilder {
    run: RunState,
    out: Vec<String>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, class: LineClass<'_>) {
        match class {
            LineClass::CodeBlock(line) => {
                self.flush_run();
                self.out.push(line.to_string());
            }
            LineClass::ThematicBreak => {
                self.flush_run();
                self.out.push(ThematicBreak::HTML.to_string());
            }
            LineClass::Quote(content) => self.push_quote_item(content),
            // A blank line inside a quote keeps the quote open.
            LineClass::Blank if self.in_quote() => self.push_quote_item(""),
            LineClass::ListItem(content) => self.push_list_item(content),
            LineClass::Blank => {
                self.flush_run();
                self.out.push(String::new());
            }
            LineClass::Text(text) => {
                self.flush_run();
                self.out.push(Paragraph::render(text));
            }
        }
    }

    pub fn finish(mut self) -> Vec<String> {
        // EOF flush
        self.flush_run();
        self.out
    }

    fn in_quote(&self) -> bool {
        matches!(self.run, RunState::Quote(_))
    }

    fn push_quote_item(&mut self, content: &str) {
        if !self.in_quote() {
            self.flush_run();
            self.run = RunState::Quote(vec![]);
        }
        if let RunState::Quote(items) = &mut self.run {
            let item = BlockQuote::item(content);
            // Consecutive blank lines collapse into one empty paragraph.
            let repeated_blank = item == BlockQuote::EMPTY_PARAGRAPH
                && items.last().is_some_and(|last| last == BlockQuote::EMPTY_PARAGRAPH);
            if !repeated_blank {
                items.push(item);
            }
        }
    }

    fn push_list_item(&mut self, content: &str) {
        if !matches!(self.run, RunState::List(_)) {
            self.flush_run();
            self.run = RunState::List(vec![]);
        }
        if let RunState::List(items) = &mut self.run {
            items.push(ListItem::render(content));
        }
    }

    fn flush_run(&mut self) {
        match std::mem::take(&mut self.run) {
            RunState::None => {}
            RunState::List(items) => self.out.push(ListItem::render_list(&items)),
            RunState::Quote(items) => {
                if let Some(html) = BlockQuote::render(&items) {
                    self.out.push(html);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn build(classes: Vec<LineClass<'_>>) -> Vec<String> {
        let mut builder = BlockBuilder::new();
        for class in classes {
            builder.push(class);
        }
        builder.finish()
    }

    #[test]
    fn list_run_is_flushed_at_eof() {
        assert_eq!(
            build(vec![LineClass::ListItem("a"), LineClass::ListItem("b")]),
            vec!["<ul><li>a</li><li>b</li></ul>"]
        );
    }

    #[test]
    fn quote_interrupts_list() {
        assert_eq!(
            build(vec![
                LineClass::ListItem("item"),
                LineClass::Quote("quote"),
                LineClass::ListItem("item2"),
            ]),
            vec![
                "<ul><li>item</li></ul>",
                "<blockquote><p>quote</p></blockquote>",
                "<ul><li>item2</li></ul>",
            ]
        );
    }

    #[test]
    fn blank_lines_inside_quote_collapse() {
        assert_eq!(
            build(vec![
                LineClass::Quote("a"),
                LineClass::Blank,
                LineClass::Blank,
                LineClass::Quote(""),
                LineClass::Quote("b"),
            ]),
            vec!["<blockquote><p>a</p><p></p><p>b</p></blockquote>"]
        );
    }

    #[test]
    fn trailing_blank_stays_inside_quote() {
        assert_eq!(
            build(vec![
                LineClass::Quote("a"),
                LineClass::Blank,
                LineClass::Text("after"),
            ]),
            vec!["<blockquote><p>a</p></blockquote>", "<p>after</p>"]
        );
    }

    #[test]
    fn empty_quote_emits_nothing() {
        assert_eq!(
            build(vec![LineClass::Quote(""), LineClass::Text("x")]),
            vec!["<p>x</p>"]
        );
    }

    #[test]
    fn blank_line_ends_list() {
        assert_eq!(
            build(vec![
                LineClass::ListItem("a"),
                LineClass::Blank,
                LineClass::ListItem("b"),
            ]),
            vec!["<ul><li>a</li></ul>", "", "<ul><li>b</li></ul>"]
        );
    }

    #[test]
    fn rule_and_placeholder_flush_runs() {
        assert_eq!(
            build(vec![
                LineClass::ListItem("a"),
                LineClass::ThematicBreak,
                LineClass::Quote("q"),
                LineClass::CodeBlock("__CODEBLOCK_0__"),
            ]),
            vec![
                "<ul><li>a</li></ul>",
                "<hr />",
                "<blockquote><p>q</p></blockquote>",
                "__CODEBLOCK_0__",
            ]
        );
    }
}
