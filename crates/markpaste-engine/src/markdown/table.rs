use super::{kinds::TableRow, options::MarkdownOptions, protect::ProtectedSpans};

/// Collects consecutive pipe rows and emits each run as a single `<table>`
/// line. Non-table lines pass through unchanged.
pub struct TableBuilder {
    trim_cells: bool,
    rows: Vec<Vec<String>>,
    out: Vec<String>,
}

impl TableBuilder {
    pub fn new(trim_cells: bool) -> Self {
        Self {
            trim_cells,
            rows: vec![],
            out: vec![],
        }
    }

    /// Feeds one line. `is_code_block` lines always end the current run.
    pub fn push(&mut self, line: &str, is_code_block: bool) {
        let trimmed = line.trim();
        if !is_code_block && TableRow::is_row(trimmed) {
            if !TableRow::is_separator(trimmed) {
                self.rows.push(TableRow::cells(trimmed, self.trim_cells));
            }
            return;
        }
        self.flush();
        self.out.push(line.to_string());
    }

    pub fn finish(mut self) -> Vec<String> {
        // EOF flush
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        let rows = std::mem::take(&mut self.rows);
        let Some((header, body)) = rows.split_first() else {
            return;
        };
        let head = render_row(header, "th");
        let body: String = body.iter().map(|row| render_row(row, "td")).collect();
        self.out.push(format!(
            "<table><thead>{head}</thead><tbody>{body}</tbody></table>"
        ));
    }
}

fn render_row(cells: &[String], tag: &str) -> String {
    let cells: String = cells
        .iter()
        .map(|cell| format!("<{tag}>{cell}</{tag}>"))
        .collect();
    format!("<tr>{cells}</tr>")
}

/// Table stage: turns pipe-delimited row runs into HTML tables.
pub fn convert_tables(text: &str, spans: &ProtectedSpans, options: &MarkdownOptions) -> String {
    let mut builder = TableBuilder::new(options.trim_table_cells);
    for line in text.split('\n') {
        builder.push(line, spans.is_code_block_line(line));
    }
    builder.finish().join("\n")
}
