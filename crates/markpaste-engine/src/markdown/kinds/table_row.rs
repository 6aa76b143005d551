use std::sync::LazyLock;

use regex::Regex;

static ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|.+\|$").expect("valid table row pattern"));

static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\|[\s\-:]+[\|\s\-:]*\|$").expect("valid table separator pattern")
});

/// Pipe table row type with owned delimiter knowledge.
///
/// All methods take a line that has already been trimmed.
pub struct TableRow;

impl TableRow {
    /// The cell delimiter.
    pub const PIPE: char = '|';

    /// A row starts and ends with a pipe and has something in between.
    pub fn is_row(trimmed: &str) -> bool {
        ROW.is_match(trimmed)
    }

    /// Header separators such as `|---|:--:|` only mark the previous row as a
    /// header; they produce no output.
    pub fn is_separator(trimmed: &str) -> bool {
        SEPARATOR.is_match(trimmed)
    }

    /// Splits a row into cells between the outer pipes.
    ///
    /// Cell text is kept as written unless `trim` is set.
    pub fn cells(trimmed: &str, trim: bool) -> Vec<String> {
        let inner = trimmed
            .strip_prefix(Self::PIPE)
            .and_then(|s| s.strip_suffix(Self::PIPE))
            .unwrap_or(trimmed);
        inner
            .split(Self::PIPE)
            .map(|cell| if trim { cell.trim() } else { cell })
            .map(str::to_string)
            .collect()
    }
}
