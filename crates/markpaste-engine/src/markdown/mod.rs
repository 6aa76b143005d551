//! # Markdown to HTML
//!
//! Best-effort conversion of loosely formatted markdown into an HTML fragment
//! that a rich-text editor can insert. Every input produces some output;
//! malformed constructs degrade to plain paragraphs.
//!
//! ## Pipeline
//!
//! Each stage reads the output of the previous one:
//!
//! 1. **Protect** (`protect`): fenced code blocks, then inline code spans, are
//!    swapped for placeholder tokens so later stages never see their content
//! 2. **Tables** (`table`): runs of `| … |` rows become one `<table>` line
//! 3. **Headings** (`heading`): `#` to `######` prefixed lines become `<h1>`-`<h6>`
//! 4. **Blocks** (`blocks`): a line scan groups lists and blockquotes into runs
//!    and wraps the remaining text lines in paragraphs
//! 5. **Inline** (`inline`): bold, italic, links and images
//! 6. **Restore**: placeholders are swapped back for their HTML
//!
//! ## Modules
//!
//! - **`kinds`**: syntax knowledge per construct (delimiters, patterns, rendering)
//! - **`options`**: `MarkdownOptions` knobs for escaping and table cell trimming
//!
//! Converting the output again is not a no-op: escaped code would be escaped
//! twice.

pub mod blocks;
pub mod heading;
pub mod html;
pub mod inline;
pub mod kinds;
pub mod options;
pub mod protect;
pub mod table;

pub use options::MarkdownOptions;
pub use protect::ProtectedSpans;

/// Converts markdown-ish text to an HTML fragment using default options.
pub fn markdown_to_html(input: &str) -> String {
    markdown_to_html_with(input, &MarkdownOptions::default())
}

/// Converts markdown-ish text to an HTML fragment.
pub fn markdown_to_html_with(input: &str, options: &MarkdownOptions) -> String {
    let input = input.replace("\r\n", "\n");
    let mut spans = ProtectedSpans::for_input(&input);

    let text = spans.extract_code_blocks(&input);
    let text = spans.extract_inline_code(&text, options);
    log::trace!(
        "protected {} code blocks and {} inline code spans",
        spans.code_block_count(),
        spans.inline_code_count()
    );

    let text = table::convert_tables(&text, &spans, options);
    let text = heading::convert_headings(&text, &spans);
    let text = blocks::convert_blocks(&text, &spans);
    let text = inline::convert_inline(&text, options);

    spans.restore(text)
}
