pub mod detect;
pub mod markdown;
pub mod paste;

// Re-export key types for easier usage
pub use detect::{CodeDetection, code_score, has_markdown_syntax, is_code_like, is_code_like_with};
pub use markdown::{MarkdownOptions, markdown_to_html, markdown_to_html_with};
pub use paste::{Clipboard, PasteAction, PasteSettings, classify_paste};
