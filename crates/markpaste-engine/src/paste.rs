//! Paste classification for the post editor.
//!
//! Decides what a paste turns into. Applying the decision to a document is
//! left to the editor.

use crate::{
    detect::{CodeDetection, has_markdown_syntax, is_code_like_with},
    markdown::{MarkdownOptions, markdown_to_html_with},
};

/// What the clipboard offered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clipboard {
    /// `text/html` payload.
    pub html: Option<String>,
    /// `text/plain` payload.
    pub text: Option<String>,
    /// At least one `image/*` item was present.
    pub has_image: bool,
}

impl Clipboard {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

/// What the editor should do with a paste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteAction {
    /// Hand the image to the uploader.
    UploadImage,
    /// Insert this HTML fragment.
    InsertHtml(String),
    /// Insert the text verbatim as a code block.
    InsertCodeBlock(String),
    /// Let the editor run its own plain-text paste.
    Default,
}

/// Settings for [`classify_paste`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteSettings {
    pub markdown: MarkdownOptions,
    pub code_detection: CodeDetection,
}

/// Decides how to handle a paste.
///
/// Images win, then non-blank HTML (inserted as is), then plain text: text
/// with markdown syntax is converted, code-like text becomes a code block,
/// and anything else falls back to the editor default.
pub fn classify_paste(clipboard: &Clipboard, settings: &PasteSettings) -> PasteAction {
    let action = decide(clipboard, settings);
    log::debug!("paste classified as {}", action.label());
    action
}

fn decide(clipboard: &Clipboard, settings: &PasteSettings) -> PasteAction {
    if clipboard.has_image {
        return PasteAction::UploadImage;
    }

    if let Some(html) = non_blank(clipboard.html.as_deref()) {
        return PasteAction::InsertHtml(html.to_string());
    }

    let Some(text) = non_blank(clipboard.text.as_deref()) else {
        return PasteAction::Default;
    };

    if has_markdown_syntax(text) {
        return PasteAction::InsertHtml(markdown_to_html_with(text, &settings.markdown));
    }

    if is_code_like_with(text, &settings.code_detection) {
        return PasteAction::InsertCodeBlock(text.to_string());
    }

    PasteAction::Default
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

impl PasteAction {
    /// Short lowercase name, used in logs and CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            PasteAction::UploadImage => "upload-image",
            PasteAction::InsertHtml(_) => "insert-html",
            PasteAction::InsertCodeBlock(_) => "insert-code-block",
            PasteAction::Default => "default",
        }
    }
}
