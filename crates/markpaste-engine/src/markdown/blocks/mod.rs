//! # Block Stage
//!
//! Two-phase line scan.
//!
//! 1. **Line Classification** (`classify`): each line gets a `LineClass` from
//!    local facts only (placeholder, rule, quote, blank, list item, text)
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps at most one
//!    open run (list or quote) and emits HTML as runs open and close
//!
//! Output has one line per input line, except that a run collapses into a
//! single line.

pub mod builder;
pub mod classify;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier};

use super::protect::ProtectedSpans;

/// Block stage: lists, quotes, rules and paragraphs.
pub fn convert_blocks(text: &str, spans: &ProtectedSpans) -> String {
    let classifier = LineClassifier::new(spans);
    let mut builder = BlockBuilder::new();

    for line in text.split('\n') {
        builder.push(classifier.classify(line));
    }

    builder.finish().join("\n")
}
