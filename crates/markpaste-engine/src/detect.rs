//! # Content Detection
//!
//! Two cheap checks used when plain text is pasted into the editor:
//!
//! - [`has_markdown_syntax`]: does the text carry any markdown signature?
//! - [`is_code_like`]: does text *without* markdown look like source code?
//!
//! The code check is a fixed-weight score, not a trained classifier. Weights
//! and the threshold live in [`CodeDetection`] so they can be tuned from the
//! config file.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::markdown::kinds::CodeFence;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid detection pattern")
}

/// Markdown signatures. Any single hit counts.
static MARKDOWN_SIGNATURES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?m)^#{1,6}\s",
        r"(?m)^\s*[-*+]\s",
        r"(?m)^\s*[0-9]+\.\s",
        r"!\[.*?\]\(.*?\)",
        r"\[.*?\]\(.*?\)",
        r"\*\*.*?\*\*",
        r"\*.*?\*",
        r"`.*?`",
        // Quote and rule only count at the very start / as the whole text.
        r"\A>",
        r"\A[-*_]{3,}\z",
    ]
    .into_iter()
    .map(compile)
    .collect()
});

/// Word boundaries are ASCII-only: a keyword right after `é` still counts.
static KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?-u:\b)(const|let|var|function|class|import|export|return|async|await|if|else|for|while)(?-u:\b)",
    )
});

static INDENTED_LINE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^\s{2,}"));

static BRACKETS: LazyLock<Regex> = LazyLock::new(|| compile(r"[{}\[\]();]"));

static OPERATORS: LazyLock<Regex> = LazyLock::new(|| compile(r"=>|===|!==|\+\+|--"));

/// Returns true if `text` contains any markdown signature: heading marker,
/// fence, bullet or numbered list marker, image, link, bold, italic, inline
/// code, a leading `>`, or a text that is exactly a horizontal rule.
pub fn has_markdown_syntax(text: &str) -> bool {
    text.contains(CodeFence::DELIMITER) || MARKDOWN_SIGNATURES.iter().any(|re| re.is_match(text))
}

/// Weights and limits for the code-likeness score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeDetection {
    /// Texts with fewer characters than this are never code.
    pub min_length: usize,
    /// Score at or above which text is code.
    pub threshold: u32,
    /// A language keyword such as `const` or `return`.
    pub keyword_weight: u32,
    /// Some line starts with two or more whitespace characters.
    pub indentation_weight: u32,
    /// Brackets together with a semicolon.
    pub punctuation_weight: u32,
    /// `=>`, `===`, `!==`, `++` or `--`.
    pub operator_weight: u32,
    /// Two or more newlines.
    pub multiline_weight: u32,
}

impl Default for CodeDetection {
    fn default() -> Self {
        Self {
            min_length: 10,
            threshold: 5,
            keyword_weight: 3,
            indentation_weight: 2,
            punctuation_weight: 2,
            operator_weight: 2,
            multiline_weight: 1,
        }
    }
}

/// Sums the weights of every code signal present in `text`.
pub fn code_score(text: &str, weights: &CodeDetection) -> u32 {
    let mut score = 0;

    if KEYWORDS.is_match(text) {
        score += weights.keyword_weight;
    }
    if INDENTED_LINE.is_match(text) {
        score += weights.indentation_weight;
    }
    if BRACKETS.is_match(text) && text.contains(';') {
        score += weights.punctuation_weight;
    }
    if OPERATORS.is_match(text) {
        score += weights.operator_weight;
    }
    if text.matches('\n').count() >= 2 {
        score += weights.multiline_weight;
    }

    score
}

/// Default-weighted [`is_code_like_with`].
pub fn is_code_like(text: &str) -> bool {
    is_code_like_with(text, &CodeDetection::default())
}

/// Whether pasted text should become a code block.
///
/// Short text and text with markdown syntax are never code.
pub fn is_code_like_with(text: &str, weights: &CodeDetection) -> bool {
    if text.chars().count() < weights.min_length {
        return false;
    }
    if has_markdown_syntax(text) {
        return false;
    }

    let score = code_score(text, weights);
    log::debug!("code score {score} (threshold {})", weights.threshold);
    score >= weights.threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("# Heading")]
    #[case("text\n## Sub")]
    #[case("before ```code``` after")]
    #[case("- item")]
    #[case("   * indented bullet")]
    #[case("1. first")]
    #[case("![alt](pic.png)")]
    #[case("a [link](url) here")]
    #[case("**bold**")]
    #[case("an *italic* word")]
    #[case("run `cargo`")]
    #[case("> quoted")]
    #[case("---")]
    fn detects_markdown(#[case] text: &str) {
        assert!(has_markdown_syntax(text), "{text:?}");
    }

    #[rstest]
    #[case("just some words")]
    #[case("#hashtag")]
    #[case("text\n> not at start")]
    #[case("---\nmore")]
    #[case("x = a - b;")]
    fn rejects_plain_text(#[case] text: &str) {
        assert!(!has_markdown_syntax(text), "{text:?}");
    }

    #[test]
    fn scores_each_signal() {
        let weights = CodeDetection::default();
        assert_eq!(code_score("return x", &weights), 3);
        assert_eq!(code_score("a\n  b", &weights), 2);
        assert_eq!(code_score("f(x);", &weights), 2);
        assert_eq!(code_score("a => b", &weights), 2);
        assert_eq!(code_score("a\nb\nc", &weights), 1);
        assert_eq!(code_score("plain words", &weights), 0);
    }

    #[test]
    fn semicolon_counts_as_bracket_combination() {
        assert_eq!(code_score("a; b", &CodeDetection::default()), 2);
    }

    #[test]
    fn keyword_must_be_a_whole_word() {
        assert_eq!(code_score("constant letter", &CodeDetection::default()), 0);
    }

    #[rstest]
    #[case("éreturn x", 3)]
    #[case("return\u{e9} x", 3)]
    #[case("_return x", 0)]
    fn keyword_boundaries_are_ascii(#[case] text: &str, #[case] expected: u32) {
        assert_eq!(code_score(text, &CodeDetection::default()), expected);
    }

    #[test]
    fn javascript_snippet_is_code() {
        let snippet = "function add(a, b) {\n  return a + b;\n}\n";
        assert!(is_code_like(snippet));
    }

    #[test]
    fn prose_is_not_code() {
        assert!(!is_code_like("I went for a walk and then had some lunch."));
    }

    #[test]
    fn short_text_is_never_code() {
        assert!(!is_code_like("x++;"));
    }

    #[test]
    fn markdown_is_never_code() {
        let text = "const x = 1;\n  let y = x++;\n- item";
        assert!(!is_code_like(text));
    }

    #[test]
    fn threshold_is_configurable() {
        let text = "return value";
        assert!(!is_code_like(text));
        let lenient = CodeDetection {
            threshold: 3,
            ..CodeDetection::default()
        };
        assert!(is_code_like_with(text, &lenient));
    }

    #[test]
    fn min_length_counts_characters() {
        let weights = CodeDetection {
            min_length: 4,
            threshold: 0,
            ..CodeDetection::default()
        };
        assert!(!is_code_like_with("äöü", &weights));
        assert!(is_code_like_with("äöüß", &weights));
    }

    #[test]
    fn score_is_deterministic() {
        let text = "if (a === b) {\n  run();\n}";
        let weights = CodeDetection::default();
        let first = code_score(text, &weights);
        for _ in 0..10 {
            assert_eq!(code_score(text, &weights), first);
        }
        assert_eq!(first, 3 + 2 + 2 + 2 + 1);
    }
}
