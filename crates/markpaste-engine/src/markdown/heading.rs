use super::{kinds::Heading, protect::ProtectedSpans};

/// Heading stage: `#`-prefixed lines become `<h1>`-`<h6>`.
///
/// Lines holding a code block placeholder are left alone even when they look
/// like headings.
pub fn convert_headings(text: &str, spans: &ProtectedSpans) -> String {
    text.split('\n')
        .map(|line| match Heading::parse(line) {
            Some((level, content)) if !spans.is_code_block_line(content) => {
                Heading::render(level, content)
            }
            _ => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
