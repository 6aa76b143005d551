/// ATX heading type with owned marker knowledge.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';

    /// Deepest supported heading level.
    pub const MAX_LEVEL: usize = 6;

    /// Parses `#`..`######` followed by a space at the start of `line`.
    ///
    /// Levels are tried from 6 down to 1, so `###### z` is a level 6 heading
    /// and never a shallower one. Returns the level and the rest of the line.
    pub fn parse(line: &str) -> Option<(usize, &str)> {
        (1..=Self::MAX_LEVEL).rev().find_map(|level| {
            let rest = line.strip_prefix(&Self::MARKER.to_string().repeat(level))?;
            let content = rest.strip_prefix(' ')?;
            Some((level, content))
        })
    }

    pub fn render(level: usize, content: &str) -> String {
        format!("<h{level}>{content}</h{level}>")
    }
}
