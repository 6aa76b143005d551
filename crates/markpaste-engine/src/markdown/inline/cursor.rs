/// A byte cursor for scanning inline text.
///
/// Only ASCII delimiters are inspected, so every index the cursor stops on
/// that holds a delimiter is also a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// The byte just before the cursor, if any.
    pub fn prev(&self) -> Option<u8> {
        self.i
            .checked_sub(1)
            .and_then(|j| self.s.as_bytes().get(j).copied())
    }

    /// Index of the next `b` at or after `from`.
    pub fn find_from(&self, from: usize, b: u8) -> Option<usize> {
        self.s
            .as_bytes()
            .get(from..)?
            .iter()
            .position(|&c| c == b)
            .map(|p| from + p)
    }

    /// Byte at an absolute index.
    pub fn byte_at(&self, j: usize) -> Option<u8> {
        self.s.as_bytes().get(j).copied()
    }

    /// Advances by one byte.
    pub fn bump(&mut self) {
        self.i += 1;
    }
}
