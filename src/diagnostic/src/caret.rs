//! Caret
//!
//! A [`Caret`] is a line and column number in plain text, i.e. where a caret is
//! in the source text.

use std::fmt;

/// A location in some input stream or document.
///
/// Carets are zero-indexed, and with the cursor before the first character. So
/// `Caret::new(0, 0)` is with the caret at the beginning of the document.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Caret {
    line: u32,
    column: u32,
}

impl Caret {
    /// Create a new [`Caret`], from a line and column number. These are
    /// 0-indexed.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// A caret at the start of the given (0-indexed) line.
    ///
    /// Grammar and vocabulary files are line-oriented, so their errors often
    /// only know which line they're on.
    pub fn line_start(line: usize) -> Self {
        Self::new(u32::try_from(line).unwrap_or(u32::MAX), 0)
    }

    /// The line the caret is on.
    pub fn line(self) -> u32 {
        self.line
    }

    /// The column of the caret.
    pub fn column(self) -> u32 {
        self.column
    }

    /// Move the caret past a character. The only character that increments the
    /// line count is `\n`, which resets the column. The `\r\n` sequence ends
    /// with the `\n` byte, so that works out too.
    ///
    /// This counts [`char`]s, not bytes and not grapheme clusters.
    pub fn increment(&mut self, c: char) {
        match c {
            '\n' => {
                self.line += 1;
                self.column = 0;
            }
            _ => self.column += 1,
        }
    }
}

impl fmt::Display for Caret {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_order() {
        let l = Caret::new(2, 200);
        let r = Caret::new(10, 100);
        assert!(l < r);
    }

    #[test]
    fn caret_newline_resets_column() {
        let mut caret = Caret::default();

        for c in "ab\ncd".chars() {
            caret.increment(c);
        }

        assert_eq!(caret, Caret::new(1, 2));
    }

    #[test]
    fn caret_display_is_one_indexed() {
        assert_eq!(Caret::new(0, 0).to_string(), "1:1");
        assert_eq!(Caret::line_start(4).to_string(), "5:1");
    }
}
