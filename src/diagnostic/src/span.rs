//! Spans - selections in source text
//!
//! A lexeme takes up some space, it's not just a point like a [`Caret`], but a
//! selection with a beginning and end.

use std::cmp::{max, min};
use std::fmt;

use crate::caret::Caret;

/// A contiguous span between two carets in a source document. The span of
/// "the" is between the `|`s in "|the|", i.e. columns 0 to 3.
#[derive(Clone, Debug, Default, Copy, Eq, Hash, PartialEq)]
pub struct Span {
    start: Caret,
    end: Caret,
}

impl Span {
    /// Return a new span over the two carets.
    ///
    /// The carets do not need to be sorted.
    pub fn new(l1: Caret, l2: Caret) -> Self {
        Self {
            start: min(l1, l2),
            end: max(l1, l2),
        }
    }

    /// Where the span starts.
    pub fn start(&self) -> Caret {
        self.start
    }

    /// Where the span ends.
    pub fn end(&self) -> Caret {
        self.end
    }

    /// Is the span contained on a single line?
    pub fn is_single_line(&self) -> bool {
        self.start.line() == self.end.line()
    }
}

impl std::ops::Add for Span {
    type Output = Self;

    /// Adding spans returns a new span which covers all of each of the spans
    /// given (and any characters in between.)
    fn add(self, other: Self) -> Self {
        Self::new(min(self.start, other.start), max(self.end, other.end))
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_caret_order() {
        let l = Caret::new(2, 200);
        let r = Caret::new(10, 100);
        assert_eq!(Span::new(l, r), Span::new(r, l));
    }

    #[test]
    fn span_add_covers_both() {
        let l = Span::new(Caret::new(2, 200), Caret::new(10, 100));
        let r = Span::new(Caret::new(0, 0), Caret::new(0, 100));
        assert_eq!(l + r, Span::new(Caret::new(0, 0), Caret::new(10, 100)))
    }

    #[test]
    fn single_line() {
        let start = Caret::new(3, 1);
        assert!(Span::new(start, Caret::new(3, 9)).is_single_line());
        assert!(!Span::new(start, Caret::new(4, 0)).is_single_line());
    }
}
