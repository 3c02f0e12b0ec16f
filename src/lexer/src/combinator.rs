//! The small steps lexing rules are made of.

use crate::Lexer;

impl<'i> Lexer<'i> {
    /// The input fed into the lexer that hasn't been broken into tokens yet.
    ///
    /// # Example
    ///
    /// ```
    /// # use lexer::{Lexer, Vocabulary};
    /// let vocabulary = Vocabulary::default();
    /// let mut lexer = Lexer::new("abc def", &vocabulary);
    /// let _abc = lexer.token();
    /// assert_eq!(lexer.remaining_input(), "def");
    /// ```
    pub fn remaining_input(&self) -> &'i str {
        &self.input[self.offset..]
    }

    /// Get the next character in the input.
    pub(crate) fn peek(&self) -> Option<char> {
        self.remaining_input().chars().next()
    }

    /// Advance the lexer by a single character.
    pub(crate) fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;

        self.location.increment(c);
        self.offset += c.len_utf8();

        Some(c)
    }

    /// Consume characters in the input while they match a predicate. Might
    /// return an empty string.
    pub(crate) fn consume_while(&mut self, predicate: impl Fn(char) -> bool) -> &'i str {
        let start = self.offset;

        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }

        &self.input[start..self.offset]
    }

    /// Consume exactly `s`, which the caller has already checked is next.
    pub(crate) fn skip(&mut self, s: &str) {
        debug_assert!(self.remaining_input().starts_with(s));

        for _ in s.chars() {
            self.advance();
        }
    }
}
