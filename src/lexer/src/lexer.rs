//! The [`Lexer`] itself.

use diagnostic::{Caret, Span};

use crate::{Error, Token, Vocabulary};

/// A [`Lexer`] scans over a `&str` character by character and breaks it into
/// meaningful parts ([`Token`]s).
///
/// # Example
///
/// ```
/// # use lexer::{Lexer, Vocabulary};
/// let vocabulary = Vocabulary::load("+\n").unwrap();
/// let mut lexer = Lexer::new("a + b", &vocabulary);
/// while !lexer.is_empty() {
///     let _token = lexer.token();
///     // do something with token
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'i> {
    /// The input being consumed, as utf8
    pub(crate) input: &'i str,

    /// The reserved tokens.
    pub(crate) vocabulary: &'i Vocabulary,

    /// The location of the caret, as a line and column
    pub(crate) location: Caret,

    /// The location of the caret, as a byte offset
    pub(crate) offset: usize,
}

impl<'i> Lexer<'i> {
    /// Create a new lexer over some input.
    pub fn new(input: &'i str, vocabulary: &'i Vocabulary) -> Self {
        let mut lexer = Lexer {
            input,
            vocabulary,
            location: Caret::default(),
            offset: 0,
        };

        lexer.whitespace();

        lexer
    }

    /// Has the lexer consumed all of the input? Trailing whitespace doesn't
    /// count.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lexer::{Lexer, Vocabulary};
    /// let vocabulary = Vocabulary::default();
    /// assert!(Lexer::new("  \n", &vocabulary).is_empty());
    /// assert!(!Lexer::new("x", &vocabulary).is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.offset == self.input.len()
    }

    /// Produce the next token (or [`Error`]), advancing the lexer.
    ///
    /// An unknown lexeme is consumed before its error is returned, so calling
    /// this again carries on with whatever comes after it.
    ///
    /// If the lexer is empty this will return [`Error::UnexpectedEOF`] since
    /// this call _expects_ to produce a token.
    pub fn token(&mut self) -> Result<Token<'i>, Error> {
        self.whitespace();

        if self.is_empty() {
            return Err(Error::UnexpectedEOF(self.location));
        }

        let start_location = self.location;
        let start_offset = self.offset;

        let kind = self.token_kind();

        let span = Span::new(start_location, self.location);
        let body = &self.input[start_offset..self.offset];

        self.whitespace();

        match kind {
            Some(kind) => Ok(Token { kind, span, body }),
            None => Err(Error::UnknownLexeme(span, body.into())),
        }
    }

    /// Where the lexer is in the input.
    pub fn location(&self) -> Caret {
        self.location
    }
}
