//! The rules of the lexical grammar

use unicode_xid::UnicodeXID;

use crate::{Lexer, TokenKind};

impl Lexer<'_> {
    /// This is the main entry point into the lexer internals. It dispatches to
    /// smaller handlers for words and punctuation.
    ///
    /// Returns `None` for a lexeme that isn't anything, after consuming it.
    pub(crate) fn token_kind(&mut self) -> Option<TokenKind> {
        match self.peek()? {
            c if is_identifier_continue(c) => self.word(),
            _ => self.punctuation(),
        }
    }

    /// Whitespace is discarded, which is why this doesn't return anything.
    ///
    /// ```text
    /// Whitespace := (Unicode's `White_Space`)*
    /// ```
    pub(crate) fn whitespace(&mut self) {
        self.consume_while(char::is_whitespace);
    }

    /// A word is any reserved word, identifier or constant.
    ///
    /// ```text
    /// Word       := XID_Continue+
    /// Identifier := (XID_Start | `_`) XID_Continue*
    /// Constant   := [0-9]+
    /// ```
    ///
    /// Words which are in the vocabulary are reserved, even if they'd
    /// otherwise be constants. Anything else, like `12ab`, is unknown.
    fn word(&mut self) -> Option<TokenKind> {
        let word = self.consume_while(is_identifier_continue);

        if self.vocabulary.contains(word) {
            Some(TokenKind::Reserved)
        } else if word.chars().all(|c| c.is_ascii_digit()) {
            Some(TokenKind::Constant)
        } else if word.starts_with(is_identifier_start) {
            Some(TokenKind::Identifier)
        } else {
            None
        }
    }

    /// Operators and separators, which must be in the vocabulary. The longest
    /// one that matches wins, so `<=` is never lexed as `<` then `=`.
    ///
    /// A character that doesn't start anything in the vocabulary is consumed
    /// on its own.
    fn punctuation(&mut self) -> Option<TokenKind> {
        let vocabulary = self.vocabulary;

        match vocabulary.longest_prefix(self.remaining_input()) {
            Some(reserved) => {
                self.skip(reserved);
                Some(TokenKind::Reserved)
            }
            None => {
                self.advance();
                None
            }
        }
    }
}

/// Is a character a valid beginning to an identifier, i.e.
/// [`is_xid_start`][UnicodeXID::is_xid_start] or an underscore?
fn is_identifier_start(c: char) -> bool {
    c == '_' || UnicodeXID::is_xid_start(c)
}

/// Is a character valid inside a word, i.e.
/// [`is_xid_continue`][UnicodeXID::is_xid_continue]?
fn is_identifier_continue(c: char) -> bool {
    UnicodeXID::is_xid_continue(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_characters() {
        assert!(is_identifier_start('_'));
        assert!(is_identifier_start('é'));
        assert!(!is_identifier_start('1'));
        assert!(is_identifier_continue('1'));
        assert!(!is_identifier_continue('+'));
    }
}
