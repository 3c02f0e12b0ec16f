//! Lexer errors

use diagnostic::{Caret, Diagnostic, Span};

/// Lexical errors with all the contextual information needed to present them
/// nicely.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown lexeme '{1}'")]
    UnknownLexeme(Span, String),

    #[error("unexpected end of input")]
    UnexpectedEOF(Caret),

    #[error("vocabulary line {} has whitespace inside a token", .0.line() + 1)]
    VocabularyWhitespace(Caret),
}

impl Error {
    pub fn span(&self) -> Span {
        match self {
            Error::UnknownLexeme(span, _) => *span,
            Error::UnexpectedEOF(caret) | Error::VocabularyWhitespace(caret) => {
                Span::new(*caret, *caret)
            }
        }
    }
}

impl From<Error> for Diagnostic {
    fn from(e: Error) -> Self {
        let d = Diagnostic::new(e.to_string()).span(e.span());

        match e {
            Error::UnknownLexeme(..) => {
                d.note("it is not an identifier, a constant, or in the vocabulary")
            }
            _ => d,
        }
    }
}
