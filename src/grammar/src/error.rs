//! Grammar errors

use std::fmt;

use diagnostic::{Caret, Diagnostic};

/// Reasons a grammar can't be built or loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("`{0}` is declared as both a terminal and a nonterminal")]
    Overlap(String),

    #[error("productions given for `{0}`, which is not a declared nonterminal")]
    UnknownLeftHandSide(String),

    #[error("`{0}` has an empty alternative, but empty productions are not supported")]
    EmptyAlternative(String),

    #[error("no start symbol was given")]
    MissingStart,

    #[error("the start symbol is given more than once")]
    DuplicateStart,

    #[error("the start section must contain exactly one symbol")]
    BadStart,

    #[error("`{0}` is not a section, expected #NONTERMINALS, #TERMINALS, #START or #PRODUCTIONS")]
    UnknownSection(String),

    #[error("expected a section header before any content")]
    NoSection,

    #[error("expected `->` in a production")]
    MissingArrow,

    #[error("a production needs exactly one symbol on its left-hand side")]
    BadLeftHandSide,
}

/// An [`Error`] found while loading a grammar from text, with the line it was
/// found on when there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    pub(crate) line: Option<Caret>,
    pub(crate) error: Error,
}

impl LoadError {
    pub(crate) fn at(line: usize, error: Error) -> Self {
        LoadError {
            line: Some(Caret::line_start(line)),
            error,
        }
    }

    /// The start of the line the error was found on.
    pub fn line(&self) -> Option<Caret> {
        self.line
    }

    pub fn error(&self) -> &Error {
        &self.error
    }
}

impl From<Error> for LoadError {
    fn from(error: Error) -> Self {
        LoadError { line: None, error }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {}: {}", line.line() + 1, self.error),
            None => write!(f, "{}", self.error),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl From<LoadError> for Diagnostic {
    fn from(e: LoadError) -> Self {
        let d = Diagnostic::new(format!("invalid grammar: {}", e.error));
        match e.line {
            Some(line) => d.location(line),
            None => d,
        }
    }
}
