//! # Tokens
//!
//! Each token is an individual lexeme, with its semantic `Kind` and the
//! context it was found in.

use diagnostic::Span;

/// An individual lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub(crate) kind: Kind,

    /// This is the `Span` of this token's body, not including any surrounding
    /// whitespace.
    pub(crate) span: Span,

    /// The body of the token as it was represented in the original input.
    pub(crate) body: &'a str,
}

impl<'a> Token<'a> {
    /// The kind of token this is.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The span of the body of this token, not including surrounding
    /// whitespace.
    pub fn span(&self) -> Span {
        self.span
    }

    /// The way the token was represented in the source.
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// The terminal a parser sees this token as.
    pub fn terminal(&self) -> &'a str {
        match self.kind {
            Kind::Reserved => self.body,
            Kind::Identifier => crate::IDENTIFIER,
            Kind::Constant => crate::NUMBER,
        }
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.body)
    }
}

/// A [`Token`]'s kind is the semantically-relevant part of the token, removed
/// from the source context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Keywords, operators and separators listed in the vocabulary.
    Reserved,
    /// Names like `foo`.
    Identifier,
    /// Integer constants like `42`.
    Constant,
}

impl Kind {
    /// The user-facing name of this kind of token.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Reserved => "reserved token",
            Kind::Identifier => "identifier",
            Kind::Constant => "constant",
        }
    }

    /// Do tokens of this kind go in the symbol table?
    pub fn is_symbol(&self) -> bool {
        !matches!(self, Kind::Reserved)
    }
}
