//! The program internal form, what a parser reads.

use std::fmt;

use diagnostic::Span;

use crate::{Position, SymbolTable, Token};

/// One lexeme as the parser sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PifEntry {
    /// The terminal this lexeme is, e.g. `if` or [`IDENTIFIER`][crate::IDENTIFIER].
    pub terminal: String,

    /// Where an identifier or constant is in the symbol table.
    pub position: Option<Position>,

    /// Where in the source the lexeme was.
    pub span: Span,
}

/// The program internal form: every lexeme of a program, in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Pif {
    entries: Vec<PifEntry>,
}

impl Pif {
    /// Add a token to the end, putting it in the symbol table if it belongs
    /// there.
    pub fn record(&mut self, token: &Token, symbols: &mut SymbolTable) {
        let position = if token.kind().is_symbol() {
            Some(symbols.insert(token.body()))
        } else {
            None
        };

        self.entries.push(PifEntry {
            terminal: token.terminal().into(),
            position,
            span: token.span(),
        });
    }

    pub fn entries(&self) -> &[PifEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The token sequence a parser consumes.
    pub fn terminals(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.terminal.as_str()).collect()
    }
}

/// One entry per line, `terminal` or `terminal position`.
impl fmt::Display for Pif {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for entry in &self.entries {
            match entry.position {
                Some(position) => writeln!(f, "{} {}", entry.terminal, position)?,
                None => writeln!(f, "{}", entry.terminal)?,
            }
        }

        Ok(())
    }
}
