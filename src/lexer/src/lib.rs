//! Lexing - converting source text into a program internal form (PIF).
//!
//! A parser only cares about which terminal each lexeme is. Keywords,
//! operators and separators are listed in a [`Vocabulary`] and stand for
//! themselves. Every other word is an identifier and every run of digits is a
//! constant; both of those are recorded in a [`SymbolTable`] and show up in the
//! [`Pif`] as the terminals [`IDENTIFIER`] and [`NUMBER`], with a reference
//! to their place in the table.
//!
//! Use [`scan`] to lex a whole input, or drive a [`Lexer`] by hand.

mod combinator;
mod error;
mod lexer;
mod pif;
mod rules;
mod symbol_table;
mod token;
mod vocabulary;

pub use crate::{
    error::Error,
    lexer::Lexer,
    pif::{Pif, PifEntry},
    symbol_table::{Position, SymbolTable},
    token::{Kind as TokenKind, Token},
    vocabulary::Vocabulary,
};

/// The terminal identifiers become in the [`Pif`].
pub const IDENTIFIER: &str = "identifier";

/// The terminal constants become in the [`Pif`].
pub const NUMBER: &str = "number";

/// Lex all of `input`, recording identifiers and constants in `symbols`.
///
/// Lexing doesn't stop at the first problem. If there are any, all of them
/// are returned, in the order they appear in the input.
///
/// # Example
///
/// ```
/// # use lexer::{scan, SymbolTable, Vocabulary};
/// let vocabulary = Vocabulary::load("let\n=\n;\n").unwrap();
/// let mut symbols = SymbolTable::default();
/// let pif = scan("let x = 10;", &vocabulary, &mut symbols).unwrap();
///
/// assert_eq!(pif.terminals(), ["let", "identifier", "=", "number", ";"]);
/// assert!(symbols.get("x").is_some());
/// ```
pub fn scan(
    input: &str,
    vocabulary: &Vocabulary,
    symbols: &mut SymbolTable,
) -> Result<Pif, Vec<Error>> {
    let mut lexer = Lexer::new(input, vocabulary);
    let mut pif = Pif::default();
    let mut errors = Vec::new();

    while !lexer.is_empty() {
        match lexer.token() {
            Ok(token) => pif.record(&token, symbols),
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(pif)
    } else {
        Err(errors)
    }
}
