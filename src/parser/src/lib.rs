//! A backtracking recursive-descent parser.
//!
//! Given a [`Grammar`] and a sequence of terminal tokens, the parser decides
//! if the grammar derives the tokens. If it does, the result is the
//! [`DerivationTree`] of the first leftmost derivation found, trying each
//! nonterminal's alternatives in the order they're declared.
//!
//! ```
//! # use grammar::Grammar;
//! let grammar = Grammar::load(
//!     "#NONTERMINALS\nS A\n#TERMINALS\na b c\n#START\nS\n\
//!      #PRODUCTIONS\nS -> A c\nA -> a A | b\n",
//! ).unwrap();
//!
//! let outcome = parser::parse(&grammar, &["a", "b", "c"]).unwrap();
//! assert_eq!(outcome.tree().unwrap().leaves(), ["a", "b", "c"]);
//!
//! let outcome = parser::parse(&grammar, &["a", "c"]).unwrap();
//! assert!(!outcome.is_accepted());
//! ```
//!
//! There are two ways things can go wrong. If the grammar doesn't derive the
//! tokens, that's an [`Outcome::Rejected`]. If the grammar itself is broken
//! (or the parser is driven into a state it can't be in) that's a [`Fault`].

mod config;
mod error;
mod observer;
mod outcome;
mod parser;
mod stack;
mod state;
mod symbol;
mod tracing;
mod tree;

use grammar::Grammar;

pub use crate::{
    config::Config,
    error::Fault,
    observer::{Observer, Trace},
    outcome::{Derivation, Outcome, Rejection},
    parser::Parser,
    state::{Action, State},
    symbol::Symbol,
    tree::{DerivationTree, Node},
};

/// Parse `tokens` with the default [`Config`].
pub fn parse<'g, S: AsRef<str>>(grammar: &'g Grammar, tokens: &[S]) -> Result<Outcome<'g>, Fault> {
    parse_with(grammar, tokens, Config::default(), &mut ())
}

/// Parse `tokens`, showing each step to `observer`.
pub fn parse_with<'g, S, O>(
    grammar: &'g Grammar,
    tokens: &[S],
    config: Config,
    observer: &mut O,
) -> Result<Outcome<'g>, Fault>
where
    S: AsRef<str>,
    O: Observer + ?Sized,
{
    Parser::new(grammar, tokens, config)?.run(observer)
}
