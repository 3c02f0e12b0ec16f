//! Context-free grammars.
//!
//! A [`Grammar`] is a set of nonterminals, a disjoint set of terminals, an
//! ordered list of [`Production`]s for each nonterminal, and a start symbol.
//! The order of productions matters, it's the order a parser tries them in.
//!
//! Grammars are usually loaded from text (see [`Grammar::load`] for the
//! format), but can be put together in code with a [`GrammarBuilder`]. The
//! builder only enforces what's needed for the model to make sense. Things
//! like undeclared symbols are found with [`Grammar::validate`] instead, since
//! a grammar with problems can still be printed and inspected.

mod builder;
mod error;
mod grammar;
mod loader;
mod production;
mod validate;

pub use crate::{
    builder::GrammarBuilder,
    error::{Error, LoadError},
    grammar::{Grammar, SymbolKind},
    production::Production,
    validate::Problem,
};
