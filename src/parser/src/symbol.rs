//! Symbols as the working stack sees them.

use std::fmt;

use serde::Serialize;

/// A symbol on the working stack.
///
/// Terminals are tokens that were matched. Nonterminals carry the
/// alternative currently being tried, counting from 1 in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol<'g> {
    Terminal(&'g str),
    Nonterminal(&'g str, usize),
}

impl<'g> Symbol<'g> {
    pub fn name(&self) -> &'g str {
        match self {
            Symbol::Terminal(name) | Symbol::Nonterminal(name, _) => name,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    /// The alternative being tried, if this is a nonterminal.
    pub fn alternative(&self) -> Option<usize> {
        match self {
            Symbol::Terminal(_) => None,
            Symbol::Nonterminal(_, alternative) => Some(*alternative),
        }
    }
}

impl fmt::Display for Symbol<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Symbol::Terminal(name) => write!(f, "{name}"),
            Symbol::Nonterminal(name, alternative) => write!(f, "{name}#{alternative}"),
        }
    }
}
