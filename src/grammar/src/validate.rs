//! Checking a grammar is something a parser can use.

use std::collections::HashSet;

use diagnostic::{Diagnostic, Level};

use crate::Grammar;

/// Something wrong (or suspicious) about a [`Grammar`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Problem {
    #[error("the start symbol `{0}` is not a declared nonterminal")]
    StartNotNonterminal(String),

    #[error("the nonterminal `{0}` has no productions")]
    NoProductions(String),

    #[error("`{symbol}` is used in a production for `{lhs}` but is not declared")]
    UndeclaredSymbol { lhs: String, symbol: String },

    #[error("the nonterminal `{0}` can't be reached from the start symbol")]
    Unreachable(String),

    #[error("the nonterminal `{0}` is left-recursive, parsing may never finish")]
    LeftRecursive(String),
}

impl Problem {
    /// Errors make the grammar unusable, the rest are only worth a warning.
    pub fn is_error(&self) -> bool {
        !matches!(self, Problem::Unreachable(_) | Problem::LeftRecursive(_))
    }
}

impl From<Problem> for Diagnostic {
    fn from(p: Problem) -> Self {
        let level = if p.is_error() { Level::Error } else { Level::Warning };
        Diagnostic::new(p.to_string()).level(level)
    }
}

impl Grammar {
    /// Check the grammar for problems. An empty list means it's a valid
    /// context-free grammar with no surprises.
    ///
    /// Problems are reported in a stable order: the start symbol first, then
    /// each nonterminal's problems in declaration order.
    pub fn validate(&self) -> Vec<Problem> {
        let mut problems = Vec::new();

        if !self.is_nonterminal(self.start_symbol()) {
            problems.push(Problem::StartNotNonterminal(self.start.clone()));
        }

        for nonterminal in &self.nonterminals {
            let alternatives = self.productions_for(nonterminal);

            if alternatives.is_empty() {
                problems.push(Problem::NoProductions(nonterminal.clone()));
            }

            for symbol in alternatives.iter().flat_map(|p| p.symbols()) {
                if self.kind(symbol).is_none() {
                    problems.push(Problem::UndeclaredSymbol {
                        lhs: nonterminal.clone(),
                        symbol: symbol.clone(),
                    });
                }
            }
        }

        if self.is_nonterminal(self.start_symbol()) {
            let reachable = self.reachable();
            for nonterminal in &self.nonterminals {
                if !reachable.contains(nonterminal.as_str()) {
                    problems.push(Problem::Unreachable(nonterminal.clone()));
                }
            }
        }

        for nonterminal in &self.nonterminals {
            if self.is_left_recursive(nonterminal) {
                problems.push(Problem::LeftRecursive(nonterminal.clone()));
            }
        }

        problems
    }

    /// Is the grammar free of errors? Warnings are allowed.
    pub fn is_valid(&self) -> bool {
        self.validate().iter().all(|p| !p.is_error())
    }

    /// The nonterminals reachable from the start symbol.
    fn reachable(&self) -> HashSet<&str> {
        let mut seen = HashSet::new();
        let mut work = vec![self.start_symbol()];

        while let Some(nonterminal) = work.pop() {
            if !seen.insert(nonterminal) {
                continue;
            }

            for production in self.productions_for(nonterminal) {
                for symbol in production.symbols() {
                    if self.is_nonterminal(symbol) && !seen.contains(symbol.as_str()) {
                        work.push(symbol);
                    }
                }
            }
        }

        seen
    }

    /// Can `nonterminal` derive a sentential form that starts with itself?
    ///
    /// Since productions are never empty, only the leftmost symbol of each
    /// production matters.
    fn is_left_recursive(&self, nonterminal: &str) -> bool {
        let mut seen = HashSet::new();
        let mut work: Vec<&str> = self
            .productions_for(nonterminal)
            .iter()
            .map(|p| p.first())
            .collect();

        while let Some(symbol) = work.pop() {
            if symbol == nonterminal {
                return true;
            }

            if !self.is_nonterminal(symbol) || !seen.insert(symbol) {
                continue;
            }

            work.extend(self.productions_for(symbol).iter().map(|p| p.first()));
        }

        false
    }
}
