//! The grammar model, and the read-only interface parsers use to query it.

use std::{collections::HashMap, fmt};

use crate::Production;

/// Which of the two disjoint symbol sets a symbol was declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Terminal,
    Nonterminal,
}

/// A context-free grammar.
///
/// This is immutable once built, so a single grammar can be shared by any
/// number of parses (including on other threads).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    /// Nonterminals in the order they were declared.
    pub(crate) nonterminals: Vec<String>,

    /// Terminals in the order they were declared.
    pub(crate) terminals: Vec<String>,

    pub(crate) kinds: HashMap<String, SymbolKind>,

    /// The alternatives for each nonterminal, in the order they're tried.
    pub(crate) productions: HashMap<String, Vec<Production>>,

    pub(crate) start: String,
}

impl Grammar {
    /// The symbol every derivation starts from.
    pub fn start_symbol(&self) -> &str {
        &self.start
    }

    pub fn nonterminals(&self) -> &[String] {
        &self.nonterminals
    }

    pub fn terminals(&self) -> &[String] {
        &self.terminals
    }

    /// Which set `symbol` was declared in, if it was declared at all.
    pub fn kind(&self, symbol: &str) -> Option<SymbolKind> {
        self.kinds.get(symbol).copied()
    }

    pub fn is_nonterminal(&self, symbol: &str) -> bool {
        self.kind(symbol) == Some(SymbolKind::Nonterminal)
    }

    pub fn is_terminal(&self, symbol: &str) -> bool {
        self.kind(symbol) == Some(SymbolKind::Terminal)
    }

    /// The alternatives for `nonterminal`, in the order they should be tried.
    ///
    /// This is empty if there are none, including when `nonterminal` isn't a
    /// nonterminal at all.
    pub fn productions_for(&self, nonterminal: &str) -> &[Production] {
        self.productions
            .get(nonterminal)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All the productions, grouped by nonterminal in declaration order.
    pub fn productions(&self) -> impl Iterator<Item = (&str, &Production)> {
        self.nonterminals.iter().flat_map(move |n| {
            self.productions_for(n).iter().map(move |p| (n.as_str(), p))
        })
    }

    /// The total number of productions across all nonterminals.
    pub fn production_count(&self) -> usize {
        self.productions.values().map(Vec::len).sum()
    }
}

/// Grammars display in the same format [`Grammar::load`] reads.
impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "#NONTERMINALS")?;
        writeln!(f, "{}", self.nonterminals.join(" "))?;
        writeln!(f, "#TERMINALS")?;
        writeln!(f, "{}", self.terminals.join(" "))?;
        writeln!(f, "#START")?;
        writeln!(f, "{}", self.start)?;
        writeln!(f, "#PRODUCTIONS")?;

        for nonterminal in &self.nonterminals {
            let alternatives = self.productions_for(nonterminal);
            if alternatives.is_empty() {
                continue;
            }

            let rhs: Vec<String> =
                alternatives.iter().map(Production::to_string).collect();
            writeln!(f, "{} -> {}", nonterminal, rhs.join(" | "))?;
        }

        Ok(())
    }
}
