//! Building grammars in code.

use std::collections::HashMap;

use crate::{Error, Grammar, Production, SymbolKind};

/// Builds a [`Grammar`] piece by piece.
///
/// Each method checks what it can as it goes, so errors point at the call
/// that caused them.
///
/// # Example
///
/// ```
/// # use grammar::GrammarBuilder;
/// let grammar = GrammarBuilder::default()
///     .nonterminals(["S", "A"])?
///     .terminals(["a", "b", "c"])?
///     .production("S", ["A", "c"])?
///     .production("A", ["a", "A"])?
///     .production("A", ["b"])?
///     .start("S")
///     .build()?;
///
/// assert_eq!(grammar.productions_for("A").len(), 2);
/// # Ok::<(), grammar::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct GrammarBuilder {
    nonterminals: Vec<String>,
    terminals: Vec<String>,
    kinds: HashMap<String, SymbolKind>,
    productions: HashMap<String, Vec<Production>>,
    start: Option<String>,
}

impl GrammarBuilder {
    /// Declare a nonterminal. Declaring the same nonterminal twice is fine.
    pub fn nonterminal(self, name: impl Into<String>) -> Result<Self, Error> {
        self.declare(name.into(), SymbolKind::Nonterminal)
    }

    pub fn nonterminals<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Result<Self, Error> {
        for name in names {
            self = self.nonterminal(name)?;
        }
        Ok(self)
    }

    /// Declare a terminal. Declaring the same terminal twice is fine.
    pub fn terminal(self, name: impl Into<String>) -> Result<Self, Error> {
        self.declare(name.into(), SymbolKind::Terminal)
    }

    pub fn terminals<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Result<Self, Error> {
        for name in names {
            self = self.terminal(name)?;
        }
        Ok(self)
    }

    /// Add another alternative for `lhs`, after any it already has.
    ///
    /// The left-hand side must already be declared as a nonterminal. The
    /// symbols on the right aren't checked here, see [`Grammar::validate`].
    pub fn production<S: Into<String>>(
        mut self,
        lhs: &str,
        symbols: impl IntoIterator<Item = S>,
    ) -> Result<Self, Error> {
        if self.kinds.get(lhs) != Some(&SymbolKind::Nonterminal) {
            return Err(Error::UnknownLeftHandSide(lhs.into()));
        }

        let production = match Production::new(symbols) {
            Some(production) => production,
            None => return Err(Error::EmptyAlternative(lhs.into())),
        };

        self.productions
            .entry(lhs.into())
            .or_default()
            .push(production);

        Ok(self)
    }

    /// Set the start symbol.
    pub fn start(mut self, name: impl Into<String>) -> Self {
        self.start = Some(name.into());
        self
    }

    pub fn build(self) -> Result<Grammar, Error> {
        let start = self.start.ok_or(Error::MissingStart)?;

        Ok(Grammar {
            nonterminals: self.nonterminals,
            terminals: self.terminals,
            kinds: self.kinds,
            productions: self.productions,
            start,
        })
    }

    fn declare(mut self, name: String, kind: SymbolKind) -> Result<Self, Error> {
        match self.kinds.get(&name) {
            Some(existing) if *existing == kind => return Ok(self),
            Some(_) => return Err(Error::Overlap(name)),
            None => {}
        }

        match kind {
            SymbolKind::Terminal => self.terminals.push(name.clone()),
            SymbolKind::Nonterminal => self.nonterminals.push(name.clone()),
        }
        self.kinds.insert(name, kind);

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_an_error() {
        let result = GrammarBuilder::default()
            .nonterminal("S")
            .and_then(|b| b.terminal("S"));
        assert_eq!(result.unwrap_err(), Error::Overlap("S".into()));
    }

    #[test]
    fn redeclaring_is_fine() {
        let grammar = GrammarBuilder::default()
            .terminals(["a", "a"])
            .unwrap()
            .nonterminals(["S", "S"])
            .unwrap()
            .start("S")
            .build()
            .unwrap();
        assert_eq!(grammar.terminals(), ["a"]);
        assert_eq!(grammar.nonterminals(), ["S"]);
    }

    #[test]
    fn production_needs_declared_lhs() {
        let result = GrammarBuilder::default().production("S", ["a"]);
        assert_eq!(result.unwrap_err(), Error::UnknownLeftHandSide("S".into()));
    }

    #[test]
    fn empty_alternative() {
        let result = GrammarBuilder::default()
            .nonterminal("S")
            .unwrap()
            .production("S", Vec::<String>::new());
        assert_eq!(result.unwrap_err(), Error::EmptyAlternative("S".into()));
    }

    #[test]
    fn missing_start() {
        let result = GrammarBuilder::default().build();
        assert_eq!(result.unwrap_err(), Error::MissingStart);
    }

    #[test]
    fn alternatives_keep_their_order() {
        let grammar = GrammarBuilder::default()
            .nonterminal("A")
            .unwrap()
            .terminals(["a", "b"])
            .unwrap()
            .production("A", ["a", "A"])
            .unwrap()
            .production("A", ["b"])
            .unwrap()
            .start("A")
            .build()
            .unwrap();

        let alternatives = grammar.productions_for("A");
        assert!(alternatives[0].matches(&["a", "A"]));
        assert!(alternatives[1].matches(&["b"]));
        assert_eq!(grammar.production_count(), 2);
    }
}
