//! Productions, the right-hand sides of grammar rules.

use std::fmt;

/// One alternative for a nonterminal, a non-empty sequence of symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Production {
    symbols: Vec<String>,
}

impl Production {
    /// Create a production. Returns `None` if `symbols` is empty, since empty
    /// productions aren't supported.
    pub fn new<S: Into<String>>(symbols: impl IntoIterator<Item = S>) -> Option<Self> {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();

        if symbols.is_empty() {
            None
        } else {
            Some(Production { symbols })
        }
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// The number of symbols in the production, never zero.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// The leftmost symbol.
    pub fn first(&self) -> &str {
        &self.symbols[0]
    }

    /// Does this production produce exactly these symbols?
    pub fn matches<S: AsRef<str>>(&self, symbols: &[S]) -> bool {
        let symbols = symbols.iter().map(|s| s.as_ref());
        self.symbols.iter().map(String::as_str).eq(symbols)
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbols.join(" "))
    }
}
