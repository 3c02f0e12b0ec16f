//! What a parse ends with.

use std::fmt;

use diagnostic::Diagnostic;
use serde::Serialize;

use crate::DerivationTree;

/// The result of a parse which ran to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome<'g> {
    Accepted(Derivation<'g>),
    Rejected(Rejection),
}

impl<'g> Outcome<'g> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }

    pub fn tree(&self) -> Option<&DerivationTree<'g>> {
        match self {
            Outcome::Accepted(derivation) => Some(derivation.tree()),
            Outcome::Rejected(_) => None,
        }
    }

    pub fn steps(&self) -> usize {
        match self {
            Outcome::Accepted(derivation) => derivation.steps,
            Outcome::Rejected(rejection) => rejection.steps,
        }
    }
}

/// An accepted input's derivation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Derivation<'g> {
    pub(crate) tree: DerivationTree<'g>,
    pub(crate) steps: usize,
}

impl<'g> Derivation<'g> {
    pub fn tree(&self) -> &DerivationTree<'g> {
        &self.tree
    }

    pub fn into_tree(self) -> DerivationTree<'g> {
        self.tree
    }

    /// The number of steps it took to find.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

/// Why an input was rejected, as far as the parser can tell.
///
/// The furthest position is the most tokens any attempted derivation matched.
/// The terminals that were expected there are usually the best guess at what's
/// wrong with the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub(crate) first_exhausted: Option<String>,
    pub(crate) furthest: usize,
    pub(crate) found: Option<String>,
    pub(crate) expected: Vec<String>,
    pub(crate) steps: usize,
}

impl Rejection {
    /// The first nonterminal to run out of alternatives.
    pub fn first_exhausted(&self) -> Option<&str> {
        self.first_exhausted.as_deref()
    }

    /// The position of the furthest token reached.
    pub fn furthest(&self) -> usize {
        self.furthest
    }

    /// The token at the furthest position, or `None` at the end of input.
    pub fn found(&self) -> Option<&str> {
        self.found.as_deref()
    }

    /// The terminals that were tried at the furthest position, in the order
    /// they were tried.
    pub fn expected(&self) -> &[String] {
        &self.expected
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.found {
            Some(token) => write!(f, "unexpected `{token}` at token {}", self.furthest + 1)?,
            None => write!(f, "unexpected end of input")?,
        }

        match self.expected.as_slice() {
            [] => Ok(()),
            [only] => write!(f, ", expected `{only}`"),
            many => {
                let many: Vec<String> = many.iter().map(|t| format!("`{t}`")).collect();
                write!(f, ", expected one of {}", many.join(", "))
            }
        }
    }
}

impl From<Rejection> for Diagnostic {
    fn from(rejection: Rejection) -> Self {
        let d = Diagnostic::new(format!("rejected: {rejection}"));
        match rejection.first_exhausted {
            Some(nonterminal) => d.note(format!(
                "`{nonterminal}` was the first nonterminal to run out of alternatives"
            )),
            None => d,
        }
    }
}
