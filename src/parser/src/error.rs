//! Parser faults.
//!
//! A fault means the grammar or the parser itself is broken. An input the
//! grammar doesn't derive is not a fault, see [`Outcome`][crate::Outcome].

use diagnostic::Diagnostic;

use crate::{Action, State};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Fault {
    #[error("the grammar has no productions")]
    EmptyGrammar,

    #[error("the start symbol `{0}` is not a nonterminal")]
    StartNotNonterminal(String),

    #[error("the nonterminal `{0}` has no productions")]
    NoProductions(String),

    #[error("`{0}` is neither a terminal nor a nonterminal")]
    UndeclaredSymbol(String),

    #[error("can't {action} in the {state} state")]
    WrongState { action: Action, state: State },

    #[error("the parser already stopped in the {0} state")]
    Halted(State),

    #[error("can't {0} with nothing left to derive")]
    NothingToDerive(Action),

    #[error("can't expand the terminal `{0}`")]
    ExpandTerminal(String),

    #[error("can't advance over `{expected}`, the next token is {}", describe(.found))]
    AdvanceMismatch {
        expected: String,
        found: Option<String>,
    },

    #[error("can't succeed with symbols left to derive or tokens left over")]
    PrematureSuccess,

    #[error("can't go back over the nonterminal `{0}`")]
    BackOnNonterminal(String),

    #[error("can't try another alternative for the terminal `{0}`")]
    AnotherTryOnTerminal(String),

    #[error("there's nothing on the working stack to undo")]
    NothingToUndo,

    #[error("the input stack doesn't start with the alternative being replaced for `{0}`")]
    CorruptFrontier(String),

    #[error("the cursor can't move before the first token")]
    CursorUnderflow,

    #[error("gave up after {0} steps")]
    StepLimitExceeded(usize),
}

fn describe(found: &Option<String>) -> String {
    match found {
        Some(token) => format!("`{token}`"),
        None => String::from("the end of input"),
    }
}

impl From<Fault> for Diagnostic {
    fn from(fault: Fault) -> Self {
        let d = Diagnostic::new(fault.to_string());
        match fault {
            Fault::StepLimitExceeded(_) => {
                d.note("the grammar may be left-recursive, or the limit too low")
            }
            Fault::UndeclaredSymbol(_) | Fault::NoProductions(_) => {
                d.note("check the grammar before parsing with it")
            }
            _ => d,
        }
    }
}
