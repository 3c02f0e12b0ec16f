//! Parser states and the actions that move between them.

use std::fmt;

use serde::Serialize;

/// Where the parser is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    /// Deriving forward.
    Normal,
    /// Undoing until there's another alternative to try.
    Backtrack,
    /// The input was rejected.
    Error,
    /// The input was accepted.
    Final,
}

impl State {
    /// Is this a state the parser stops in?
    pub fn is_halted(self) -> bool {
        matches!(self, State::Error | State::Final)
    }

    pub fn name(self) -> &'static str {
        match self {
            State::Normal => "normal",
            State::Backtrack => "backtrack",
            State::Error => "error",
            State::Final => "final",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One step the parser can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Expand,
    Advance,
    MomentaryInsuccess,
    Back,
    AnotherTry,
    Success,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Action::Expand => "expand",
            Action::Advance => "advance",
            Action::MomentaryInsuccess => "momentary insuccess",
            Action::Back => "back",
            Action::AnotherTry => "another try",
            Action::Success => "success",
        }
    }

    /// The state an action has to be taken from.
    pub fn from_state(self) -> State {
        match self {
            Action::Back | Action::AnotherTry => State::Backtrack,
            _ => State::Normal,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}
