use std::fmt;

use crate::input_coordinator::InputId;
use crate::level::Level;
use crate::{Caret, Span};

/// Diagnostic messages, with a few trimmings.
///
/// The ultimate purpose of these is to be shown to the user at some point. To
/// that end, the `Display` implementation here just dumps un-wrapped plain
/// text.
///
/// The interface is a little odd. Methods either use (possibly `mut`)
/// references and start with `get` or `set`, or consume `self` and return it.
/// The builder-style methods only allow setting, so they don't take an
/// [`Option`].
///
/// This is done for convenience because some information is typically added
/// when the [`Diagnostic`] is first created, and other times added later. A
/// grammar error knows its line but not which file it came from, for example.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The input the problem was found in.
    input_id: Option<InputId>,

    /// Where in the input the problem is.
    ///
    /// Not all problems have a location, for instance "file not found" can't.
    span: Option<Span>,

    level: Level,

    /// This is the primary message of the diagnostic.
    text: String,

    /// Extra lines shown after the main message.
    notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new error with only a simple description.
    ///
    /// Ideally this text would be sufficient for a familiar user to correct the
    /// issue, when combined with the input name and location.
    pub fn new(text: impl Into<String>) -> Self {
        Diagnostic {
            input_id: None,
            span: None,
            level: Level::default(),
            text: text.into(),
            notes: Vec::new(),
        }
    }

    /// Add the id of the input that caused this issue.
    pub fn input(mut self, id: InputId) -> Self {
        self.input_id = Some(id);
        self
    }

    /// The id of the input that produced this issue.
    pub fn get_input(&self) -> Option<InputId> {
        self.input_id
    }

    /// Set the id of the input that caused this issue.
    pub fn set_input(&mut self, id: Option<InputId>) {
        self.input_id = id;
    }

    /// A zero-width location where the issue is.
    pub fn location(self, location: Caret) -> Self {
        self.span(Span::new(location, location))
    }

    /// The region of the input the issue is about.
    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// The region of the input the issue is about, if it's known.
    pub fn get_span(&self) -> Option<Span> {
        self.span
    }

    /// The location where the issue starts, if it's known.
    pub fn get_location(&self) -> Option<Caret> {
        self.span.map(|s| s.start())
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn get_level(&self) -> Level {
        self.level
    }

    /// Add a note, shown after the main message.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn get_notes(&self) -> &[String] {
        &self.notes
    }

    /// Get the main diagnostic message.
    pub fn get_text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: ", self.level)?;
        if let Some(location) = self.get_location() {
            write!(f, "{location}: ")?;
        }
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_plain() {
        let d = Diagnostic::new("something broke");
        assert_eq!(d.to_string(), "error: something broke");
    }

    #[test]
    fn display_with_location() {
        let d = Diagnostic::new("missing arrow")
            .location(Caret::new(2, 0))
            .level(Level::Warning);
        assert_eq!(d.to_string(), "warning: 3:1: missing arrow");
    }
}
