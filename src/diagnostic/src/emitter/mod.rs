//! Emitters present [`Diagnostic`]s to the user.

mod plain;
mod terminal;

use std::io;

use unicode_width::UnicodeWidthStr;

use crate::{Diagnostic, InputCoordinator};

pub use self::{plain::PlainEmitter, terminal::TerminalEmitter};

/// An [`Emitter`] wraps up the ways you can output diagnostics.
pub trait Emitter {
    /// Emits the diagnostic, presenting it to the user/consumer.
    fn emit(
        &mut self,
        diagnostic: &Diagnostic,
        inputs: &InputCoordinator,
    ) -> io::Result<()>;
}

/// The `name:line:column` part of the message header, if there's anything to
/// put there.
pub(crate) fn origin(d: &Diagnostic, inputs: &InputCoordinator) -> Option<String> {
    let name = d.get_input().and_then(|id| inputs.get_input_name(id));

    match (name, d.get_location()) {
        (None, None) => None,
        (None, Some(l)) => Some(format!("{l}")),
        (Some(n), None) => Some(n),
        (Some(n), Some(l)) => Some(format!("{n}:{l}")),
    }
}

/// The line of source a diagnostic points at, and where to underline it.
pub(crate) struct Excerpt<'a> {
    /// 1-indexed, as shown to the user.
    pub(crate) line_number: u32,
    pub(crate) text: &'a str,
    /// Display columns before the underline starts.
    pub(crate) pad: usize,
    /// Display columns to underline, at least one.
    pub(crate) len: usize,
}

impl<'a> Excerpt<'a> {
    pub(crate) fn of(d: &Diagnostic, inputs: &'a InputCoordinator) -> Option<Self> {
        let span = d.get_span()?;
        let start = span.start();
        let text = inputs.get_line(d.get_input()?, start.line())?;

        let before: String = text.chars().take(start.column() as usize).collect();
        let len = if span.is_single_line() {
            let selected: String = text
                .chars()
                .skip(start.column() as usize)
                .take((span.end().column() - start.column()) as usize)
                .collect();
            selected.width()
        } else {
            0
        };

        Some(Excerpt {
            line_number: start.line() + 1,
            text,
            pad: before.width(),
            len: len.max(1),
        })
    }

    /// Width of the gutter holding the line number.
    pub(crate) fn gutter(&self) -> usize {
        self.line_number.to_string().len()
    }
}
