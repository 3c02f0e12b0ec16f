//! A simple, safe, ascii-focused plain-text emitter.
//!
//! This should be a safe fall-back when we don't know what the output device
//! looks like, and it's what the tests use.

use std::io::{self, Write};

use super::{origin, Emitter, Excerpt};
use crate::{Diagnostic, InputCoordinator};

pub struct PlainEmitter<W> {
    out: W,
}

impl PlainEmitter<io::Stderr> {
    pub fn stderr() -> Self {
        PlainEmitter::new(io::stderr())
    }
}

impl<W: Write> PlainEmitter<W> {
    pub fn new(out: W) -> Self {
        PlainEmitter { out }
    }

    /// Take back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Emitter for PlainEmitter<W> {
    fn emit(&mut self, d: &Diagnostic, inputs: &InputCoordinator) -> io::Result<()> {
        write!(self.out, "{}", d.get_level())?;

        match origin(d, inputs) {
            Some(origin) => writeln!(self.out, ": {origin} - {}", d.get_text())?,
            None => writeln!(self.out, ": {}", d.get_text())?,
        }

        if let Some(excerpt) = Excerpt::of(d, inputs) {
            let gutter = excerpt.gutter();
            writeln!(self.out, "{} | {}", excerpt.line_number, excerpt.text)?;
            writeln!(
                self.out,
                "{:gutter$} | {:pad$}{}",
                "",
                "",
                "^".repeat(excerpt.len),
                pad = excerpt.pad,
            )?;
        }

        for note in d.get_notes() {
            writeln!(self.out, "  note: {note}")?;
        }

        self.out.flush()
    }
}
