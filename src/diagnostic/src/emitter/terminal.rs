//! Pretty printing of diagnostic messages to a terminal.
//!
//! This module handles all the external libraries we need to do this (mostly)
//! right, and wraps them up in a single printer.

use std::io::{self, IsTerminal, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::{origin, Emitter, Excerpt};
use crate::{Diagnostic, InputCoordinator, Level};

/// A printer for humans at a terminal, with colour and line wrapping.
pub struct TerminalEmitter {
    out: StandardStream,
    /// The max width of the output
    width: usize,
}

impl TerminalEmitter {
    /// The default terminal width used if the actual terminal is below
    /// `MIN_WIDTH`, or we can't tell.
    pub const DEFAULT_WIDTH: usize = 80;

    /// The narrowest allowed terminal size that things will be wrapped to, any
    /// smaller and we use `DEFAULT_WIDTH` instead to maintain readability.
    pub const MIN_WIDTH: usize = 40;

    /// Prints to stderr, with colour only if stderr is a terminal.
    pub fn stderr() -> Self {
        let width = match term_size::dimensions_stderr() {
            Some((w, _)) if w >= Self::MIN_WIDTH => w,
            _ => Self::DEFAULT_WIDTH,
        };

        TerminalEmitter {
            out: StandardStream::stderr(color_choice(io::stderr().is_terminal())),
            width,
        }
    }

    fn level_spec(level: Level) -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec.set_fg(Some(match level {
            Level::Error => Color::Red,
            Level::Warning => Color::Yellow,
            Level::Note => Color::Blue,
        }));
        spec
    }

    fn dim_spec() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_dimmed(true);
        spec
    }

    /// The coloured `level: ` prefix. Returns how wide it was, so wrapped
    /// lines can be indented to match.
    fn emit_level(&mut self, level: Level) -> io::Result<usize> {
        self.out.set_color(&Self::level_spec(level))?;
        write!(self.out, "{}: ", level.name())?;
        self.out.reset()?;
        Ok(level.name().len() + ": ".len())
    }

    fn emit_message(&mut self, d: &Diagnostic, inputs: &InputCoordinator) -> io::Result<()> {
        let indent = self.emit_level(d.get_level())?;

        let text = match origin(d, inputs) {
            Some(origin) => format!("{origin} - {}", d.get_text()),
            None => d.get_text().to_owned(),
        };

        let wrap_width = self.width.saturating_sub(indent).max(Self::MIN_WIDTH / 2);
        let lines = textwrap::wrap(&text, wrap_width);

        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                write!(self.out, "{:indent$}", "")?;
            }
            writeln!(self.out, "{line}")?;
        }

        Ok(())
    }

    fn emit_excerpt(&mut self, excerpt: &Excerpt, level: Level) -> io::Result<()> {
        let gutter = excerpt.gutter();

        self.out.set_color(&Self::dim_spec())?;
        write!(self.out, "{} │ ", excerpt.line_number)?;
        self.out.reset()?;
        writeln!(self.out, "{}", excerpt.text)?;

        self.out.set_color(&Self::dim_spec())?;
        write!(self.out, "{:gutter$} │ ", "")?;
        self.out.reset()?;
        write!(self.out, "{:pad$}", "", pad = excerpt.pad)?;
        self.out.set_color(&Self::level_spec(level))?;
        writeln!(self.out, "{}", "^".repeat(excerpt.len))?;
        self.out.reset()
    }
}

/// `ColorChoice::Auto` only looks at `TERM` and `NO_COLOR`, so output going
/// anywhere but a terminal never gets colour.
fn color_choice(is_tty: bool) -> ColorChoice {
    if is_tty {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

impl Emitter for TerminalEmitter {
    fn emit(&mut self, d: &Diagnostic, inputs: &InputCoordinator) -> io::Result<()> {
        self.emit_message(d, inputs)?;

        if let Some(excerpt) = Excerpt::of(d, inputs) {
            self.emit_excerpt(&excerpt, d.get_level())?;
        }

        for note in d.get_notes() {
            self.out.set_color(&Self::level_spec(Level::Note))?;
            write!(self.out, "  note: ")?;
            self.out.reset()?;
            writeln!(self.out, "{note}")?;
        }

        self.out.flush()
    }
}
