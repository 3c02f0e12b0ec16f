//! Watching a parse step by step.

use std::io::{self, Write};

use crate::{Action, Parser};

/// Something which is shown every step a [`Parser`] takes, right after it's
/// taken. Observers only get to look, they can't change how a parse goes.
pub trait Observer {
    fn observe(&mut self, action: Action, parser: &Parser);
}

/// Don't watch.
impl Observer for () {
    fn observe(&mut self, _: Action, _: &Parser) {}
}

/// An [`Observer`] which writes a line for every step.
///
/// Write errors are ignored, a trace isn't worth failing a parse over.
#[derive(Debug)]
pub struct Trace<W> {
    out: W,
}

impl<W: Write> Trace<W> {
    pub fn new(out: W) -> Self {
        Trace { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Trace<io::Stderr> {
    pub fn stderr() -> Self {
        Trace::new(io::stderr())
    }
}

impl<W: Write> Observer for Trace<W> {
    fn observe(&mut self, action: Action, parser: &Parser) {
        let _ = writeln!(self.out, "{:>6} {:<20} {}", parser.steps(), action, parser);
    }
}
