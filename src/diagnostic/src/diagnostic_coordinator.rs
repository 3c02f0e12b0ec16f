//! Diagnostic Coordinator handles collecting any diagnostics produced, and
//! emitting them at the right times, and in the right formats.

use std::io;

use crate::{diagnostic::Diagnostic, Emitter, InputCoordinator, Level};

#[derive(Default)]
pub struct DiagnosticCoordinator {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCoordinator {
    pub fn register(&mut self, issue: impl Into<Diagnostic>) {
        self.diagnostics.push(issue.into());
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Were any of the registered diagnostics errors?
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.get_level() == Level::Error)
    }

    /// Emit everything registered so far, sorted by input and location, and
    /// clear the list.
    pub fn emit(
        &mut self,
        emitter: &mut dyn Emitter,
        inputs: &InputCoordinator,
    ) -> io::Result<()> {
        self.diagnostics
            .sort_by_key(|d| (d.get_input(), d.get_location()));

        for d in self.diagnostics.drain(..) {
            emitter.emit(&d, inputs)?;
        }

        Ok(())
    }
}
