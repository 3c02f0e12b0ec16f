//! Inputs and diagnostics for one run of a subcommand.

use std::{fs, path::Path};

use diagnostic::{
    Diagnostic, DiagnosticCoordinator, Emitter, InputCoordinator, InputId, PlainEmitter,
    TerminalEmitter,
};
use grammar::Grammar;
use lexer::Vocabulary;

use crate::Args;

pub(crate) struct Session {
    inputs: InputCoordinator,
    diagnostics: DiagnosticCoordinator,
    plain: bool,
}

impl Session {
    pub(crate) fn new(args: &Args) -> Self {
        Session {
            inputs: InputCoordinator::default(),
            diagnostics: DiagnosticCoordinator::default(),
            plain: args.plain,
        }
    }

    pub(crate) fn inputs(&mut self) -> &mut InputCoordinator {
        &mut self.inputs
    }

    /// Read a file, keeping it around for diagnostics to point into.
    pub(crate) fn read(&mut self, path: &Path) -> Option<(InputId, String)> {
        match fs::read_to_string(path) {
            Ok(text) => {
                let id = self.inputs.file_input(text.clone(), path.into());
                Some((id, text))
            }
            Err(e) => {
                self.report(
                    Diagnostic::new(format!("cannot read '{}': {}", path.display(), e)),
                    None,
                );
                None
            }
        }
    }

    /// Load a grammar file. Warnings about the grammar are reported, but
    /// the grammar is still returned.
    pub(crate) fn grammar(&mut self, path: &Path) -> Option<Grammar> {
        let (id, text) = self.read(path)?;

        let grammar = match Grammar::load(&text) {
            Ok(grammar) => grammar,
            Err(e) => {
                self.report(e, Some(id));
                return None;
            }
        };

        for problem in grammar.validate().into_iter().filter(|p| !p.is_error()) {
            self.report(problem, Some(id));
        }

        Some(grammar)
    }

    pub(crate) fn vocabulary(&mut self, path: &Path) -> Option<Vocabulary> {
        let (id, text) = self.read(path)?;

        match Vocabulary::load(&text) {
            Ok(vocabulary) => Some(vocabulary),
            Err(e) => {
                self.report(e, Some(id));
                None
            }
        }
    }

    /// Register a diagnostic about the input `id`.
    pub(crate) fn report(&mut self, issue: impl Into<Diagnostic>, id: Option<InputId>) {
        let mut d = issue.into();
        if id.is_some() {
            d.set_input(id);
        }
        self.diagnostics.register(d);
    }

    pub(crate) fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    /// Emit everything reported so far.
    pub(crate) fn emit(&mut self) {
        let mut emitter: Box<dyn Emitter> = if self.plain {
            Box::new(PlainEmitter::stderr())
        } else {
            Box::new(TerminalEmitter::stderr())
        };

        if let Err(e) = self.diagnostics.emit(emitter.as_mut(), &self.inputs) {
            eprintln!("error: cannot write diagnostics: {e}");
        }
    }
}
