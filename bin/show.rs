//! Load a grammar and show it.

use std::path::PathBuf;

use crate::{session::Session, Args};

/// Load a grammar, print it back and check it for problems.
#[derive(clap::Parser)]
pub struct Show {
    /// The grammar file.
    grammar: PathBuf,
}

impl Show {
    pub(crate) fn run(&self, args: &Args) -> bool {
        let mut session = Session::new(args);

        if let Some(grammar) = session.grammar(&self.grammar) {
            print!("{grammar}");
            println!(
                "// {} nonterminals, {} terminals, {} productions",
                grammar.nonterminals().len(),
                grammar.terminals().len(),
                grammar.production_count(),
            );

            // Warnings were already reported when it was loaded.
            for problem in grammar.validate().into_iter().filter(|p| p.is_error()) {
                session.report(problem, None);
            }
        }

        session.emit();
        !session.has_errors()
    }
}
