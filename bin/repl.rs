//! An interactive mode.

use std::path::PathBuf;

use grammar::Grammar;
use parser::{Fault, Observer, Trace};
use rustyline::{error::ReadlineError, Editor};

use crate::{
    parse::{report, words, Origin},
    session::Session,
    Args,
};

/// Parse token sequences typed in one line at a time.
#[derive(clap::Parser)]
pub struct ReplArgs {
    /// The grammar file.
    #[clap(long, short, value_name = "FILE")]
    grammar: PathBuf,
}

impl ReplArgs {
    /// Run a repl with the given settings.
    pub(crate) fn run(&self, args: &Args) -> bool {
        let mut session = Session::new(args);

        let grammar = session.grammar(&self.grammar);
        session.emit();

        match grammar {
            Some(grammar) if !session.has_errors() => {
                Repl::new(args, session, grammar).start();
                true
            }
            _ => false,
        }
    }
}

struct Repl<'a> {
    editor: Editor<()>,
    args: &'a Args,
    session: Session,
    grammar: Grammar,
}

impl<'a> Repl<'a> {
    /// The prompt used to ask for more input.
    const PROMPT: &'static str = ">>> ";

    fn new(args: &'a Args, session: Session, grammar: Grammar) -> Self {
        Repl {
            editor: Editor::<()>::new(),
            args,
            session,
            grammar,
        }
    }

    fn start(mut self) {
        loop {
            match self.step() {
                Ok(()) => continue,
                Err(ReplError::Clear) => continue,
                Err(ReplError::Exit) => break,
                Err(ReplError::Readline(e)) => {
                    println!("{}", e);
                    println!("  (press control-d to exit)");
                }
                Err(ReplError::Fault(fault)) => {
                    self.session.report(fault, None);
                }
            }

            self.session.emit();
        }
    }

    fn step(&mut self) -> Result<(), ReplError> {
        let input = self.read()?;
        let (tokens, spans) = words(&input);

        if tokens.is_empty() {
            return Ok(());
        }

        self.editor.add_history_entry(input.as_str());
        let id = self.session.inputs().repl_input(input);

        let mut observer: Box<dyn Observer> = if self.args.trace {
            Box::new(Trace::stderr())
        } else {
            Box::new(())
        };

        let config = self.args.config();
        let outcome = parser::parse_with(&self.grammar, &tokens, config, observer.as_mut())?;

        let accepted = report(
            &mut self.session,
            &self.grammar,
            outcome,
            &Origin { id, spans },
            true,
        );
        self.session.emit();

        if accepted {
            println!();
        }

        Ok(())
    }

    fn read(&mut self) -> Result<String, ReplError> {
        match self.editor.readline(Repl::PROMPT) {
            Ok(line) => Ok(line),

            // User hit Control-C
            Err(ReadlineError::Interrupted) => Err(ReplError::Clear),

            // User hit Control-D at end of line, to exit.
            Err(ReadlineError::Eof) => Err(ReplError::Exit),

            Err(e) => Err(ReplError::Readline(e)),
        }
    }
}

#[derive(Debug)]
enum ReplError {
    Clear,
    Exit,

    Readline(ReadlineError),
    Fault(Fault),
}

impl std::error::Error for ReplError {}

impl std::fmt::Display for ReplError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplError::Clear => write!(f, "^C"),
            ReplError::Exit => write!(f, "^D"),
            ReplError::Readline(e) => write!(f, "{}", e),
            ReplError::Fault(e) => write!(f, "{}", e),
        }
    }
}

impl From<Fault> for ReplError {
    fn from(e: Fault) -> Self {
        ReplError::Fault(e)
    }
}
