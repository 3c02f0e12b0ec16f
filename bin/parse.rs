//! Parse a token sequence and print its derivation tree.

use std::path::PathBuf;

use clap::ArgGroup;
use diagnostic::{Caret, Diagnostic, InputId, Span};
use grammar::Grammar;
use lexer::SymbolTable;
use parser::{Observer, Outcome, Trace};

use crate::{lex::lex, session::Session, Args};

/// Parse a source file or a token sequence with a grammar.
#[derive(clap::Parser)]
#[clap(group(ArgGroup::new("input").required(true).args(&["source", "sequence"])))]
pub struct Parse {
    /// The grammar file.
    #[clap(long, short, value_name = "FILE")]
    grammar: PathBuf,

    /// The reserved tokens used to lex the source file, one per line.
    #[clap(long, short, value_name = "VOCAB", requires = "source")]
    tokens: Option<PathBuf>,

    /// A source file to lex and parse.
    #[clap(requires = "tokens")]
    source: Option<PathBuf>,

    /// Terminals to parse, separated by whitespace.
    #[clap(long, short, value_name = "TOKENS")]
    sequence: Option<String>,

    /// Print the outcome as JSON.
    #[clap(long)]
    json: bool,
}

/// Where each token came from.
pub(crate) struct Origin {
    pub(crate) id: InputId,
    pub(crate) spans: Vec<Span>,
}

impl Parse {
    pub(crate) fn run(&self, args: &Args) -> bool {
        let mut session = Session::new(args);
        let accepted = self.parse(&mut session, args);
        session.emit();
        accepted
    }

    fn parse(&self, session: &mut Session, args: &Args) -> bool {
        let grammar = match session.grammar(&self.grammar) {
            Some(grammar) => grammar,
            None => return false,
        };

        let (tokens, origin) = match self.tokens(session) {
            Some(input) => input,
            None => return false,
        };

        let mut observer: Box<dyn Observer> = if args.trace {
            Box::new(Trace::stderr())
        } else {
            Box::new(())
        };

        let config = args.config();
        let outcome = match parser::parse_with(&grammar, &tokens, config, observer.as_mut()) {
            Ok(outcome) => outcome,
            Err(fault) => {
                session.report(fault, None);
                return false;
            }
        };

        if self.json {
            match serde_json::to_string_pretty(&outcome) {
                Ok(json) => println!("{json}"),
                Err(e) => session.report(Diagnostic::new(format!("cannot write JSON: {e}")), None),
            }
        }

        report(session, &grammar, outcome, &origin, !self.json)
    }

    /// The tokens to parse, either lexed from the source file or given on
    /// the command line.
    fn tokens(&self, session: &mut Session) -> Option<(Vec<String>, Origin)> {
        if let Some(sequence) = &self.sequence {
            let id = session.inputs().argument_input(sequence.clone());
            let (tokens, spans) = words(sequence);
            return Some((tokens, Origin { id, spans }));
        }

        let (vocabulary, source) = (self.tokens.as_ref()?, self.source.as_ref()?);
        let mut symbols = SymbolTable::default();
        let (id, pif) = lex(session, vocabulary, source, &mut symbols)?;

        let tokens = pif.entries().iter().map(|e| e.terminal.clone()).collect();
        let spans = pif.entries().iter().map(|e| e.span).collect();

        Some((tokens, Origin { id, spans }))
    }
}

/// Print an accepted tree, or report why the input was rejected. Returns
/// whether it was accepted.
pub(crate) fn report(
    session: &mut Session,
    grammar: &Grammar,
    outcome: Outcome,
    origin: &Origin,
    print: bool,
) -> bool {
    match outcome {
        Outcome::Accepted(derivation) => {
            if print {
                println!(
                    "accepted by `{}` in {} steps",
                    grammar.start_symbol(),
                    derivation.steps()
                );
                print!("{}", derivation.tree());
            }
            true
        }

        Outcome::Rejected(rejection) => {
            let furthest = rejection.furthest();
            let d = Diagnostic::from(rejection);
            let d = match origin.spans.get(furthest) {
                Some(span) => d.span(*span),
                None => d.location(origin.spans.last().map_or_else(Caret::default, Span::end)),
            };

            session.report(d, Some(origin.id));
            false
        }
    }
}

/// Split `text` into whitespace separated words, with where each one is.
pub(crate) fn words(text: &str) -> (Vec<String>, Vec<Span>) {
    let mut words = Vec::new();
    let mut spans = Vec::new();
    let mut caret = Caret::default();
    let mut start = None;
    let mut word = String::new();

    for c in text.chars() {
        if c.is_whitespace() {
            if let Some(start) = start.take() {
                words.push(std::mem::take(&mut word));
                spans.push(Span::new(start, caret));
            }
        } else {
            start.get_or_insert(caret);
            word.push(c);
        }

        caret.increment(c);
    }

    if let Some(start) = start {
        words.push(word);
        spans.push(Span::new(start, caret));
    }

    (words, spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_and_spans() {
        let (words, spans) = words("  a bb\n c ");

        assert_eq!(words, ["a", "bb", "c"]);
        assert_eq!(spans[1], Span::new(Caret::new(0, 4), Caret::new(0, 6)));
        assert_eq!(spans[2], Span::new(Caret::new(1, 1), Caret::new(1, 2)));
    }

    #[test]
    fn no_words() {
        let (words, spans) = words(" \t ");
        assert!(words.is_empty());
        assert!(spans.is_empty());
    }
}
