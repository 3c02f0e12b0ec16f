//! Lex a source file.

use std::path::{Path, PathBuf};

use diagnostic::InputId;
use lexer::{Pif, SymbolTable};

use crate::{session::Session, Args};

/// Lex a source file, printing its program internal form and symbol table.
#[derive(clap::Parser)]
pub struct Lex {
    /// The reserved tokens, one per line.
    #[clap(long, short, value_name = "VOCAB")]
    tokens: PathBuf,

    /// The number of buckets in the symbol table.
    #[clap(long, default_value_t = SymbolTable::DEFAULT_CAPACITY)]
    buckets: usize,

    /// The source file.
    source: PathBuf,
}

impl Lex {
    pub(crate) fn run(&self, args: &Args) -> bool {
        let mut session = Session::new(args);
        let mut symbols = SymbolTable::with_capacity(self.buckets);

        if let Some((_, pif)) = lex(&mut session, &self.tokens, &self.source, &mut symbols) {
            println!("// program internal form");
            print!("{pif}");
            println!("// symbol table");
            print!("{symbols}");
        }

        session.emit();
        !session.has_errors()
    }
}

/// Lex `source`, reporting every lexical error.
pub(crate) fn lex(
    session: &mut Session,
    vocabulary: &Path,
    source: &Path,
    symbols: &mut SymbolTable,
) -> Option<(InputId, Pif)> {
    let vocabulary = session.vocabulary(vocabulary)?;
    let (id, text) = session.read(source)?;

    match lexer::scan(&text, &vocabulary, symbols) {
        Ok(pif) => Some((id, pif)),
        Err(errors) => {
            for e in errors {
                session.report(e, Some(id));
            }
            None
        }
    }
}
