//! rdparse - a backtracking recursive-descent parser

use clap::Parser;

mod lex;
mod parse;
mod repl;
mod session;
mod show;

/// Check token sequences against context-free grammars.
#[derive(clap::Parser)]
#[clap(version, author, about)]
pub struct Args {
    /// Print every step the parser takes to stderr.
    #[clap(long, global = true)]
    trace: bool,

    /// Give up on a parse after this many steps.
    #[clap(long, global = true, value_name = "N")]
    step_limit: Option<usize>,

    /// Print diagnostics without color or line art.
    #[clap(long, global = true)]
    plain: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Grammar(show::Show),
    Lex(lex::Lex),
    Parse(parse::Parse),
    Repl(repl::ReplArgs),
}

impl Args {
    /// The parser options the flags ask for.
    pub(crate) fn config(&self) -> parser::Config {
        match self.step_limit {
            Some(limit) => parser::Config::default().step_limit(limit),
            None => parser::Config::default(),
        }
    }
}

fn main() {
    let args = Args::parse();

    let ok = match &args.command {
        Command::Grammar(show) => show.run(&args),
        Command::Lex(lex) => lex.run(&args),
        Command::Parse(parse) => parse.run(&args),
        Command::Repl(repl) => repl.run(&args),
    };

    if !ok {
        std::process::exit(1);
    }
}
