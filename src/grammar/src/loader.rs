//! Loading grammars from text.

use std::str::FromStr;

use crate::{Error, Grammar, GrammarBuilder, LoadError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Nonterminals,
    Terminals,
    Start,
    Productions,
}

impl Section {
    fn from_header(header: &str) -> Option<Section> {
        match header {
            "#NONTERMINALS" => Some(Section::Nonterminals),
            "#TERMINALS" => Some(Section::Terminals),
            "#START" => Some(Section::Start),
            "#PRODUCTIONS" => Some(Section::Productions),
            _ => None,
        }
    }
}

impl Grammar {
    /// Load a grammar from its text format.
    ///
    /// ```text
    /// // Comments start with two slashes.
    /// #NONTERMINALS
    /// S A
    /// #TERMINALS
    /// a b c
    /// #START
    /// S
    /// #PRODUCTIONS
    /// S -> A c
    /// A -> a A | b
    /// ```
    ///
    /// Symbols are separated by whitespace. Sections can come in any order and
    /// can be repeated, blank lines are ignored. Alternatives are separated by
    /// `|`, and giving the same left-hand side on another line adds more
    /// alternatives after the ones already seen.
    pub fn load(text: &str) -> Result<Grammar, LoadError> {
        let lines = sections(text)?;
        let mut builder = GrammarBuilder::default();

        for section in [Section::Nonterminals, Section::Terminals] {
            for &(n, _, line) in lines.iter().filter(|l| l.1 == section) {
                for symbol in line.split_whitespace() {
                    builder = match section {
                        Section::Nonterminals => builder.nonterminal(symbol),
                        _ => builder.terminal(symbol),
                    }
                    .map_err(|e| LoadError::at(n, e))?;
                }
            }
        }

        let mut start = None;
        for &(n, _, line) in lines.iter().filter(|l| l.1 == Section::Start) {
            let symbols: Vec<&str> = line.split_whitespace().collect();
            match (symbols.as_slice(), start) {
                ([symbol], None) => start = Some(*symbol),
                ([_], Some(_)) => return Err(LoadError::at(n, Error::DuplicateStart)),
                _ => return Err(LoadError::at(n, Error::BadStart)),
            }
        }

        if let Some(start) = start {
            builder = builder.start(start);
        }

        for &(n, _, line) in lines.iter().filter(|l| l.1 == Section::Productions) {
            builder = production(builder, line).map_err(|e| LoadError::at(n, e))?;
        }

        Ok(builder.build()?)
    }
}

impl FromStr for Grammar {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grammar::load(s)
    }
}

/// Split the text into its meaningful lines, each tagged with its (0-indexed)
/// line number and the section it's in.
fn sections(text: &str) -> Result<Vec<(usize, Section, &str)>, LoadError> {
    let mut current = None;
    let mut lines = Vec::new();

    for (n, line) in text.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        if line.starts_with('#') {
            let section = Section::from_header(line)
                .ok_or_else(|| LoadError::at(n, Error::UnknownSection(line.into())))?;
            current = Some(section);
            continue;
        }

        match current {
            Some(section) => lines.push((n, section, line)),
            None => return Err(LoadError::at(n, Error::NoSection)),
        }
    }

    Ok(lines)
}

/// A single `LHS -> s1 s2 | s3` line.
fn production(mut builder: GrammarBuilder, line: &str) -> Result<GrammarBuilder, Error> {
    let mut words = line.split_whitespace();
    let lhs: Vec<&str> = words.by_ref().take_while(|w| *w != "->").collect();

    // `take_while` ate the arrow if there was one, so check the line itself.
    if !line.split_whitespace().any(|w| w == "->") {
        return Err(Error::MissingArrow);
    }

    let lhs = match lhs.as_slice() {
        [lhs] => *lhs,
        _ => return Err(Error::BadLeftHandSide),
    };

    let rhs: Vec<&str> = words.collect();
    for alternative in rhs.split(|w| *w == "|") {
        builder = builder.production(lhs, alternative.iter().copied())?;
    }

    Ok(builder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_skip_comments_and_blanks() {
        let lines = sections("// hi\n\n#START\n  S  \n").unwrap();
        assert_eq!(lines, vec![(3, Section::Start, "S")]);
    }

    #[test]
    fn production_line() {
        let builder = GrammarBuilder::default()
            .nonterminal("A")
            .unwrap()
            .start("A");
        let grammar = production(builder, "A -> a A | b")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(grammar.productions_for("A").len(), 2);
    }

    #[test]
    fn production_line_errors() {
        let builder = || GrammarBuilder::default().nonterminal("A").unwrap();
        assert_eq!(
            production(builder(), "A a").unwrap_err(),
            Error::MissingArrow
        );
        assert_eq!(
            production(builder(), "A B -> a").unwrap_err(),
            Error::BadLeftHandSide
        );
        assert_eq!(
            production(builder(), "-> a").unwrap_err(),
            Error::BadLeftHandSide
        );
        assert_eq!(
            production(builder(), "A -> a |").unwrap_err(),
            Error::EmptyAlternative("A".into())
        );
    }
}
