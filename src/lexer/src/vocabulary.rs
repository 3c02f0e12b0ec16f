//! The reserved tokens of a language.

use std::collections::BTreeSet;

use diagnostic::Caret;

use crate::Error;

/// The keywords, operators and separators a language reserves.
///
/// Anything in the vocabulary is its own terminal in the [`Pif`][crate::Pif].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    tokens: BTreeSet<String>,
}

impl Vocabulary {
    /// Load a vocabulary with one token per line. Blank lines are skipped and
    /// surrounding whitespace is ignored.
    pub fn load(text: &str) -> Result<Vocabulary, Error> {
        let mut vocabulary = Vocabulary::default();

        for (n, line) in text.lines().enumerate() {
            let token = line.trim();

            if token.is_empty() {
                continue;
            }

            if token.contains(char::is_whitespace) {
                return Err(Error::VocabularyWhitespace(Caret::line_start(n)));
            }

            vocabulary.tokens.insert(token.into());
        }

        Ok(vocabulary)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// The longest token that `text` starts with.
    pub fn longest_prefix(&self, text: &str) -> Option<&str> {
        self.iter()
            .filter(|token| text.starts_with(token))
            .max_by_key(|token| token.len())
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Vocabulary {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_skips_blanks() {
        let vocabulary = Vocabulary::load("if\n\n  +  \n").unwrap();
        assert_eq!(vocabulary.len(), 2);
        assert!(vocabulary.contains("if"));
        assert!(vocabulary.contains("+"));
    }

    #[test]
    fn load_rejects_inner_whitespace() {
        assert_eq!(
            Vocabulary::load("if\nelse if\n"),
            Err(Error::VocabularyWhitespace(Caret::new(1, 0)))
        );
    }

    #[test]
    fn longest_prefix_wins() {
        let vocabulary: Vocabulary = ["<", "<=", "="].into_iter().collect();
        assert_eq!(vocabulary.longest_prefix("<= 3"), Some("<="));
        assert_eq!(vocabulary.longest_prefix("< 3"), Some("<"));
        assert_eq!(vocabulary.longest_prefix("$"), None);
    }
}
