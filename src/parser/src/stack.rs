//! The parser's two stacks.
//!
//! The input stack holds what's still to be derived, front first. The
//! working stack is the history of what's been done, so it can be undone.

use std::collections::VecDeque;

use common::Index;

use crate::{tree::Node, Symbol};

/// A symbol waiting on the input stack, with the tree node it will fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pending<'g> {
    pub(crate) symbol: &'g str,
    pub(crate) node: Index<Node<'g>>,
}

#[derive(Debug, Default)]
pub(crate) struct InputStack<'g> {
    entries: VecDeque<Pending<'g>>,
}

impl<'g> InputStack<'g> {
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn front(&self) -> Option<Pending<'g>> {
        self.entries.front().copied()
    }

    pub(crate) fn pop_front(&mut self) -> Option<Pending<'g>> {
        self.entries.pop_front()
    }

    pub(crate) fn push_front(&mut self, pending: Pending<'g>) {
        self.entries.push_front(pending);
    }

    /// Put a whole sequence on the front, keeping its order.
    pub(crate) fn prepend<I>(&mut self, sequence: I)
    where
        I: IntoIterator<Item = Pending<'g>>,
        I::IntoIter: DoubleEndedIterator,
    {
        for pending in sequence.into_iter().rev() {
            self.entries.push_front(pending);
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &'g str> + '_ {
        self.entries.iter().map(|p| p.symbol)
    }
}

/// An entry on the working stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Entry<'g> {
    /// A terminal matched against the token before the cursor.
    Matched {
        terminal: &'g str,
        node: Index<Node<'g>>,
    },

    /// A nonterminal that was expanded using its `alternative`th production.
    /// The children of `node` start at `children`, and everything from there
    /// on in the tree belongs to this attempt.
    Expanded {
        nonterminal: &'g str,
        alternative: usize,
        node: Index<Node<'g>>,
        children: Index<Node<'g>>,
    },
}

impl<'g> Entry<'g> {
    pub(crate) fn symbol(&self) -> Symbol<'g> {
        match *self {
            Entry::Matched { terminal, .. } => Symbol::Terminal(terminal),
            Entry::Expanded {
                nonterminal,
                alternative,
                ..
            } => Symbol::Nonterminal(nonterminal, alternative),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct WorkingStack<'g> {
    entries: Vec<Entry<'g>>,
}

impl<'g> WorkingStack<'g> {
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn push(&mut self, entry: Entry<'g>) {
        self.entries.push(entry);
    }

    pub(crate) fn pop(&mut self) -> Option<Entry<'g>> {
        self.entries.pop()
    }

    pub(crate) fn last(&self) -> Option<Entry<'g>> {
        self.entries.last().copied()
    }

    /// The stack from the bottom up.
    pub(crate) fn iter(&self) -> impl Iterator<Item = Symbol<'g>> + '_ {
        self.entries.iter().map(Entry::symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(symbol: &str, node: u32) -> Pending {
        Pending {
            symbol,
            node: Index::new(node),
        }
    }

    #[test]
    fn prepend_keeps_order() {
        let mut input = InputStack::default();
        input.push_front(pending("c", 2));
        input.prepend([pending("a", 3), pending("A", 4)]);

        assert_eq!(input.iter().collect::<Vec<_>>(), ["a", "A", "c"]);
        assert_eq!(input.pop_front(), Some(pending("a", 3)));
        assert_eq!(input.iter().count(), 2);
    }

    #[test]
    fn working_stack_symbols() {
        let mut working = WorkingStack::default();
        working.push(Entry::Expanded {
            nonterminal: "S",
            alternative: 1,
            node: Index::START,
            children: Index::new(1),
        });
        working.push(Entry::Matched {
            terminal: "a",
            node: Index::new(1),
        });

        assert_eq!(
            working.iter().collect::<Vec<_>>(),
            [Symbol::Nonterminal("S", 1), Symbol::Terminal("a")]
        );
        assert_eq!(
            working.last().map(|e| e.symbol()),
            Some(Symbol::Terminal("a"))
        );
        assert!(working.pop().is_some());
        assert_eq!(working.iter().count(), 1);
    }
}
