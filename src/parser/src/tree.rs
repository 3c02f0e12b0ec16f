//! The derivation tree.
//!
//! Nodes are kept in a flat list, each pointing at its parent and at the
//! sibling to its left. A node's position in the list is its identifier, so
//! the list only ever grows at the end or gets cut back to a prefix. Any index
//! below the cut stays valid.

use std::fmt;

use common::{Get, Index};
use serde::Serialize;

/// A node in a [`DerivationTree`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node<'g> {
    symbol: &'g str,
    parent: Option<Index<Node<'g>>>,
    previous_sibling: Option<Index<Node<'g>>>,
}

impl<'g> Node<'g> {
    pub fn symbol(&self) -> &'g str {
        self.symbol
    }

    /// The node this one was expanded from. Only the root has none.
    pub fn parent(&self) -> Option<Index<Node<'g>>> {
        self.parent
    }

    /// The sibling to the left. The first child of a node has none.
    pub fn previous_sibling(&self) -> Option<Index<Node<'g>>> {
        self.previous_sibling
    }
}

/// A derivation tree, rooted at the start symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivationTree<'g> {
    nodes: Vec<Node<'g>>,
}

impl<'g> DerivationTree<'g> {
    /// The largest number of nodes a tree can hold.
    pub const MAX: usize = Index::<Node<'static>>::MAX;

    /// A new tree with only a root.
    pub fn new(root: &'g str) -> Self {
        DerivationTree {
            nodes: vec![Node {
                symbol: root,
                parent: None,
                previous_sibling: None,
            }],
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Is the tree empty? This is only possible after truncating the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node<'g>] {
        &self.nodes
    }

    pub fn root(&self) -> Option<Index<Node<'g>>> {
        (!self.is_empty()).then(|| Index::START)
    }

    /// The index the next appended node will get.
    pub fn next_index(&self) -> Index<Node<'g>> {
        index(self.len())
    }

    /// Append one node per symbol as the children of `parent`, chaining each
    /// to the one before it.
    ///
    /// # Panics
    ///
    /// This will panic if the tree would grow past [`DerivationTree::MAX`].
    pub fn append_children<I>(
        &mut self,
        parent: Index<Node<'g>>,
        symbols: I,
    ) -> Vec<Index<Node<'g>>>
    where
        I: IntoIterator<Item = &'g str>,
    {
        let mut added = Vec::new();
        let mut previous_sibling = None;

        for symbol in symbols {
            if self.len() + 1 >= DerivationTree::MAX {
                panic!("derivation tree overflow")
            }

            let node = self.next_index();
            self.nodes.push(Node {
                symbol,
                parent: Some(parent),
                previous_sibling,
            });

            previous_sibling = Some(node);
            added.push(node);
        }

        added
    }

    /// Drop every node at or after `first`.
    pub fn truncate_from(&mut self, first: Index<Node<'g>>) {
        self.nodes.truncate(first.as_usize());
    }

    pub fn parent(&self, node: Index<Node<'g>>) -> Option<Index<Node<'g>>> {
        self.get(node).and_then(Node::parent)
    }

    /// The children of `node`, left to right.
    pub fn children(&self, node: Index<Node<'g>>) -> Vec<Index<Node<'g>>> {
        // Siblings are always appended together, so index order is left to
        // right order.
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.parent == Some(node))
            .map(|(i, _)| index(i))
            .collect()
    }

    /// The leaves of the tree, read left to right.
    pub fn leaves(&self) -> Vec<&'g str> {
        let mut children: Vec<Vec<Index<Node<'g>>>> = vec![Vec::new(); self.len()];
        for (i, node) in self.nodes.iter().enumerate() {
            if let Some(parent) = node.parent {
                children[parent.as_usize()].push(index(i));
            }
        }

        let mut leaves = Vec::new();
        let mut work: Vec<Index<Node<'g>>> = self.root().into_iter().collect();

        while let Some(node) = work.pop() {
            let below = &children[node.as_usize()];
            if below.is_empty() {
                leaves.push(self.nodes[node.as_usize()].symbol);
            } else {
                work.extend(below.iter().rev());
            }
        }

        leaves
    }
}

impl<'g> Get<Node<'g>> for DerivationTree<'g> {
    fn get(&self, index: Index<Node<'g>>) -> Option<&Node<'g>> {
        self.nodes.get(index.as_usize())
    }
}

fn index<'g>(n: usize) -> Index<Node<'g>> {
    Index::new(n as u32)
}

impl fmt::Display for DerivationTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self
            .nodes
            .iter()
            .map(|n| n.symbol.len())
            .chain(["symbol".len()])
            .max()
            .unwrap_or_default();

        write!(f, "{:>5}  {:<width$}  ", "node", "symbol")?;
        writeln!(f, "{:>6}  {:>7}", "parent", "sibling")?;

        for (i, node) in self.nodes.iter().enumerate() {
            let parent = node.parent.map_or(String::from("-"), |p| p.to_string());
            let sibling = node
                .previous_sibling
                .map_or(String::from("-"), |s| s.to_string());

            writeln!(
                f,
                "{:>5}  {:<width$}  {:>6}  {:>7}",
                i, node.symbol, parent, sibling
            )?;
        }

        Ok(())
    }
}
