//! The symbol table, where identifiers and constants are kept.

use std::fmt;

/// Where a name lives in a [`SymbolTable`]: which bucket, and its place in
/// that bucket.
///
/// Positions display as `bucket.place`, with places counted from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    bucket: usize,
    index: usize,
}

impl Position {
    pub fn bucket(&self) -> usize {
        self.bucket
    }

    /// The place in the bucket, starting at 0.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.bucket, self.index + 1)
    }
}

/// A hash table of names with separate chaining.
///
/// Each name is stored once. A name's [`Position`] never changes once it's
/// been inserted, so it can be used as a stable code for that name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    buckets: Vec<Vec<String>>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::with_capacity(SymbolTable::DEFAULT_CAPACITY)
    }
}

impl SymbolTable {
    /// The number of buckets used by [`SymbolTable::default`].
    pub const DEFAULT_CAPACITY: usize = 10;

    /// A table with `capacity` buckets. A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        SymbolTable {
            buckets: vec![Vec::new(); capacity.max(1)],
        }
    }

    /// The number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// The number of names in the table.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Insert a name, returning its position. If it's already in the table
    /// the existing position is returned.
    pub fn insert(&mut self, name: &str) -> Position {
        let bucket = self.hash(name);

        if let Some(position) = self.find(bucket, name) {
            return position;
        }

        let chain = &mut self.buckets[bucket];
        chain.push(name.into());

        Position {
            bucket,
            index: chain.len() - 1,
        }
    }

    /// The position of `name`, if it's in the table.
    pub fn get(&self, name: &str) -> Option<Position> {
        self.find(self.hash(name), name)
    }

    /// The name at a position.
    pub fn name(&self, position: Position) -> Option<&str> {
        self.buckets
            .get(position.bucket)?
            .get(position.index)
            .map(String::as_str)
    }

    /// All the names with their positions, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &str)> {
        self.buckets.iter().enumerate().flat_map(|(bucket, chain)| {
            chain
                .iter()
                .enumerate()
                .map(move |(index, name)| (Position { bucket, index }, name.as_str()))
        })
    }

    fn find(&self, bucket: usize, name: &str) -> Option<Position> {
        self.buckets[bucket]
            .iter()
            .position(|n| n == name)
            .map(|index| Position { bucket, index })
    }

    /// The sum of the name's code points, modulo the number of buckets.
    fn hash(&self, name: &str) -> usize {
        let sum = name
            .chars()
            .fold(0usize, |sum, c| sum.wrapping_add(c as usize));
        sum % self.capacity()
    }
}

/// Only non-empty buckets are shown.
impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, chain) in self.buckets.iter().enumerate() {
            if chain.is_empty() {
                continue;
            }

            write!(f, "bucket {i}:")?;
            for (index, name) in chain.iter().enumerate() {
                write!(f, " {} ({})", name, Position { bucket: i, index })?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut table = SymbolTable::default();
        let first = table.insert("x");
        let second = table.insert("x");
        assert_eq!(first, second);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn collisions_chain() {
        // "ab" and "ba" have the same code point sum.
        let mut table = SymbolTable::default();
        let ab = table.insert("ab");
        let ba = table.insert("ba");

        assert_eq!(ab.bucket(), ba.bucket());
        assert_eq!(ab.index(), 0);
        assert_eq!(ba.index(), 1);
        assert_eq!(ba.to_string(), format!("{}.2", ba.bucket()));
        assert_eq!(table.name(ba), Some("ba"));
    }

    #[test]
    fn display_lists_buckets() {
        let mut table = SymbolTable::with_capacity(1);
        table.insert("x");
        table.insert("10");
        assert_eq!(table.to_string(), "bucket 0: x (0.1) 10 (0.2)\n");
    }

    #[test]
    fn zero_capacity() {
        let mut table = SymbolTable::with_capacity(0);
        assert_eq!(table.capacity(), 1);
        assert_eq!(table.insert("a").bucket(), 0);
    }
}
