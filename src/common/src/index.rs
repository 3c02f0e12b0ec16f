//! Index types.
//!
//! Instead of creating a bunch of different [newtype][0] structs for each type
//! of indexable thing, we instead use a [`Index`] struct for all of them which
//! takes a type parameter for the thing the index is for.
//!
//! The derivation tree hands these out as node identifiers, and the parser
//! keeps them on its stacks. The type checker keeps us from mixing up an index
//! into the tree with a position in the token sequence.
//!
//! Since it's a struct with [`PhantomData`], we also know it won't take up any
//! extra space to do things this way.
//!
//! [0]: https://doc.rust-lang.org/rust-by-example/generics/new_types.html

use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use serde::{Serialize, Serializer};

/// An index which refers to a specific `T` in some collection.
///
/// This is a 'newtype' wrapper since we don't want people creating new
/// arbitrary indices or carelessly doing math on them.
// NOTE: Since `derive` is a conditional impl on the generic parameters, we
//       can't really trust those to do the right thing -- since `T` doesn't
//       impact if we can compare/copy/etc. indexes.
pub struct Index<T>(u32, PhantomData<T>);

impl<T> Index<T> {
    /// Index 0, the starting index.
    pub const START: Index<T> = Index(0, PhantomData);

    /// The largest any [`Index`] can be.
    pub const MAX: usize = u32::MAX as usize;

    /// Create a new index from a u32.
    ///
    /// Try not to use this if you're not the one consuming the index later.
    #[inline(always)]
    pub const fn new(n: u32) -> Index<T> {
        Index(n, PhantomData)
    }

    /// Cast the [`Index`] into a [`usize`].
    #[inline(always)]
    pub fn as_usize(self) -> usize {
        self.0 as _
    }

    /// The next index, returns `None` if it would overflow. This _is not_
    /// checking the underlying collection to see if there's actually another
    /// element.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Index::new)
    }

    /// The previous index.
    ///
    /// However, if the index is already at 0, it returns None.
    pub fn previous(self) -> Option<Index<T>> {
        self.0.checked_sub(1).map(Index::new)
    }
}

/// Collections which can be looked up by a typed [`Index`].
pub trait Get<In, Out = In> {
    fn get(&self, index: Index<In>) -> Option<&Out>;
}

impl<T> Clone for Index<T> {
    fn clone(&self) -> Self {
        Index(self.0, PhantomData)
    }
}

impl<T> Copy for Index<T> {}

impl<T> Eq for Index<T> {}

impl<T> PartialEq for Index<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Ord for Index<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> PartialOrd for Index<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for Index<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl<T> fmt::Debug for Index<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<T> Display for Index<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<T> Serialize for Index<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

impl<T> From<Index<T>> for u32 {
    fn from(n: Index<T>) -> Self {
        n.0
    }
}

impl<T> From<Index<T>> for usize {
    fn from(n: Index<T>) -> Self {
        n.0 as usize
    }
}
