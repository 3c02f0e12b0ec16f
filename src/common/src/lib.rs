//! Common types we'll need all over the workspace which aren't specific to a
//! single crate.

mod index;

pub use index::{Get, Index};
