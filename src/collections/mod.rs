//! Partition data structures.
//!
//! - [`UnionFind`] — disjoint-set forest over the dense indices `0..n`
//! - [`DisjointSetForest`] — disjoint-set forest over arbitrary hashable
//!   elements, built on [`UnionFind`]

mod forest;
mod union_find;

pub use forest::DisjointSetForest;
pub use union_find::UnionFind;
