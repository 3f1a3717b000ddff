//! # u-partition
//!
//! Disjoint-set (union-find) primitives for the U-Engine ecosystem.
//!
//! This crate partitions a fixed universe of elements into disjoint sets and
//! answers "are these two in the same set?" queries. It is domain-agnostic:
//! graph connectivity, clustering, and equivalence-class bookkeeping all sit
//! on top of it elsewhere.
//!
//! ## Modules
//!
//! - [`collections`] — [`UnionFind`](collections::UnionFind) over indices and
//!   [`DisjointSetForest`](collections::DisjointSetForest) over elements
//! - [`config`] — linking policy and path compression
//! - [`error`] — [`ForestError`]
//!
//! ## Design Philosophy
//!
//! - **Plain quick union by default**: predictable representatives, the
//!   first argument of `union` keeps its root
//! - **Opt-in balancing**: union by size and path compression through
//!   [`ForestConfig`](config::ForestConfig)
//! - **Explicit randomness**: randomized linking takes the caller's RNG,
//!   there is no global or thread-local generator
//! - **Property-based testing**: partition invariants verified via proptest

pub mod collections;
pub mod config;
pub mod error;

pub use error::ForestError;
