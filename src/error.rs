//! Error type for element-level forest operations.

/// Failures surfaced by [`DisjointSetForest`](crate::collections::DisjointSetForest).
///
/// Both variants are programmer errors: they are returned immediately and
/// the forest is left exactly as it was before the call.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ForestError {
    /// The element was not part of the universe the forest was built from.
    #[error("element is not part of the forest's universe")]
    KeyNotFound,
    /// The construction sequence contained the same element twice.
    #[error("duplicate element at positions {first} and {second}")]
    DuplicateElement { first: usize, second: usize },
}
