//! Forest configuration: linking policy and path compression.
//!
//! The default configuration reproduces plain "quick union": the second
//! argument's root is attached under the first argument's root and `find`
//! never rewrites parent pointers. Worst-case `find` is O(n) for a
//! pathological union order.
//!
//! Enabling [`Linking::BySize`] together with path compression gives the
//! classic amortized O(α(n)) bound.
//!
//! Reference: Tarjan (1975), "Efficiency of a Good but Not Linear Set Union
//! Algorithm", *J. ACM* 22(2).
//!
//! No configuration changes the partition produced by a sequence of unions.
//! Only the choice of representative and the tree height differ.

/// How two roots are linked when their sets are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Linking {
    /// The root of the second argument goes under the root of the first.
    #[default]
    Quick,
    /// The root of the smaller set goes under the root of the larger.
    /// Ties keep the first argument's root.
    BySize,
}

/// Configuration shared by [`UnionFind`](crate::collections::UnionFind) and
/// [`DisjointSetForest`](crate::collections::DisjointSetForest).
///
/// # Examples
/// ```
/// use u_partition::config::{ForestConfig, Linking};
///
/// let config = ForestConfig::new()
///     .linking(Linking::BySize)
///     .path_compression(true);
/// assert_eq!(config.linking, Linking::BySize);
/// assert!(config.path_compression);
///
/// let quick = ForestConfig::default();
/// assert_eq!(quick.linking, Linking::Quick);
/// assert!(!quick.path_compression);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ForestConfig {
    pub linking: Linking,
    pub path_compression: bool,
}

impl ForestConfig {
    /// Quick union without path compression.
    pub const fn new() -> Self {
        Self {
            linking: Linking::Quick,
            path_compression: false,
        }
    }

    /// Union by size with path compression.
    pub const fn balanced() -> Self {
        Self {
            linking: Linking::BySize,
            path_compression: true,
        }
    }

    pub const fn linking(mut self, linking: Linking) -> Self {
        self.linking = linking;
        self
    }

    pub const fn path_compression(mut self, enabled: bool) -> Self {
        self.path_compression = enabled;
        self
    }
}
