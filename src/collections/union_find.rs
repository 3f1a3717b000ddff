//! Index-level disjoint-set forest over `0..n`.
//!
//! Maintains a collection of disjoint sets over elements `0..n` as a forest
//! of parent pointers. A node is a root when it is its own parent.
//!
//! # Algorithm
//!
//! Linking and path compression are chosen through [`ForestConfig`]:
//!
//! - **Quick union** (default): `union(x, y)` attaches the root of `y` under
//!   the root of `x`. `find` walks parents without rewriting them, so a
//!   degenerate union order can produce a chain of height `n − 1`.
//! - **Union by size** with **path compression**: amortized O(α(n)) per
//!   operation, where α is the inverse Ackermann function.
//!
//! `find` is iterative, so tall trees never grow the call stack.
//!
//! # References
//!
//! - Galler & Fischer (1964), "An Improved Equivalence Algorithm"
//! - Tarjan & van Leeuwen (1984), "Worst-Case Analysis of Set Union Algorithms"

use rand::Rng;

use crate::config::{ForestConfig, Linking};

/// Disjoint-set forest over the indices `0..n`.
///
/// # Examples
/// ```
/// use u_partition::collections::UnionFind;
///
/// let mut uf = UnionFind::new(5);
/// assert_eq!(uf.component_count(), 5);
///
/// uf.union(0, 1);
/// uf.union(2, 3);
/// assert_eq!(uf.component_count(), 3);
///
/// assert!(uf.connected(0, 1));
/// assert!(!uf.connected(0, 2));
///
/// uf.union(1, 3);
/// assert!(uf.connected(0, 2)); // transitivity
/// assert_eq!(uf.component_count(), 2);
///
/// // Quick union keeps the first argument's root.
/// assert_eq!(uf.find(3), 0);
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
    config: ForestConfig,
}

impl UnionFind {
    /// Creates a quick-union forest with `n` singleton sets `{0}, {1}, ..., {n-1}`.
    ///
    /// # Complexity
    /// O(n)
    pub fn new(n: usize) -> Self {
        Self::with_config(n, ForestConfig::default())
    }

    /// Creates a forest with `n` singleton sets and the given configuration.
    pub fn with_config(n: usize, config: ForestConfig) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
            config,
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn config(&self) -> ForestConfig {
        self.config
    }

    /// Finds the root of the set containing `x` without modifying the forest.
    ///
    /// # Complexity
    /// O(height of the tree containing `x`)
    ///
    /// # Panics
    /// Panics if `x >= len()`.
    pub fn root(&self, x: usize) -> usize {
        let mut node = x;
        while self.parent[node] != node {
            node = self.parent[node];
        }
        node
    }

    /// Finds the root of the set containing `x`.
    ///
    /// When path compression is enabled, every node on the path from `x`
    /// to the root is made a direct child of the root.
    ///
    /// # Panics
    /// Panics if `x >= len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let root = self.root(x);
        if self.config.path_compression {
            let mut node = x;
            while self.parent[node] != root {
                let next = self.parent[node];
                self.parent[node] = root;
                node = next;
            }
        }
        root
    }

    /// Merges the sets containing `x` and `y`, linking roots according to
    /// the configured [`Linking`] policy.
    ///
    /// # Returns
    /// `true` if `x` and `y` were in different sets (and are now merged),
    /// `false` if they were already in the same set. In the latter case the
    /// partition is unchanged.
    ///
    /// # Panics
    /// Panics if `x >= len()` or `y >= len()`.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        let (survivor, absorbed) = match self.config.linking {
            Linking::Quick => (root_x, root_y),
            Linking::BySize if self.size[root_x] < self.size[root_y] => (root_y, root_x),
            Linking::BySize => (root_x, root_y),
        };
        self.link(survivor, absorbed);
        true
    }

    /// Merges the sets containing `x` and `y`, choosing the surviving root
    /// with a fair coin drawn from `rng`. The configured linking policy is
    /// ignored for this call.
    ///
    /// Randomized linking gives expected logarithmic tree height without
    /// size bookkeeping influencing the shape.
    ///
    /// Reference: Goel, Khanna, Larkin & Tarjan (2014), "Disjoint Set Union
    /// with Randomized Linking", *SODA*.
    ///
    /// # Panics
    /// Panics if `x >= len()` or `y >= len()`.
    pub fn union_randomized<R: Rng + ?Sized>(&mut self, x: usize, y: usize, rng: &mut R) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        if rng.random_bool(0.5) {
            self.link(root_x, root_y);
        } else {
            self.link(root_y, root_x);
        }
        true
    }

    /// Returns `true` if `x` and `y` are in the same set.
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Returns the number of disjoint sets.
    ///
    /// # Complexity
    /// O(1)
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the size of the set containing `x`.
    pub fn component_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }

    /// Iterates over the root of every set in ascending index order.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, &p)| i == p)
            .map(|(i, _)| i)
    }

    fn link(&mut self, survivor: usize, absorbed: usize) {
        debug_assert_eq!(self.parent[survivor], survivor);
        debug_assert_eq!(self.parent[absorbed], absorbed);

        self.parent[absorbed] = survivor;
        self.size[survivor] += self.size[absorbed];
        self.components -= 1;

        log::trace!(
            "linked root {absorbed} under {survivor} (set size {}, {} sets left)",
            self.size[survivor],
            self.components
        );
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn configs() -> [ForestConfig; 4] {
        [
            ForestConfig::new(),
            ForestConfig::new().path_compression(true),
            ForestConfig::new().linking(Linking::BySize),
            ForestConfig::balanced(),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn union_find_transitivity(
            n in 2_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 0..50),
        ) {
            let mut uf = UnionFind::new(n);
            for &(x, y) in &ops {
                if x < n && y < n {
                    uf.union(x, y);
                }
            }

            for x in 0..n {
                for y in 0..n {
                    for z in 0..n {
                        if uf.connected(x, y) && uf.connected(y, z) {
                            prop_assert!(
                                uf.connected(x, z),
                                "transitivity violated: {x}~{y} and {y}~{z} but not {x}~{z}"
                            );
                        }
                    }
                }
            }
        }

        #[test]
        fn component_count_invariant(
            n in 1_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 0..50),
        ) {
            for config in configs() {
                let mut uf = UnionFind::with_config(n, config);
                let mut expected_components = n;

                for &(x, y) in &ops {
                    if x < n && y < n {
                        let already = uf.connected(x, y);
                        let merged = uf.union(x, y);
                        prop_assert_eq!(merged, !already);
                        if merged {
                            expected_components -= 1;
                        }
                        prop_assert_eq!(uf.roots().count(), expected_components);
                    }
                }

                prop_assert_eq!(uf.component_count(), expected_components);
            }
        }

        #[test]
        fn component_sizes_sum_to_n(
            n in 1_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 0..30),
        ) {
            let mut uf = UnionFind::with_config(n, ForestConfig::balanced());
            for &(x, y) in &ops {
                if x < n && y < n {
                    uf.union(x, y);
                }
            }

            let mut total = 0;
            for i in 0..n {
                if uf.find(i) == i {
                    total += uf.component_size(i);
                }
            }
            prop_assert_eq!(total, n, "component sizes should sum to n");
        }

        #[test]
        fn configurations_agree_on_partition(
            n in 1_usize..16,
            ops in proptest::collection::vec((0_usize..16, 0_usize..16), 0..40),
        ) {
            let mut forests: Vec<UnionFind> = configs()
                .into_iter()
                .map(|config| UnionFind::with_config(n, config))
                .collect();

            for &(x, y) in &ops {
                if x < n && y < n {
                    let results: Vec<bool> = forests.iter_mut().map(|uf| uf.union(x, y)).collect();
                    prop_assert!(results.iter().all(|&r| r == results[0]));
                }
            }

            for x in 0..n {
                for y in 0..n {
                    let expected = forests[0].connected(x, y);
                    for uf in forests.iter_mut().skip(1) {
                        prop_assert_eq!(uf.connected(x, y), expected);
                    }
                }
            }
        }

        #[test]
        fn balanced_height_is_logarithmic(
            n in 1_usize..64,
            ops in proptest::collection::vec((0_usize..64, 0_usize..64), 0..128),
        ) {
            let mut uf = UnionFind::with_config(n, ForestConfig::new().linking(Linking::BySize));
            for &(x, y) in &ops {
                if x < n && y < n {
                    uf.union(x, y);
                }
            }

            let bound = usize::BITS - n.leading_zeros();
            for x in 0..n {
                let mut depth = 0;
                let mut node = x;
                while uf.parent[node] != node {
                    node = uf.parent[node];
                    depth += 1;
                }
                prop_assert!(depth <= bound as usize, "depth {depth} exceeds log2 bound {bound}");
            }
        }
    }
}
