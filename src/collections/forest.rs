//! Disjoint-set forest over an arbitrary universe of hashable elements.
//!
//! The universe is fixed at construction. Each element is assigned a dense
//! index in `0..n` (its position in the construction sequence) and the
//! partition itself lives in an index-level [`UnionFind`]. Element-level
//! operations resolve every key before touching the forest, so a failed
//! lookup never leaves a half-applied merge behind.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use rand::Rng;

use crate::collections::UnionFind;
use crate::config::ForestConfig;
use crate::error::ForestError;

/// Partition of a fixed universe of elements into disjoint sets.
///
/// With the default [`ForestConfig`] this is plain quick union: `union(a, b)`
/// attaches the root of `b`'s tree under the root of `a`'s tree, and `find`
/// returns the index of that root.
///
/// # Examples
/// ```
/// use u_partition::collections::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new(["ann", "bob", "cid", "dee"])?;
/// assert!(forest.union("ann", "bob")?);
/// assert!(forest.union("cid", "dee")?);
/// assert!(!forest.are_connected("ann", "cid")?);
///
/// assert!(forest.union("bob", "dee")?);
/// assert!(forest.are_connected("ann", "cid")?);
/// assert_eq!(forest.representative("dee")?, &"ann");
///
/// assert!(forest.find("eve").is_err());
/// # Ok::<(), u_partition::ForestError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSetForest<T> {
    elements: Vec<T>,
    index: HashMap<T, usize>,
    union_find: UnionFind,
}

impl<T: Eq + Hash + Clone> DisjointSetForest<T> {
    /// Builds a quick-union forest in which every element is its own set.
    ///
    /// # Errors
    /// [`ForestError::DuplicateElement`] if `elements` yields the same
    /// element more than once.
    ///
    /// # Complexity
    /// O(n)
    pub fn new<I>(elements: I) -> Result<Self, ForestError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_config(elements, ForestConfig::default())
    }

    /// Builds a forest with the given linking and compression settings.
    pub fn with_config<I>(elements: I, config: ForestConfig) -> Result<Self, ForestError>
    where
        I: IntoIterator<Item = T>,
    {
        let elements: Vec<T> = elements.into_iter().collect();
        let mut index = HashMap::with_capacity(elements.len());
        for (position, element) in elements.iter().enumerate() {
            if let Some(first) = index.insert(element.clone(), position) {
                return Err(ForestError::DuplicateElement {
                    first,
                    second: position,
                });
            }
        }

        log::debug!(
            "built disjoint-set forest over {} elements ({config:?})",
            elements.len()
        );

        Ok(Self {
            union_find: UnionFind::with_config(elements.len(), config),
            elements,
            index,
        })
    }
}

impl<T: Eq + Hash> DisjointSetForest<T> {
    /// Returns the index of the root of the set containing `element`.
    ///
    /// # Errors
    /// [`ForestError::KeyNotFound`] if `element` is not in the universe.
    pub fn find<Q>(&mut self, element: &Q) -> Result<usize, ForestError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let i = self.lookup(element)?;
        Ok(self.union_find.find(i))
    }

    /// Returns whether `a` and `b` belong to the same set.
    ///
    /// # Errors
    /// [`ForestError::KeyNotFound`] if either element is not in the universe.
    pub fn are_connected<Q>(&mut self, a: &Q, b: &Q) -> Result<bool, ForestError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (a, b) = (self.lookup(a)?, self.lookup(b)?);
        Ok(self.union_find.connected(a, b))
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `Ok(false)` without changing anything if they are already
    /// connected. Under [`Linking::Quick`](crate::config::Linking::Quick) the
    /// root of `a`'s set survives.
    ///
    /// # Errors
    /// [`ForestError::KeyNotFound`] if either element is not in the universe.
    /// The forest is not modified in that case.
    pub fn union<Q>(&mut self, a: &Q, b: &Q) -> Result<bool, ForestError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (a, b) = (self.lookup(a)?, self.lookup(b)?);
        Ok(self.union_find.union(a, b))
    }

    /// Merges the sets containing `a` and `b`, picking the surviving root
    /// with a coin flip from `rng`.
    ///
    /// # Errors
    /// [`ForestError::KeyNotFound`] if either element is not in the universe.
    pub fn union_randomized<Q, R>(&mut self, a: &Q, b: &Q, rng: &mut R) -> Result<bool, ForestError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        R: Rng + ?Sized,
    {
        let (a, b) = (self.lookup(a)?, self.lookup(b)?);
        Ok(self.union_find.union_randomized(a, b, rng))
    }

    /// Returns the root element of the set containing `element`.
    pub fn representative<Q>(&mut self, element: &Q) -> Result<&T, ForestError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let root = self.find(element)?;
        Ok(&self.elements[root])
    }

    /// Returns the number of elements in the set containing `element`.
    pub fn set_size<Q>(&mut self, element: &Q) -> Result<usize, ForestError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let i = self.lookup(element)?;
        Ok(self.union_find.component_size(i))
    }

    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(element)
    }

    /// Returns the dense index assigned to `element` at construction.
    pub fn index_of<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(element).copied()
    }

    fn lookup<Q>(&self, element: &Q) -> Result<usize, ForestError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index_of(element).ok_or(ForestError::KeyNotFound)
    }
}

impl<T> DisjointSetForest<T> {
    /// Returns the number of elements in the universe.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of disjoint sets.
    ///
    /// # Complexity
    /// O(1)
    pub fn set_count(&self) -> usize {
        self.union_find.component_count()
    }

    /// Returns the element with dense index `index`.
    pub fn element(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// The universe, in construction order.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn config(&self) -> ForestConfig {
        self.union_find.config()
    }

    /// Returns the current partition.
    ///
    /// Members of each set appear in construction order, and sets are
    /// ordered by their first member.
    ///
    /// # Complexity
    /// O(n · h), where h is the tallest tree height
    pub fn sets(&self) -> Vec<Vec<&T>> {
        let mut slot_of_root: HashMap<usize, usize> = HashMap::with_capacity(self.set_count());
        let mut sets: Vec<Vec<&T>> = Vec::with_capacity(self.set_count());
        for (i, element) in self.elements.iter().enumerate() {
            let root = self.union_find.root(i);
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                sets.push(Vec::new());
                sets.len() - 1
            });
            sets[slot].push(element);
        }
        sets
    }
}
