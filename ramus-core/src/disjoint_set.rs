//! Disjoint-set (union-find) over dense element indices.
//!
//! Tracks a partition of elements into components with near-constant-time
//! `union` and `find`. Connectivity queries on [`crate::Graph`] construct a
//! fresh instance per call so the partition can never go stale against graph
//! mutations.
//!
//! `find` applies full path compression: every node visited on the way to
//! the representative is re-pointed directly at it. The parent array is
//! therefore mutated by a logically read-only query, which is why `find`
//! takes `&mut self`: the compression is part of the contract, not a hidden
//! side effect.

use crate::error::DisjointSetError;

/// A disjoint-set forest with union by rank and path compression.
///
/// Elements are dense indices handed out by [`DisjointSet::make_set`].
/// Applying both union by rank and path compression bounds a sequence of
/// `m` operations over `n` elements by the inverse-Ackermann function, which
/// is effectively constant per operation.
///
/// # Examples
/// ```
/// use ramus_core::DisjointSet;
///
/// let mut sets = DisjointSet::new();
/// let a = sets.make_set();
/// let b = sets.make_set();
/// assert_eq!(sets.components(), 2);
/// assert!(sets.union(a, b)?);
/// assert_eq!(sets.find(a)?, sets.find(b)?);
/// assert_eq!(sets.components(), 1);
/// # Ok::<(), ramus_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates an empty structure with no registered elements.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty structure with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
            components: 0,
        }
    }

    /// Registers `count` fresh singleton elements at once.
    ///
    /// Convenience for callers that number their elements densely up front,
    /// such as [`crate::Graph::connected_components`].
    #[must_use]
    pub fn with_len(count: usize) -> Self {
        Self {
            parent: (0..count).collect(),
            rank: vec![0; count],
            components: count,
        }
    }

    /// Registers a new element in its own singleton set and returns its index.
    pub fn make_set(&mut self) -> usize {
        let element = self.parent.len();
        self.parent.push(element);
        self.rank.push(0);
        self.components += 1;
        element
    }

    /// Returns the number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no element has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets in the current partition.
    ///
    /// The count starts at the number of registered singletons and only ever
    /// decreases as unions merge sets.
    #[must_use]
    pub fn components(&self) -> usize {
        self.components
    }

    /// Returns the representative of the set containing `element`.
    ///
    /// Compresses the traversed path: every node between `element` and the
    /// representative is re-pointed directly at the representative before
    /// this call returns.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::NotFound`] when `element` was never
    /// registered via [`DisjointSet::make_set`].
    pub fn find(&mut self, element: usize) -> Result<usize, DisjointSetError> {
        self.check_registered(element)?;

        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = element;
        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        Ok(root)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `true` when the two elements were in different sets and are
    /// now merged, `false` when they already shared a set (no-op). The
    /// shallower tree is attached under the deeper one; rank grows only when
    /// both roots had equal rank.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::NotFound`] when either element was never
    /// registered. No mutation occurs on error.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        self.check_registered(left)?;
        self.check_registered(right)?;

        let mut left_root = self.find(left)?;
        let mut right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        if left_rank < right_rank {
            std::mem::swap(&mut left_root, &mut right_root);
        }
        self.parent[right_root] = left_root;
        if left_rank == right_rank {
            self.rank[left_root] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        Ok(true)
    }

    /// Returns `true` when both elements currently share a representative.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::NotFound`] when either element was never
    /// registered.
    pub fn same_set(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        Ok(self.find(left)? == self.find(right)?)
    }

    fn check_registered(&self, element: usize) -> Result<(), DisjointSetError> {
        if element < self.parent.len() {
            Ok(())
        } else {
            Err(DisjointSetError::NotFound {
                element,
                len: self.parent.len(),
            })
        }
    }
}
