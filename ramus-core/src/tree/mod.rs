//! Self-balancing binary search tree with interchangeable strategies.
//!
//! One arena-backed tree walk serves all three balancing disciplines; the
//! strategy selected at construction decides which rebalance routine runs
//! after each mutation. Invariants are restored synchronously before the
//! mutating call returns; there is no deferred rebalancing.
//!
//! The strategy is a tagged variant rather than a trait object: the set of
//! disciplines is closed, and dispatching on an enum keeps the rebalance
//! code free of dynamic indirection.

mod avl;
mod iter;
mod node;
mod redblack;
mod splay;

use std::cmp::Ordering;

pub use self::iter::{InOrder, PostOrder, PreOrder, Range};
use self::node::{BalanceTag, Colour, NIL, Node, NodeIdx, Side};

/// Balancing discipline applied after every mutation.
///
/// Selected once at construction and immutable afterwards.
///
/// # Examples
/// ```
/// use ramus_core::{BalanceStrategy, SearchTree};
///
/// let tree: SearchTree<u32, &str> = SearchTree::with_strategy(BalanceStrategy::Splay);
/// assert_eq!(tree.strategy(), BalanceStrategy::Splay);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BalanceStrategy {
    /// Height-balanced: every node's subtree heights differ by at most one.
    HeightBalanced,
    /// Colour-balanced: red/black recolouring and rotation fixups keep every
    /// root-to-leaf path within twice the shortest.
    ColourBalanced,
    /// Self-adjusting: each access rotates the touched node to the root,
    /// amortising future access cost with no standing shape invariant.
    Splay,
}

/// An ordered map maintained by one of three balancing strategies.
///
/// Nodes live in an index-addressed arena owned exclusively by the tree; no
/// reference to an internal node outlives it. Keys are unique; inserting an
/// existing key replaces its value in place.
///
/// # Examples
/// ```
/// use ramus_core::SearchTree;
///
/// let mut tree = SearchTree::height_balanced();
/// tree.insert(2, "two");
/// tree.insert(1, "one");
/// tree.insert(3, "three");
///
/// assert_eq!(tree.get(&2), Some(&"two"));
/// let keys: Vec<u32> = tree.iter().map(|(key, _)| *key).collect();
/// assert_eq!(keys, vec![1, 2, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct SearchTree<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<NodeIdx>,
    root: NodeIdx,
    len: usize,
    strategy: BalanceStrategy,
}

impl<K, V> Default for SearchTree<K, V> {
    fn default() -> Self {
        Self::height_balanced()
    }
}

impl<K, V> SearchTree<K, V> {
    /// Creates an empty tree using the given balancing strategy.
    #[must_use]
    pub const fn with_strategy(strategy: BalanceStrategy) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: NIL,
            len: 0,
            strategy,
        }
    }

    /// Creates an empty height-balanced (AVL) tree.
    #[must_use]
    pub const fn height_balanced() -> Self {
        Self::with_strategy(BalanceStrategy::HeightBalanced)
    }

    /// Creates an empty colour-balanced (red-black) tree.
    #[must_use]
    pub const fn colour_balanced() -> Self {
        Self::with_strategy(BalanceStrategy::ColourBalanced)
    }

    /// Creates an empty splay tree.
    #[must_use]
    pub const fn splay() -> Self {
        Self::with_strategy(BalanceStrategy::Splay)
    }

    /// Returns the strategy the tree was constructed with.
    #[must_use]
    pub const fn strategy(&self) -> BalanceStrategy {
        self.strategy
    }

    /// Returns the number of key-value pairs stored.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the tree holds no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every entry, leaving the tree equivalent to a fresh one with
    /// the same strategy.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.root = NIL;
        self.len = 0;
    }

    // ------------------------------------------------------------------
    // Arena plumbing
    // ------------------------------------------------------------------

    fn node(&self, idx: NodeIdx) -> &Node<K, V> {
        self.slots[idx].as_ref().expect("arena index names a live node")
    }

    fn node_mut(&mut self, idx: NodeIdx) -> &mut Node<K, V> {
        self.slots[idx].as_mut().expect("arena index names a live node")
    }

    fn child(&self, idx: NodeIdx, side: Side) -> NodeIdx {
        self.node(idx).child(side)
    }

    fn parent_of(&self, idx: NodeIdx) -> NodeIdx {
        if idx == NIL { NIL } else { self.node(idx).parent }
    }

    fn set_child(&mut self, parent: NodeIdx, side: Side, child: NodeIdx) {
        self.node_mut(parent).children[side.index()] = child;
    }

    fn side_of(&self, parent: NodeIdx, child: NodeIdx) -> Side {
        if self.node(parent).child(Side::Left) == child {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Replaces `old` with `new` in `parent`'s child slot, or re-roots the
    /// tree when `parent` is `NIL`.
    fn replace_child(&mut self, parent: NodeIdx, old: NodeIdx, new: NodeIdx) {
        if parent == NIL {
            self.root = new;
        } else {
            let side = self.side_of(parent, old);
            self.set_child(parent, side, new);
        }
    }

    fn alloc(&mut self, node: Node<K, V>) -> NodeIdx {
        if let Some(idx) = self.free.pop() {
            self.slots[idx] = Some(node);
            idx
        } else {
            self.slots.push(Some(node));
            self.slots.len() - 1
        }
    }

    fn release(&mut self, idx: NodeIdx) -> Node<K, V> {
        let node = self.slots[idx].take().expect("released slot is live");
        self.free.push(idx);
        node
    }

    /// Swaps the payloads of two live nodes, leaving links and balance tags
    /// attached to their positions.
    fn swap_payload(&mut self, a: NodeIdx, b: NodeIdx) {
        debug_assert_ne!(a, b);
        let taken_a = self.slots[a].take();
        let taken_b = self.slots[b].take();
        if let (Some(mut node_a), Some(mut node_b)) = (taken_a, taken_b) {
            std::mem::swap(&mut node_a.key, &mut node_b.key);
            std::mem::swap(&mut node_a.value, &mut node_b.value);
            self.slots[a] = Some(node_a);
            self.slots[b] = Some(node_b);
        }
    }

    /// Rotates `idx` down toward `side`, promoting its opposite child.
    ///
    /// Pure link surgery: balance tags are left for the strategy code to
    /// repair where needed.
    fn rotate(&mut self, idx: NodeIdx, side: Side) {
        let promoted = self.child(idx, side.opposite());
        debug_assert_ne!(promoted, NIL);
        let inner = self.child(promoted, side);

        self.set_child(idx, side.opposite(), inner);
        if inner != NIL {
            self.node_mut(inner).parent = idx;
        }

        let parent = self.node(idx).parent;
        self.node_mut(promoted).parent = parent;
        if parent == NIL {
            self.root = promoted;
        } else {
            let parent_side = self.side_of(parent, idx);
            self.set_child(parent, parent_side, promoted);
        }

        self.set_child(promoted, side, idx);
        self.node_mut(idx).parent = promoted;
    }

    fn min_in(&self, mut idx: NodeIdx) -> NodeIdx {
        while self.child(idx, Side::Left) != NIL {
            idx = self.child(idx, Side::Left);
        }
        idx
    }

    fn max_in(&self, mut idx: NodeIdx) -> NodeIdx {
        while self.child(idx, Side::Right) != NIL {
            idx = self.child(idx, Side::Right);
        }
        idx
    }

    const fn fresh_tag(&self) -> BalanceTag {
        match self.strategy {
            BalanceStrategy::HeightBalanced => BalanceTag::Height(1),
            BalanceStrategy::ColourBalanced => BalanceTag::Colour(Colour::Red),
            BalanceStrategy::Splay => BalanceTag::Plain,
        }
    }
}

impl<K: Ord, V> SearchTree<K, V> {
    /// Inserts a key-value pair, rebalancing before returning.
    ///
    /// An already-present key has its value replaced in place and the
    /// previous value is returned; `None` signals a fresh insertion. Under
    /// the splay strategy the touched node is rotated to the root either
    /// way.
    ///
    /// # Examples
    /// ```
    /// use ramus_core::SearchTree;
    ///
    /// let mut tree = SearchTree::colour_balanced();
    /// assert_eq!(tree.insert(7, "first"), None);
    /// assert_eq!(tree.insert(7, "second"), Some("first"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut parent = NIL;
        let mut side = Side::Left;
        let mut cursor = self.root;
        while cursor != NIL {
            match key.cmp(&self.node(cursor).key) {
                Ordering::Less => {
                    parent = cursor;
                    side = Side::Left;
                    cursor = self.child(cursor, Side::Left);
                }
                Ordering::Greater => {
                    parent = cursor;
                    side = Side::Right;
                    cursor = self.child(cursor, Side::Right);
                }
                Ordering::Equal => {
                    let previous = std::mem::replace(&mut self.node_mut(cursor).value, value);
                    if self.strategy == BalanceStrategy::Splay {
                        splay::splay_to_root(self, cursor);
                    }
                    return Some(previous);
                }
            }
        }

        let idx = self.alloc(Node::new(key, value, parent, self.fresh_tag()));
        if parent == NIL {
            self.root = idx;
        } else {
            self.set_child(parent, side, idx);
        }
        self.len += 1;

        match self.strategy {
            BalanceStrategy::HeightBalanced => avl::retrace(self, parent),
            BalanceStrategy::ColourBalanced => redblack::fix_insert(self, idx),
            BalanceStrategy::Splay => splay::splay_to_root(self, idx),
        }
        None
    }

    /// Removes a key, returning its value, or `None` when the key is absent
    /// (in which case the tree is left untouched).
    ///
    /// A node with two children swaps payloads with its in-order successor
    /// and the successor's position, which has at most one child, is the
    /// one physically unlinked. Rebalancing runs bottom-up from the splice
    /// point before this call returns.
    ///
    /// # Examples
    /// ```
    /// use ramus_core::SearchTree;
    ///
    /// let mut tree = SearchTree::height_balanced();
    /// tree.insert(1, 10);
    /// assert_eq!(tree.remove(&1), Some(10));
    /// assert_eq!(tree.remove(&1), None);
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let (found, _) = self.locate(key);
        if found == NIL {
            return None;
        }
        Some(self.remove_at(found))
    }

    /// Looks up a key, splaying under the splay strategy.
    ///
    /// The splay discipline rotates the accessed node to the root even on a
    /// read, and on a miss it splays the last node visited on the search
    /// path, which is why this takes `&mut self`. The other strategies
    /// leave the tree untouched; callers with shared access can use
    /// [`SearchTree::get`].
    pub fn search(&mut self, key: &K) -> Option<&V> {
        let (found, last) = self.locate(key);
        if self.strategy == BalanceStrategy::Splay {
            let target = if found == NIL { last } else { found };
            if target != NIL {
                splay::splay_to_root(self, target);
            }
        }
        if found == NIL {
            None
        } else {
            Some(&self.node(found).value)
        }
    }

    /// Looks up a key without adjusting the tree, whatever the strategy.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        let (found, _) = self.locate(key);
        if found == NIL {
            None
        } else {
            Some(&self.node(found).value)
        }
    }

    /// Returns `true` when the key is present. Never splays.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns the smallest entry, or `None` on an empty tree.
    #[must_use]
    pub fn min(&self) -> Option<(&K, &V)> {
        (self.root != NIL).then(|| {
            let node = self.node(self.min_in(self.root));
            (&node.key, &node.value)
        })
    }

    /// Returns the largest entry, or `None` on an empty tree.
    #[must_use]
    pub fn max(&self) -> Option<(&K, &V)> {
        (self.root != NIL).then(|| {
            let node = self.node(self.max_in(self.root));
            (&node.key, &node.value)
        })
    }

    /// Returns an ordered iterator over the entries with keys in
    /// `low..=high`.
    ///
    /// The iterator is lazy and driven by an explicit stack; dropping it
    /// early costs nothing beyond the nodes already visited.
    ///
    /// # Examples
    /// ```
    /// use ramus_core::SearchTree;
    ///
    /// let mut tree = SearchTree::height_balanced();
    /// for key in [1, 3, 5, 7, 9] {
    ///     tree.insert(key, key * 10);
    /// }
    /// let hits: Vec<u32> = tree.range(&3, &7).map(|(key, _)| *key).collect();
    /// assert_eq!(hits, vec![3, 5, 7]);
    /// ```
    #[must_use]
    pub fn range<'a>(&'a self, low: &'a K, high: &'a K) -> Range<'a, K, V> {
        Range::new(self, low, high)
    }

    fn locate(&self, key: &K) -> (NodeIdx, NodeIdx) {
        let mut cursor = self.root;
        let mut last = NIL;
        while cursor != NIL {
            last = cursor;
            match key.cmp(&self.node(cursor).key) {
                Ordering::Less => cursor = self.child(cursor, Side::Left),
                Ordering::Greater => cursor = self.child(cursor, Side::Right),
                Ordering::Equal => return (cursor, cursor),
            }
        }
        (NIL, last)
    }

    fn remove_at(&mut self, mut target: NodeIdx) -> V {
        if self.child(target, Side::Left) != NIL && self.child(target, Side::Right) != NIL {
            let successor = self.min_in(self.child(target, Side::Right));
            self.swap_payload(target, successor);
            target = successor;
        }

        let child = if self.child(target, Side::Left) != NIL {
            self.child(target, Side::Left)
        } else {
            self.child(target, Side::Right)
        };
        let parent = self.node(target).parent;
        let removed_black = matches!(self.node(target).tag, BalanceTag::Colour(Colour::Black));

        if child != NIL {
            self.node_mut(child).parent = parent;
        }
        self.replace_child(parent, target, child);
        let removed = self.release(target);
        self.len -= 1;

        match self.strategy {
            BalanceStrategy::HeightBalanced => avl::retrace(self, parent),
            BalanceStrategy::ColourBalanced => {
                if removed_black {
                    redblack::fix_remove(self, child, parent);
                }
            }
            BalanceStrategy::Splay => {
                if parent != NIL {
                    splay::splay_to_root(self, parent);
                }
            }
        }
        removed.value
    }
}

impl<K, V> SearchTree<K, V> {
    /// Returns a lazy in-order iterator: keys in ascending order.
    ///
    /// Each call starts a fresh traversal; the iterator owns its own stack,
    /// so stopping early never materialises the rest of the tree.
    #[must_use]
    pub fn iter(&self) -> InOrder<'_, K, V> {
        InOrder::new(self)
    }

    /// Returns a lazy pre-order iterator: each node before its subtrees.
    #[must_use]
    pub fn iter_preorder(&self) -> PreOrder<'_, K, V> {
        PreOrder::new(self)
    }

    /// Returns a lazy post-order iterator: each node after its subtrees.
    #[must_use]
    pub fn iter_postorder(&self) -> PostOrder<'_, K, V> {
        PostOrder::new(self)
    }
}

impl<'a, K, V> IntoIterator for &'a SearchTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = InOrder<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
