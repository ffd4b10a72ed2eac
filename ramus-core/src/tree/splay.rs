//! Splay-to-root rotation.
//!
//! No standing shape invariant: every access rotates the touched node to
//! the root through zig, zig-zig, and zig-zag steps, which amortises the
//! cost of future accesses to nearby keys. Zig-zig rotates the grandparent
//! before the parent. The order is what distinguishes splaying from naive
//! move-to-root and is load-bearing for the amortised bound.

use super::{
    SearchTree,
    node::{NIL, NodeIdx},
};

pub(super) fn splay_to_root<K, V>(tree: &mut SearchTree<K, V>, idx: NodeIdx) {
    while tree.parent_of(idx) != NIL {
        let parent = tree.parent_of(idx);
        let grand = tree.parent_of(parent);
        let idx_side = tree.side_of(parent, idx);

        if grand == NIL {
            // zig: one step from the root
            tree.rotate(parent, idx_side.opposite());
        } else {
            let parent_side = tree.side_of(grand, parent);
            if idx_side == parent_side {
                // zig-zig
                tree.rotate(grand, parent_side.opposite());
                tree.rotate(parent, idx_side.opposite());
            } else {
                // zig-zag
                tree.rotate(parent, idx_side.opposite());
                tree.rotate(grand, parent_side.opposite());
            }
        }
    }
}
