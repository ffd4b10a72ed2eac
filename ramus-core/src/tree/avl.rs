//! Height-balanced rebalancing.
//!
//! After any mutation the whole search path is retraced toward the root:
//! heights are recomputed and the first (and any later) ancestor whose
//! balance factor leaves `[-1, 1]` is repaired with a single or double
//! rotation. The rotation case is selected by the sign of the taller
//! child's own balance factor: the classic left-left, right-right,
//! left-right, and right-left cases.

use super::{
    SearchTree,
    node::{BalanceTag, NIL, NodeIdx, Side},
};

/// Walks from `start` to the root, refreshing heights and repairing any
/// unbalanced ancestor. `start` may be `NIL` (mutation at the root).
pub(super) fn retrace<K, V>(tree: &mut SearchTree<K, V>, start: NodeIdx) {
    let mut cursor = start;
    while cursor != NIL {
        update_height(tree, cursor);
        let subtree = restore_balance(tree, cursor);
        cursor = tree.parent_of(subtree);
    }
}

fn height<K, V>(tree: &SearchTree<K, V>, idx: NodeIdx) -> i32 {
    if idx == NIL {
        return 0;
    }
    match tree.node(idx).tag {
        BalanceTag::Height(value) => value,
        BalanceTag::Colour(_) | BalanceTag::Plain => 0,
    }
}

fn update_height<K, V>(tree: &mut SearchTree<K, V>, idx: NodeIdx) {
    let left = height(tree, tree.child(idx, Side::Left));
    let right = height(tree, tree.child(idx, Side::Right));
    tree.node_mut(idx).tag = BalanceTag::Height(1 + left.max(right));
}

pub(super) fn balance_factor<K, V>(tree: &SearchTree<K, V>, idx: NodeIdx) -> i32 {
    height(tree, tree.child(idx, Side::Left)) - height(tree, tree.child(idx, Side::Right))
}

/// Repairs `idx` if its balance factor is outside `[-1, 1]`, returning the
/// root of the (possibly rotated) subtree.
fn restore_balance<K, V>(tree: &mut SearchTree<K, V>, idx: NodeIdx) -> NodeIdx {
    let balance = balance_factor(tree, idx);

    if balance > 1 {
        let left = tree.child(idx, Side::Left);
        if balance_factor(tree, left) < 0 {
            // left-right: straighten the inner grandchild first
            rotate_refreshing(tree, left, Side::Left);
        }
        rotate_refreshing(tree, idx, Side::Right);
        return tree.parent_of(idx);
    }

    if balance < -1 {
        let right = tree.child(idx, Side::Right);
        if balance_factor(tree, right) > 0 {
            // right-left
            rotate_refreshing(tree, right, Side::Right);
        }
        rotate_refreshing(tree, idx, Side::Left);
        return tree.parent_of(idx);
    }

    idx
}

/// Rotates and recomputes the heights of the demoted and promoted nodes,
/// in that order, since the demoted node is a child of the promoted one after
/// the rotation.
fn rotate_refreshing<K, V>(tree: &mut SearchTree<K, V>, idx: NodeIdx, side: Side) {
    tree.rotate(idx, side);
    update_height(tree, idx);
    update_height(tree, tree.parent_of(idx));
}
