//! Colour-balanced (red-black) fixups.
//!
//! Insertion attaches the new node red and climbs toward the root,
//! recolouring or rotating until no red node has a red parent; the climb
//! stops as soon as a black parent is reached. Deletion of a black node
//! resolves the resulting "double black" by the standard sibling-colour
//! cases, propagating upward until absorbed or the root is reached.
//!
//! `NIL` stands in for the black leaf sentinels: it is never coloured, and
//! every colour query treats it as black. Because a removed position may
//! leave a `NIL` in place of the doubly-black node, the delete fixup
//! carries the parent index explicitly instead of reading it through a
//! back-pointer.

use super::{
    SearchTree,
    node::{BalanceTag, Colour, NIL, NodeIdx, Side},
};

pub(super) fn colour_of<K, V>(tree: &SearchTree<K, V>, idx: NodeIdx) -> Colour {
    if idx == NIL {
        return Colour::Black;
    }
    match tree.node(idx).tag {
        BalanceTag::Colour(colour) => colour,
        BalanceTag::Height(_) | BalanceTag::Plain => Colour::Black,
    }
}

fn is_red<K, V>(tree: &SearchTree<K, V>, idx: NodeIdx) -> bool {
    colour_of(tree, idx) == Colour::Red
}

fn set_colour<K, V>(tree: &mut SearchTree<K, V>, idx: NodeIdx, colour: Colour) {
    if idx != NIL {
        tree.node_mut(idx).tag = BalanceTag::Colour(colour);
    }
}

/// Restores the red-black properties after `inserted` was attached red.
pub(super) fn fix_insert<K, V>(tree: &mut SearchTree<K, V>, inserted: NodeIdx) {
    let mut cursor = inserted;
    while is_red(tree, tree.parent_of(cursor)) {
        let parent = tree.parent_of(cursor);
        // A red parent is never the root, so the grandparent exists.
        let grand = tree.parent_of(parent);
        let side = tree.side_of(grand, parent);
        let uncle = tree.child(grand, side.opposite());

        if is_red(tree, uncle) {
            set_colour(tree, parent, Colour::Black);
            set_colour(tree, uncle, Colour::Black);
            set_colour(tree, grand, Colour::Red);
            cursor = grand;
        } else {
            if cursor == tree.child(parent, side.opposite()) {
                // inner grandchild: rotate it outward first
                cursor = parent;
                tree.rotate(cursor, side);
            }
            let outer_parent = tree.parent_of(cursor);
            let outer_grand = tree.parent_of(outer_parent);
            set_colour(tree, outer_parent, Colour::Black);
            set_colour(tree, outer_grand, Colour::Red);
            tree.rotate(outer_grand, side.opposite());
        }
    }
    let root = tree.root;
    set_colour(tree, root, Colour::Black);
}

/// Resolves the double black left at `node` (possibly `NIL`) under `parent`
/// after a black node was spliced out.
pub(super) fn fix_remove<K, V>(tree: &mut SearchTree<K, V>, node: NodeIdx, parent: NodeIdx) {
    let mut cursor = node;
    let mut above = parent;

    while cursor != tree.root && !is_red(tree, cursor) {
        if above == NIL {
            break;
        }
        let side = if tree.child(above, Side::Left) == cursor {
            Side::Left
        } else {
            Side::Right
        };
        let mut sibling = tree.child(above, side.opposite());
        if sibling == NIL {
            cursor = above;
            above = tree.parent_of(cursor);
            continue;
        }

        if is_red(tree, sibling) {
            set_colour(tree, sibling, Colour::Black);
            set_colour(tree, above, Colour::Red);
            tree.rotate(above, side);
            sibling = tree.child(above, side.opposite());
        }

        let near = tree.child(sibling, side);
        let far = tree.child(sibling, side.opposite());

        if !is_red(tree, near) && !is_red(tree, far) {
            // Both nephews black: push the deficit to the parent.
            set_colour(tree, sibling, Colour::Red);
            cursor = above;
            above = tree.parent_of(cursor);
            continue;
        }

        if !is_red(tree, far) {
            // Near nephew red, far black: rotate the sibling so the red
            // nephew faces away, reducing to the terminal case.
            set_colour(tree, near, Colour::Black);
            set_colour(tree, sibling, Colour::Red);
            tree.rotate(sibling, side.opposite());
            sibling = tree.child(above, side.opposite());
        }

        let far_after = tree.child(sibling, side.opposite());
        set_colour(tree, sibling, colour_of(tree, above));
        set_colour(tree, above, Colour::Black);
        set_colour(tree, far_after, Colour::Black);
        tree.rotate(above, side);
        cursor = tree.root;
    }

    set_colour(tree, cursor, Colour::Black);
}
