use crate::red_black_tree::node::{Color, NodeId};
use crate::red_black_tree::tree::Tree;

/// Restores the no-red-red property after `z` was linked in as a red leaf.
pub fn insert_fixup<T, U>(tree: &mut Tree<T, U>, mut z: NodeId) {
    while tree.color(tree.parent(z)) == Color::Red {
        let parent = tree.parent(z);
        let grandparent = tree.parent(parent);
        let side = tree.side_of(parent);
        let uncle = tree.child(grandparent, side.opposite());

        if tree.color(uncle) == Color::Red {
            tree.set_color(parent, Color::Black);
            tree.set_color(uncle, Color::Black);
            tree.set_color(grandparent, Color::Red);
            z = grandparent;
        } else {
            // inner grandchild: straighten the zig-zag first
            if z == tree.child(parent, side.opposite()) {
                z = parent;
                tree.rotate(z, side);
            }
            let parent = tree.parent(z);
            let grandparent = tree.parent(parent);
            tree.set_color(parent, Color::Black);
            tree.set_color(grandparent, Color::Red);
            tree.rotate(grandparent, side.opposite());
        }
    }
    let root = tree.root();
    tree.set_color(root, Color::Black);
}

/// Restores equal black heights after a black node left the tree. `x` occupies the vacated
/// position and may be the sentinel.
pub fn remove_fixup<T, U>(tree: &mut Tree<T, U>, mut x: NodeId) {
    while x != tree.root() && tree.color(x) == Color::Black {
        let parent = tree.parent(x);
        let side = tree.side_of(x);
        let mut sibling = tree.child(parent, side.opposite());

        if tree.color(sibling) == Color::Red {
            tree.set_color(sibling, Color::Black);
            tree.set_color(parent, Color::Red);
            tree.rotate(parent, side);
            sibling = tree.child(parent, side.opposite());
        }

        let near = tree.child(sibling, side);
        let far = tree.child(sibling, side.opposite());
        if tree.color(near) == Color::Black && tree.color(far) == Color::Black {
            tree.set_color(sibling, Color::Red);
            x = parent;
        } else {
            if tree.color(far) == Color::Black {
                tree.set_color(near, Color::Black);
                tree.set_color(sibling, Color::Red);
                tree.rotate(sibling, side.opposite());
                sibling = tree.child(parent, side.opposite());
            }
            let parent_color = tree.color(parent);
            let far = tree.child(sibling, side.opposite());
            tree.set_color(sibling, parent_color);
            tree.set_color(parent, Color::Black);
            tree.set_color(far, Color::Black);
            tree.rotate(parent, side);
            x = tree.root();
        }
    }
    tree.set_color(x, Color::Black);
}
