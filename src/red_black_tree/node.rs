use crate::entry::Entry;

/// Index of a node inside the tree's pool.
pub type NodeId = usize;

/// The sentinel slot. It is the first slot the pool hands out and is never released.
pub const NIL: NodeId = 0;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Which child slot of a node is being addressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A struct representing a node of a red black tree. Links are pool indices; absent children
/// and the parent of the root point at `NIL`.
pub struct Node<T, U> {
    pub entry: Option<Entry<T, U>>,
    pub color: Color,
    pub left: NodeId,
    pub right: NodeId,
    pub parent: NodeId,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Some(Entry { key, value }),
            color: Color::Red,
            left: NIL,
            right: NIL,
            parent: NIL,
        }
    }

    // Black, entry-less, linked to itself.
    pub fn sentinel() -> Self {
        Node {
            entry: None,
            color: Color::Black,
            left: NIL,
            right: NIL,
            parent: NIL,
        }
    }

    pub fn child(&self, side: Side) -> NodeId {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn set_child(&mut self, side: Side, child: NodeId) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}
