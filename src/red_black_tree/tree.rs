use crate::entry::Entry;
use crate::pool::Pool;
use crate::red_black_tree::fixup;
use crate::red_black_tree::node::{Color, Node, NodeId, Side, NIL};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

/// Where a key lives in the tree, or where it would be linked if it were inserted.
pub enum SearchOutcome {
    Found(NodeId),
    Vacant { parent: NodeId, side: Side },
}

/// An ordered binary search tree over pooled nodes. Slot `NIL` of the pool holds the sentinel;
/// every other occupied slot is reachable from `root`.
pub struct Tree<T, U> {
    pool: Pool<Node<T, U>>,
    root: NodeId,
    len: usize,
}

impl<T, U> Tree<T, U> {
    pub fn with_capacity(capacity: usize) -> Self {
        let mut pool = Pool::with_capacity(capacity.saturating_add(1));
        let sentinel = pool.acquire(Node::sentinel());
        debug_assert_eq!(sentinel, NIL);
        Tree {
            pool,
            root: NIL,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    // Slots allocated for real nodes, live or retired.
    pub fn capacity(&self) -> usize {
        self.pool.capacity() - 1
    }

    pub fn free_nodes(&self) -> usize {
        self.pool.vacant()
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node<T, U> {
        &self.pool[id]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node<T, U> {
        &mut self.pool[id]
    }

    pub fn parent(&self, id: NodeId) -> NodeId {
        self.pool[id].parent
    }

    pub fn child(&self, id: NodeId, side: Side) -> NodeId {
        self.pool[id].child(side)
    }

    pub fn color(&self, id: NodeId) -> Color {
        self.pool[id].color
    }

    pub fn set_color(&mut self, id: NodeId, color: Color) {
        self.pool[id].color = color;
    }

    // The side of its parent that `id` hangs from. Also valid for `NIL` right after it has been
    // spliced into a vacated slot, since its parent link then names that slot's owner.
    pub fn side_of(&self, id: NodeId) -> Side {
        if self.child(self.parent(id), Side::Left) == id {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub fn entry(&self, id: NodeId) -> Option<&Entry<T, U>> {
        self.pool[id].entry.as_ref()
    }

    fn entry_mut(&mut self, id: NodeId) -> &mut Entry<T, U> {
        self.pool[id]
            .entry
            .as_mut()
            .expect("Expected a non-sentinel node.")
    }

    fn key(&self, id: NodeId) -> &T {
        &self
            .entry(id)
            .expect("Expected a non-sentinel node.")
            .key
    }

    pub fn search<V>(&self, key: &V) -> NodeId
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        while curr != NIL {
            match key.cmp(self.key(curr).borrow()) {
                Ordering::Less => curr = self.pool[curr].left,
                Ordering::Greater => curr = self.pool[curr].right,
                Ordering::Equal => return curr,
            }
        }
        NIL
    }

    pub fn locate(&self, key: &T) -> SearchOutcome
    where
        T: Ord,
    {
        let mut parent = NIL;
        let mut side = Side::Left;
        let mut curr = self.root;
        while curr != NIL {
            parent = curr;
            side = match key.cmp(self.key(curr)) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return SearchOutcome::Found(curr),
            };
            curr = self.child(curr, side);
        }
        SearchOutcome::Vacant { parent, side }
    }

    // Acquires a node before touching any link, so an allocation failure leaves the tree intact.
    fn link(&mut self, parent: NodeId, side: Side, key: T, value: U) -> NodeId {
        let id = self.pool.acquire(Node::new(key, value));
        self.pool[id].parent = parent;
        if parent == NIL {
            self.root = id;
        } else {
            self.pool[parent].set_child(side, id);
        }
        self.len += 1;
        fixup::insert_fixup(self, id);
        id
    }

    /// Inserts a key-value pair, returning the previous value if the key was already present.
    /// An existing key keeps its node and only has its value overwritten.
    pub fn insert(&mut self, key: T, value: U) -> Option<U>
    where
        T: Ord,
    {
        match self.locate(&key) {
            SearchOutcome::Found(id) => Some(mem::replace(&mut self.entry_mut(id).value, value)),
            SearchOutcome::Vacant { parent, side } => {
                self.link(parent, side, key, value);
                None
            },
        }
    }

    pub fn get_or_insert_with<F>(&mut self, key: T, default: F) -> &mut U
    where
        T: Ord,
        F: FnOnce() -> U,
    {
        let id = match self.locate(&key) {
            SearchOutcome::Found(id) => id,
            SearchOutcome::Vacant { parent, side } => self.link(parent, side, key, default()),
        };
        &mut self.entry_mut(id).value
    }

    pub fn get<V>(&self, key: &V) -> Option<&Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.entry(self.search(key))
    }

    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let id = self.search(key);
        self.pool[id].entry.as_mut()
    }

    /// Removes the node holding `key` and hands its slot back to the pool.
    pub fn remove<V>(&mut self, key: &V) -> Option<Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let z = self.search(key);
        if z == NIL {
            return None;
        }

        let (left, right) = (self.pool[z].left, self.pool[z].right);
        let mut removed_color = self.pool[z].color;
        let x;

        if left == NIL {
            x = right;
            self.transplant(z, right);
        } else if right == NIL {
            x = left;
            self.transplant(z, left);
        } else {
            let y = self.minimum(right);
            removed_color = self.pool[y].color;
            x = self.pool[y].right;

            if self.pool[y].parent == z {
                self.pool[x].parent = y;
            } else {
                self.transplant(y, x);
                self.pool[y].right = right;
                self.pool[right].parent = y;
            }
            self.transplant(z, y);
            self.pool[y].left = left;
            self.pool[left].parent = y;
            self.pool[y].color = self.pool[z].color;
        }

        self.len -= 1;
        if removed_color == Color::Black {
            fixup::remove_fixup(self, x);
        }

        let node = self.pool.release(z);
        node.entry
    }

    /// Releases every live node to the pool without recursion.
    pub fn clear(&mut self) {
        let mut stack = Vec::new();
        if self.root != NIL {
            stack.push(self.root);
        }
        while let Some(id) = stack.pop() {
            let node = self.pool.release(id);
            if node.left != NIL {
                stack.push(node.left);
            }
            if node.right != NIL {
                stack.push(node.right);
            }
        }
        self.root = NIL;
        self.len = 0;
        self.pool[NIL] = Node::sentinel();
    }

    /// Promotes the child of `x` opposite to `side` into `x`'s position, moving `x` down on
    /// `side`. `rotate(x, Side::Left)` is the classic left rotation.
    pub fn rotate(&mut self, x: NodeId, side: Side) {
        let y = self.child(x, side.opposite());
        let inner = self.child(y, side);
        self.pool[x].set_child(side.opposite(), inner);
        if inner != NIL {
            self.pool[inner].parent = x;
        }
        let parent = self.pool[x].parent;
        self.pool[y].parent = parent;
        self.replace_child(parent, x, y);
        self.pool[y].set_child(side, x);
        self.pool[x].parent = y;
    }

    pub fn rotate_left(&mut self, x: NodeId) {
        self.rotate(x, Side::Left);
    }

    pub fn rotate_right(&mut self, x: NodeId) {
        self.rotate(x, Side::Right);
    }

    fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        if parent == NIL {
            self.root = new;
        } else if self.pool[parent].left == old {
            self.pool[parent].left = new;
        } else {
            self.pool[parent].right = new;
        }
    }

    /// Puts the subtree rooted at `v` in the slot of `u`'s parent that held `u`. The children of
    /// `v` are left alone.
    pub fn transplant(&mut self, u: NodeId, v: NodeId) {
        let parent = self.pool[u].parent;
        self.replace_child(parent, u, v);
        self.pool[v].parent = parent;
    }

    pub fn minimum(&self, mut id: NodeId) -> NodeId {
        while self.pool[id].left != NIL {
            id = self.pool[id].left;
        }
        id
    }

    pub fn maximum(&self, mut id: NodeId) -> NodeId {
        while self.pool[id].right != NIL {
            id = self.pool[id].right;
        }
        id
    }

    pub fn floor<V>(&self, key: &V) -> Option<&Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        let mut best = NIL;
        while curr != NIL {
            match key.cmp(self.key(curr).borrow()) {
                Ordering::Less => curr = self.pool[curr].left,
                Ordering::Greater => {
                    best = curr;
                    curr = self.pool[curr].right;
                },
                Ordering::Equal => return self.entry(curr),
            }
        }
        self.entry(best)
    }

    pub fn ceil<V>(&self, key: &V) -> Option<&Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        let mut best = NIL;
        while curr != NIL {
            match key.cmp(self.key(curr).borrow()) {
                Ordering::Greater => curr = self.pool[curr].right,
                Ordering::Less => {
                    best = curr;
                    curr = self.pool[curr].left;
                },
                Ordering::Equal => return self.entry(curr),
            }
        }
        self.entry(best)
    }

    #[cfg(test)]
    pub fn assert_invariants(&self)
    where
        T: Ord,
    {
        let sentinel = &self.pool[NIL];
        assert_eq!(sentinel.color, Color::Black, "sentinel must be black");
        assert_eq!(sentinel.left, NIL);
        assert_eq!(sentinel.right, NIL);
        assert!(sentinel.entry.is_none());

        if self.root == NIL {
            assert_eq!(self.len, 0);
        } else {
            assert_eq!(self.pool[self.root].color, Color::Black, "root must be black");
            assert_eq!(self.pool[self.root].parent, NIL);
        }

        let (count, _) = self.check_subtree(self.root, None, None);
        assert_eq!(count, self.len, "len must match reachable nodes");
        assert_eq!(self.pool.len(), self.len + 1);
        assert_eq!(self.len() + self.free_nodes(), self.capacity());
    }

    // Returns the node count and black height of the subtree rooted at `id`.
    #[cfg(test)]
    fn check_subtree(&self, id: NodeId, lower: Option<&T>, upper: Option<&T>) -> (usize, usize)
    where
        T: Ord,
    {
        if id == NIL {
            return (0, 0);
        }
        let node = &self.pool[id];
        let key = self.key(id);
        if let Some(lower) = lower {
            assert!(lower < key, "keys must be strictly increasing in-order");
        }
        if let Some(upper) = upper {
            assert!(key < upper, "keys must be strictly increasing in-order");
        }
        for &child in &[node.left, node.right] {
            if child != NIL {
                assert_eq!(self.pool[child].parent, id, "parent link out of sync");
                if node.color == Color::Red {
                    assert_eq!(self.pool[child].color, Color::Black, "red node with red child");
                }
            }
        }

        let (left_count, left_height) = self.check_subtree(node.left, lower, Some(key));
        let (right_count, right_height) = self.check_subtree(node.right, Some(key), upper);
        assert_eq!(left_height, right_height, "black heights differ");

        let own = if node.color == Color::Black { 1 } else { 0 };
        (left_count + right_count + 1, left_height + own)
    }
}

#[cfg(test)]
mod tests {
    use super::{SearchOutcome, Tree};
    use crate::red_black_tree::node::{Color, Side, NIL};

    fn key_at(tree: &Tree<u32, u32>, id: usize) -> u32 {
        tree.entry(id).unwrap().key
    }

    #[test]
    fn test_empty_tree() {
        let tree: Tree<u32, u32> = Tree::with_capacity(0);
        assert_eq!(tree.root(), NIL);
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.capacity(), 0);
        tree.assert_invariants();
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_with_max_capacity() {
        let _: Tree<u32, u32> = Tree::with_capacity(usize::max_value());
    }

    #[test]
    fn test_locate() {
        let mut tree = Tree::with_capacity(4);
        tree.insert(10, 100);
        tree.insert(5, 50);
        match tree.locate(&5) {
            SearchOutcome::Found(id) => assert_eq!(key_at(&tree, id), 5),
            SearchOutcome::Vacant { .. } => panic!("Expected 5 to be found."),
        }
        match tree.locate(&7) {
            SearchOutcome::Vacant { parent, side } => {
                assert_eq!(key_at(&tree, parent), 5);
                assert_eq!(side, Side::Right);
            },
            SearchOutcome::Found(_) => panic!("Expected 7 to be absent."),
        }
    }

    #[test]
    fn test_rotate_left_and_right() {
        let mut tree = Tree::with_capacity(3);
        tree.insert(2, 0);
        tree.insert(1, 0);
        tree.insert(3, 0);
        let root = tree.root();

        tree.rotate_left(root);
        assert_eq!(key_at(&tree, tree.root()), 3);
        assert_eq!(tree.child(tree.root(), Side::Left), root);
        assert_eq!(tree.parent(root), tree.root());
        assert_eq!(key_at(&tree, tree.child(root, Side::Left)), 1);

        tree.rotate_right(tree.root());
        assert_eq!(tree.root(), root);
        assert_eq!(tree.parent(root), NIL);
        assert_eq!(key_at(&tree, tree.child(root, Side::Right)), 3);
    }

    #[test]
    fn test_transplant_keeps_children() {
        let mut tree = Tree::with_capacity(3);
        tree.insert(2, 0);
        tree.insert(1, 0);
        tree.insert(3, 0);
        let root = tree.root();
        let right = tree.child(root, Side::Right);

        tree.transplant(root, right);
        assert_eq!(tree.root(), right);
        assert_eq!(tree.parent(right), NIL);
        assert_eq!(tree.child(right, Side::Left), NIL);
    }

    #[test]
    fn test_increasing_inserts_stay_balanced() {
        let mut tree = Tree::with_capacity(0);
        for key in 0..1024 {
            tree.insert(key, key);
            tree.assert_invariants();
        }
        let (_, black_height) = tree.check_subtree(tree.root(), None, None);
        assert!(black_height <= 11);
    }

    #[test]
    fn test_remove_root_with_two_children() {
        let mut tree = Tree::with_capacity(3);
        tree.insert(10, 100);
        tree.insert(5, 50);
        tree.insert(15, 150);
        assert_eq!(tree.remove(&10).map(|entry| entry.into_pair()), Some((10, 100)));
        assert_eq!(key_at(&tree, tree.root()), 15);
        assert_eq!(tree.color(tree.root()), Color::Black);
        tree.assert_invariants();
    }

    #[test]
    fn test_remove_last_node() {
        let mut tree = Tree::with_capacity(1);
        tree.insert(1, 1);
        assert!(tree.remove(&1).is_some());
        assert_eq!(tree.root(), NIL);
        assert_eq!(tree.free_nodes(), 1);
        tree.assert_invariants();
    }

    #[test]
    fn test_clear_releases_all_nodes() {
        let mut tree = Tree::with_capacity(0);
        for key in 0..100 {
            tree.insert(key, key);
        }
        tree.clear();
        assert_eq!(tree.root(), NIL);
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.free_nodes(), 100);
        tree.assert_invariants();

        tree.insert(7, 7);
        assert_eq!(tree.capacity(), 100);
        tree.assert_invariants();
    }

    #[test]
    fn test_floor_ceil_minimum_maximum() {
        let mut tree = Tree::with_capacity(3);
        for key in &[1, 3, 5] {
            tree.insert(*key, 0);
        }
        assert_eq!(tree.floor(&0).map(|entry| entry.key), None);
        assert_eq!(tree.floor(&4).map(|entry| entry.key), Some(3));
        assert_eq!(tree.ceil(&4).map(|entry| entry.key), Some(5));
        assert_eq!(tree.ceil(&6).map(|entry| entry.key), None);
        assert_eq!(key_at(&tree, tree.minimum(tree.root())), 1);
        assert_eq!(key_at(&tree, tree.maximum(tree.root())), 5);
    }
}
