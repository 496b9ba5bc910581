//! The operation surface shared by every map the benchmark harness can drive.

use crate::hash_table::{ChainedHashMap, SlotHash};
use crate::red_black_tree::RedBlackMap;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// A mutable key-value container.
///
/// # Examples
///
/// ```
/// use dictionaries::dictionary::Dictionary;
/// use dictionaries::hash_table::ChainedHashMap;
/// use dictionaries::red_black_tree::RedBlackMap;
///
/// fn fill<D: Dictionary<u32, u32>>(dictionary: &mut D) {
///     for key in 0..10 {
///         dictionary.insert(key, key * 10);
///     }
/// }
///
/// let mut tree = RedBlackMap::new();
/// let mut table = ChainedHashMap::new();
/// fill(&mut tree);
/// fill(&mut table);
/// assert_eq!(Dictionary::find(&tree, &4), Dictionary::find(&table, &4));
/// ```
pub trait Dictionary<K, V> {
    /// Inserts or overwrites a value. Returns `true` if the key was new.
    fn insert(&mut self, key: K, value: V) -> bool;

    fn find(&self, key: &K) -> Option<&V>;

    /// Removes a key. Returns `true` if it was present.
    fn erase(&mut self, key: &K) -> bool;

    fn clear(&mut self);

    fn size(&self) -> usize;
}

impl<K, V> Dictionary<K, V> for RedBlackMap<K, V>
where
    K: Ord,
{
    fn insert(&mut self, key: K, value: V) -> bool {
        RedBlackMap::insert(self, key, value)
    }

    fn find(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn erase(&mut self, key: &K) -> bool {
        RedBlackMap::erase(self, key)
    }

    fn clear(&mut self) {
        RedBlackMap::clear(self);
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> Dictionary<K, V> for ChainedHashMap<K, V>
where
    K: SlotHash + Eq,
{
    fn insert(&mut self, key: K, value: V) -> bool {
        ChainedHashMap::insert(self, key, value)
    }

    fn find(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn erase(&mut self, key: &K) -> bool {
        ChainedHashMap::erase(self, key)
    }

    fn clear(&mut self) {
        ChainedHashMap::clear(self);
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> Dictionary<K, V> for BTreeMap<K, V>
where
    K: Ord,
{
    fn insert(&mut self, key: K, value: V) -> bool {
        BTreeMap::insert(self, key, value).is_none()
    }

    fn find(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn erase(&mut self, key: &K) -> bool {
        self.remove(key).is_some()
    }

    fn clear(&mut self) {
        BTreeMap::clear(self);
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> Dictionary<K, V> for HashMap<K, V>
where
    K: Hash + Eq,
{
    fn insert(&mut self, key: K, value: V) -> bool {
        HashMap::insert(self, key, value).is_none()
    }

    fn find(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn erase(&mut self, key: &K) -> bool {
        self.remove(key).is_some()
    }

    fn clear(&mut self) {
        HashMap::clear(self);
    }

    fn size(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::Dictionary;
    use crate::hash_table::ChainedHashMap;
    use crate::red_black_tree::RedBlackMap;
    use std::collections::{BTreeMap, HashMap};

    fn exercise<D>(mut dictionary: D)
    where
        D: Dictionary<i32, i32>,
    {
        assert!(dictionary.insert(1, 10));
        assert!(!dictionary.insert(1, 20));
        assert!(dictionary.insert(2, 30));
        assert_eq!(dictionary.size(), 2);
        assert_eq!(dictionary.find(&1), Some(&20));
        assert!(dictionary.erase(&1));
        assert!(!dictionary.erase(&1));
        assert_eq!(dictionary.find(&1), None);
        dictionary.clear();
        assert_eq!(dictionary.size(), 0);
        assert_eq!(dictionary.find(&2), None);
    }

    #[test]
    fn test_red_black_map() {
        exercise(RedBlackMap::new());
    }

    #[test]
    fn test_chained_hash_map() {
        exercise(ChainedHashMap::new());
    }

    #[test]
    fn test_std_maps() {
        exercise(BTreeMap::new());
        exercise(HashMap::new());
    }
}
