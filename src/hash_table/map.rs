use crate::entry::Entry;
use crate::hash_table::hasher::SlotHash;
use log::debug;
use std::borrow::Borrow;
use std::mem;
use std::ops::Index;
use std::slice;

const DEFAULT_SLOTS: usize = 16;
const MAX_LOAD_FACTOR: f32 = 0.75;

type Chain<T, U> = Option<Box<Link<T, U>>>;

struct Link<T, U> {
    entry: Entry<T, U>,
    next: Chain<T, U>,
}

fn empty_table<T, U>(slots: usize) -> Vec<Chain<T, U>> {
    let mut table = Vec::with_capacity(slots);
    for _ in 0..slots {
        table.push(None);
    }
    table
}

/// An unordered map implemented using a hash table with separate chaining.
///
/// Every slot of the table holds a singly linked chain of the entries whose keys hash to it, with
/// the newest entry at the front. Before each insertion the table doubles its slot count if the
/// number of entries has reached three quarters of it, and every link is moved into its new slot.
///
/// # Examples
///
/// ```
/// use dictionaries::hash_table::ChainedHashMap;
///
/// let mut map = ChainedHashMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// *map.get_mut(&0).unwrap() = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct ChainedHashMap<T, U> {
    table: Vec<Chain<T, U>>,
    len: usize,
}

impl<T, U> ChainedHashMap<T, U> {
    /// Constructs a new, empty `ChainedHashMap<T, U>` with 16 slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use dictionaries::hash_table::ChainedHashMap;
    ///
    /// let map: ChainedHashMap<u32, u32> = ChainedHashMap::new();
    /// assert_eq!(map.slot_count(), 16);
    /// ```
    pub fn new() -> Self {
        Self::with_slots(DEFAULT_SLOTS)
    }

    /// Constructs a new, empty `ChainedHashMap<T, U>` with a specific number of slots. A slot
    /// count of zero is raised to one.
    ///
    /// # Examples
    ///
    /// ```
    /// use dictionaries::hash_table::ChainedHashMap;
    ///
    /// let map: ChainedHashMap<u32, u32> = ChainedHashMap::with_slots(64);
    /// assert_eq!(map.slot_count(), 64);
    /// ```
    pub fn with_slots(slots: usize) -> Self {
        ChainedHashMap {
            table: empty_table(slots.max(1)),
            len: 0,
        }
    }

    fn slot_index<V>(&self, key: &V) -> usize
    where
        V: SlotHash + ?Sized,
    {
        (key.slot_hash() % self.table.len() as u64) as usize
    }

    fn resize(&mut self)
    where
        T: SlotHash,
    {
        let slots = self.table.len() * 2;
        let old_table = mem::replace(&mut self.table, empty_table(slots));
        for mut chain in old_table {
            while let Some(mut link) = chain {
                chain = link.next.take();
                let index = self.slot_index(&link.entry.key);
                link.next = self.table[index].take();
                self.table[index] = Some(link);
            }
        }
        debug!("Resized hash table to {} slots holding {} entries.", slots, self.len);
    }

    /// Inserts a key-value pair into the map. Returns `true` if the key was not present. If the
    /// key already exists, its value is overwritten and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use dictionaries::hash_table::ChainedHashMap;
    ///
    /// let mut map = ChainedHashMap::new();
    /// assert!(map.insert(1, 1));
    /// assert!(!map.insert(1, 2));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> bool
    where
        T: SlotHash + Eq,
    {
        if self.len as f32 >= self.table.len() as f32 * MAX_LOAD_FACTOR {
            self.resize();
        }

        let index = self.slot_index(&key);
        let mut curr = self.table[index].as_mut();
        while let Some(link) = curr {
            if link.entry.key == key {
                link.entry.value = value;
                return false;
            }
            curr = link.next.as_mut();
        }

        let next = self.table[index].take();
        self.table[index] = Some(Box::new(Link {
            entry: Entry::new(key, value),
            next,
        }));
        self.len += 1;
        true
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dictionaries::hash_table::ChainedHashMap;
    ///
    /// let mut map = ChainedHashMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: SlotHash + Eq + ?Sized,
    {
        let index = self.slot_index(key);
        let mut curr = &mut self.table[index];
        while curr
            .as_ref()
            .map_or(false, |link| link.entry.key.borrow() != key)
        {
            curr = &mut curr.as_mut().expect("Expected a non-empty chain.").next;
        }

        let Link { entry, next } = *curr.take()?;
        *curr = next;
        self.len -= 1;
        Some(entry.into_pair())
    }

    /// Removes a key from the map. Returns `true` if the key was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use dictionaries::hash_table::ChainedHashMap;
    ///
    /// let mut map = ChainedHashMap::new();
    /// map.insert(1, 1);
    /// assert!(map.erase(&1));
    /// assert!(!map.erase(&1));
    /// ```
    pub fn erase<V>(&mut self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: SlotHash + Eq + ?Sized,
    {
        self.remove(key).is_some()
    }

    /// Checks if a key exists in the map.
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: SlotHash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. Returns
    /// `None` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use dictionaries::hash_table::ChainedHashMap;
    ///
    /// let mut map = ChainedHashMap::new();
    /// map.insert(String::from("apple"), 5);
    /// assert_eq!(map.get("apple"), Some(&5));
    /// assert_eq!(map.get("pear"), None);
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: SlotHash + Eq + ?Sized,
    {
        let mut curr = self.table[self.slot_index(key)].as_ref();
        while let Some(link) = curr {
            if link.entry.key.borrow() == key {
                return Some(&link.entry.value);
            }
            curr = link.next.as_ref();
        }
        None
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: SlotHash + Eq + ?Sized,
    {
        let index = self.slot_index(key);
        let mut curr = self.table[index].as_mut();
        while let Some(link) = curr {
            if link.entry.key.borrow() == key {
                return Some(&mut link.entry.value);
            }
            curr = link.next.as_mut();
        }
        None
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the table.
    pub fn slot_count(&self) -> usize {
        self.table.len()
    }

    /// Returns the fraction of the slot count the map may fill before it grows.
    pub fn max_load_factor(&self) -> f32 {
        MAX_LOAD_FACTOR
    }

    /// Clears the map, removing all values. The slot count is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use dictionaries::hash_table::ChainedHashMap;
    ///
    /// let mut map = ChainedHashMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        for slot in &mut self.table {
            // unlink one at a time so long chains do not drop recursively
            while let Some(mut link) = slot.take() {
                *slot = link.next.take();
            }
        }
        self.len = 0;
    }

    /// Returns an iterator over the map. Entries are yielded in table order, which is unrelated
    /// to key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dictionaries::hash_table::ChainedHashMap;
    ///
    /// let mut map = ChainedHashMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut pairs = map.iter().collect::<Vec<_>>();
    /// pairs.sort();
    /// assert_eq!(pairs, vec![(&1, &1), (&2, &2)]);
    /// ```
    pub fn iter(&self) -> ChainedHashMapIter<'_, T, U> {
        ChainedHashMapIter {
            slots: self.table.iter(),
            current: None,
        }
    }
}

impl<T, U> Drop for ChainedHashMap<T, U> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a, T, U> IntoIterator for &'a ChainedHashMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = ChainedHashMapIter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `ChainedHashMap<T, U>`.
///
/// This iterator walks the table slot by slot and yields immutable references.
pub struct ChainedHashMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    slots: slice::Iter<'a, Chain<T, U>>,
    current: Option<&'a Link<T, U>>,
}

impl<'a, T, U> Iterator for ChainedHashMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(link) = self.current {
                self.current = link.next.as_ref().map(|link| &**link);
                return Some((&link.entry.key, &link.entry.value));
            }
            match self.slots.next() {
                Some(chain) => self.current = chain.as_ref().map(|link| &**link),
                None => return None,
            }
        }
    }
}

impl<T, U> Default for ChainedHashMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, U, V> Index<&'a V> for ChainedHashMap<T, U>
where
    T: Borrow<V>,
    V: SlotHash + Eq + ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}
