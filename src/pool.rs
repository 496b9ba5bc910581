//! Slot allocator that recycles freed slots instead of returning them to the system allocator.

use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

enum Slot<T> {
    Occupied(T),
    Vacant(Option<usize>),
}

/// A free-list allocator for objects of a single type, addressed by stable `usize` indices.
///
/// Released slots are threaded onto an intrusive free list and handed out again, most recently
/// released first, before the pool grows. The pool never shrinks: the backing storage of every
/// slot is kept until the pool itself is dropped. The container is a plain `Vec`, so indices stay
/// valid across growth and no unsafe code is needed.
///
/// # Examples
///
/// ```
/// use dictionaries::pool::Pool;
///
/// let mut pool = Pool::new();
///
/// let x = pool.acquire(1);
/// assert_eq!(pool[x], 1);
///
/// pool[x] += 1;
/// assert_eq!(pool[x], 2);
///
/// assert_eq!(pool.release(x), 2);
/// assert_eq!(pool.acquire(5), x);
/// ```
pub struct Pool<T> {
    head: Option<usize>,
    slots: Vec<Slot<T>>,
    len: usize,
}

impl<T> Pool<T> {
    /// Constructs a new, empty `Pool<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dictionaries::pool::Pool;
    ///
    /// let pool: Pool<u32> = Pool::new();
    /// assert_eq!(pool.capacity(), 0);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Constructs a new, empty `Pool<T>` whose backing storage can hold `capacity` objects before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Pool {
            head: None,
            slots: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    /// Stores an object in the pool and returns its index. A previously released slot is reused
    /// if one exists, otherwise a fresh slot is appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use dictionaries::pool::Pool;
    ///
    /// let mut pool = Pool::new();
    /// assert_eq!(pool.acquire('a'), 0);
    /// assert_eq!(pool.acquire('b'), 1);
    /// ```
    pub fn acquire(&mut self, value: T) -> usize {
        self.len += 1;
        match self.head.take() {
            None => {
                self.slots.push(Slot::Occupied(value));
                self.slots.len() - 1
            },
            Some(index) => {
                let vacant_slot = mem::replace(&mut self.slots[index], Slot::Occupied(value));
                match vacant_slot {
                    Slot::Vacant(next) => {
                        self.head = next;
                        index
                    },
                    Slot::Occupied(_) => panic!("Error: free list points at an occupied slot."),
                }
            },
        }
    }

    /// Moves an object out of the pool and retires its slot for reuse.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds or refers to a vacant slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use dictionaries::pool::Pool;
    ///
    /// let mut pool = Pool::new();
    /// let x = pool.acquire(0);
    /// assert_eq!(pool.release(x), 0);
    /// assert_eq!(pool.vacant(), 1);
    /// ```
    pub fn release(&mut self, index: usize) -> T {
        if index >= self.slots.len() {
            panic!("Error: attempting to release invalid slot.");
        }
        let old_slot = mem::replace(&mut self.slots[index], Slot::Vacant(self.head));
        match old_slot {
            Slot::Vacant(next) => {
                self.slots[index] = Slot::Vacant(next);
                panic!("Error: attempting to release vacant slot.");
            },
            Slot::Occupied(value) => {
                self.len -= 1;
                self.head = Some(index);
                value
            },
        }
    }

    /// Returns an immutable reference to an object in the pool, or `None` if `index` does not
    /// refer to an occupied slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use dictionaries::pool::Pool;
    ///
    /// let mut pool = Pool::new();
    /// let x = pool.acquire(0);
    /// assert_eq!(pool.get(x), Some(&0));
    /// assert_eq!(pool.get(x + 1), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        match self.slots.get(index) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to an object in the pool, or `None` if `index` does not refer
    /// to an occupied slot.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match self.slots.get_mut(index) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of retired slots waiting to be reused.
    pub fn vacant(&self) -> usize {
        self.slots.len() - self.len
    }

    /// Returns the total number of slots the pool has ever allocated.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Pool<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("Error: slot is vacant or out of bounds.")
    }
}

impl<T> IndexMut<usize> for Pool<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).expect("Error: slot is vacant or out of bounds.")
    }
}
