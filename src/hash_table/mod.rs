//! Hash table that resolves collisions by chaining entries in every slot, growing by doubling
//! once it is three quarters full.

mod hasher;
mod map;

pub use self::hasher::{Hashed, SlotHash, KNUTH_MULTIPLIER, POLYNOMIAL_BASE};
pub use self::map::{ChainedHashMap, ChainedHashMapIter};
