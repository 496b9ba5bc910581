//! # dictionaries
//!
//! Key-value containers built around a pooled node arena, and a harness that benchmarks them
//! against the standard library maps.
//!
//! - `RedBlackMap`: an ordered map backed by a red-black tree whose nodes live in a `Pool` and
//!   link to each other through indices, with a shared black sentinel at index 0.
//! - `ChainedHashMap`: a separately chained hash table that doubles its slots at a load factor
//!   of 0.75.
//! - `Dictionary`: the operation surface the harness drives, implemented for both containers and
//!   for `BTreeMap` and `HashMap`.

mod entry;
pub mod bench;
pub mod dictionary;
pub mod hash_table;
pub mod pool;
pub mod red_black_tree;
