//! Order-statistic red-black tree collections for Rust.
//!
//! This crate provides [`OSRBTreeMap`] and [`OSRBTreeSet`], ordered collections whose API
//! mirrors the standard library's `BTreeMap` and `BTreeSet`, extended with O(log n)
//! order-statistic operations:
//!
//! - [`select`](OSRBTreeMap::select) - Get the key at a given sorted position
//! - [`rank`](OSRBTreeMap::rank) - Count the keys strictly less than a given key
//! - [`floor`](OSRBTreeMap::floor) / [`ceiling`](OSRBTreeMap::ceiling) - Nearest keys
//! - [`range_count`](OSRBTreeMap::range_count) - Count the keys in a closed interval
//! - [`k_smallest`](OSRBTreeMap::k_smallest) / [`k_largest`](OSRBTreeMap::k_largest) -
//!   Lazily walk the first or last `k` keys
//! - Indexing by [`Rank`] - e.g., `map[Rank(0)]` for the first element
//!
//! # Example
//!
//! ```
//! use llrb_tree::{OSRBTreeMap, Rank};
//!
//! let mut scores = OSRBTreeMap::new();
//! scores.insert("Alice", 100);
//! scores.insert("Bob", 85);
//! scores.insert("Carol", 92);
//!
//! // Standard BTreeMap operations work as expected
//! assert_eq!(scores.get(&"Bob"), Some(&85));
//! assert_eq!(scores.len(), 3);
//!
//! // Order-statistic operations (O(log n))
//! assert_eq!(scores.select(1), Some(&"Bob"));
//! assert_eq!(scores.rank(&"Carol"), 2);
//! assert_eq!(scores.range_count(&"B", &"D"), 2);
//!
//! // Index by rank
//! assert_eq!(scores[Rank(0)], 100);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Familiar API** - Mirrors `std::collections::BTreeMap`/`BTreeSet`
//! - **O(log n) rank operations** - Subtree size augmentation at every node
//! - **Self-checking** - [`OSRBTreeMap::check`] verifies every structural invariant
//!
//! # Implementation
//!
//! The collections are left-leaning red-black trees: every 3-node of the equivalent 2-3 tree
//! is represented by a red link leaning left. Each node owns its two children and records the
//! size of the subtree rooted at it, enabling rank-based access without full traversal.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod order_statistic;
mod raw;

pub mod osrbtree_map;
pub mod osrbtree_set;

pub use error::{InvariantViolation, TreeError};
pub use order_statistic::Rank;
pub use osrbtree_map::OSRBTreeMap;
pub use osrbtree_set::OSRBTreeSet;
