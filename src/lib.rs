//! Order-statistic binary search tree collections for Rust.
//!
//! This crate provides [`OSTreeMap`] and [`SplayTreeMap`]: ordered
//! key-value maps built on a binary search tree whose nodes carry subtree
//! sizes. The augmentation turns positional queries into O(height)
//! descents:
//!
//! - [`get_by_rank`](OSTreeMap::get_by_rank) - the element at a given
//!   sorted position
//! - [`rank_of`](OSTreeMap::rank_of) - the sorted position of a key
//! - Indexing by [`Rank`] - e.g., `map[Rank(0)]` for the first element
//!
//! Both maps also answer [`predecessor`](OSTreeMap::predecessor) /
//! [`successor`](OSTreeMap::successor) neighbor queries and the structural
//! [`lowest_common_ancestor`](OSTreeMap::lowest_common_ancestor) query.
//!
//! # Example
//!
//! ```
//! use ost_tree::{OSTreeMap, Rank};
//!
//! let mut scores = OSTreeMap::new();
//! scores.insert("Alice", 100);
//! scores.insert("Bob", 85);
//! scores.insert("Carol", 92);
//!
//! // Ordinary ordered-map operations.
//! assert_eq!(scores.get(&"Bob"), Some(&85));
//! assert_eq!(scores.len(), 3);
//!
//! // Order-statistic operations (O(height)).
//! let (name, score) = scores.get_by_rank(1).unwrap();
//! assert_eq!((*name, *score), ("Bob", 85));
//! assert_eq!(scores.rank_of(&"Carol"), Some(2));
//! assert_eq!(scores[Rank(0)], 100);
//! ```
//!
//! # Choosing a map
//!
//! [`OSTreeMap`] is the plain variant: no rebalancing at all, so costs are
//! O(height) and the height tracks the insertion order. [`SplayTreeMap`]
//! splays every inserted and every successfully looked-up entry to the
//! root, which gives amortized O(log n) access over a sequence and adapts
//! the shape to skewed workloads. Its splaying accessors take `&mut self`;
//! everything read-only is shared between the two variants.
//!
//! # Implementation
//!
//! Nodes live in a slot arena and link to each other (parent, left, right)
//! by index, so the cyclic parent relation costs no ownership gymnastics
//! and deleting a node is freeing its slot. All walks are iterative; a
//! degenerate tree can exhaust your patience but not the call stack. The
//! crate is `no_std` (requires `alloc`) and contains no unsafe code.

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

mod order_statistic;
mod raw;

pub mod ost_map;
pub mod splay_map;

pub use order_statistic::Rank;
pub use ost_map::OSTreeMap;
pub use splay_map::SplayTreeMap;
