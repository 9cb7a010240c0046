//! # llrb-map
//!
//! An ordered map backed by a left-leaning red-black tree.
//!
//! ## Overview
//!
//! Dependency-graph scheduling needs a sorted, deterministic view of pending
//! work that can be probed, extended and drained from either end. This crate
//! provides that view:
//!
//! - **Point operations**: `put`, `get`, `contains_key`, `delete`
//! - **Extremes**: `min_key`, `max_key`, `delete_min`, `delete_max`
//! - **Traversal**: lazy ascending iteration over entries, keys and values
//!
//! Every operation runs in O(log N) time and leaves the tree balanced.
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support
//! - `invariant-checks`: Validate the tree after every mutation
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use llrb_map::prelude::*;
//!
//! let mut map = OrderedMap::new();
//! map.put(2, "b");
//! map.put(1, "a");
//!
//! assert_eq!(map.min_key(), Some(&1));
//! assert_eq!(map.max_key(), Some(&2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use llrb_map::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ordered::*;
}

pub mod ordered;
