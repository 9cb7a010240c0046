//! Ordered key-value storage for scheduling data.
//!
//! This module provides [`OrderedMap`], a map kept sorted by key with a
//! left-leaning red-black tree. Graph and scheduling code uses it to hold a
//! deterministic, sorted view of pending work:
//!
//! - [`OrderedMap`]: the map itself
//! - [`Iter`] / [`IntoIter`]: ascending in-order iterators
//! - [`TreeShape`] / [`Color`]: structural snapshots of the tree
//!
//! # Examples
//!
//! ```rust
//! use llrb_map::ordered::OrderedMap;
//!
//! let mut pending = OrderedMap::new();
//! pending.put(30, "restart service");
//! pending.put(10, "install package");
//! pending.put(20, "write config");
//!
//! // Work comes out in key order, not insertion order
//! assert_eq!(pending.delete_min(), Some("install package"));
//! assert_eq!(pending.delete_min(), Some("write config"));
//!
//! // Absent keys are reported, never an error
//! assert_eq!(pending.delete(&99), None);
//! assert_eq!(pending.len(), 1);
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` as a map in ascending key order
//! - `invariant-checks`: validate the whole tree after every mutation and
//!   panic (after a `tracing` error event) if it is corrupted

#[cfg(any(test, feature = "invariant-checks"))]
mod invariants;
mod iter;
mod map;
mod node;
mod shape;

pub use iter::IntoIter;
pub use iter::Iter;
pub use map::OrderedMap;
pub use node::Color;
pub use shape::TreeShape;
