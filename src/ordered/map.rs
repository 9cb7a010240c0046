//! The left-leaning red-black ordered map.
//!
//! # Internal Structure
//!
//! Every node carries the color of the link from its parent. The tree keeps
//! the following invariants after each public operation returns:
//!
//! 1. Keys in a left subtree are strictly smaller, keys in a right subtree
//!    strictly greater
//! 2. Red links only lean left, and no two red links are consecutive
//! 3. Every path from the root to an empty position crosses the same number
//!    of black links
//! 4. The root link is black
//!
//! Together these keep the height at most `2 * log2(n + 1)`.
//!
//! Mutations descend recursively, taking ownership of each subtree on the way
//! down and handing a possibly different subtree root back up, where the
//! parent reattaches it and rebalances its own level.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use super::iter::{IntoIter, Iter};
use super::node::{Color, Link, Node};
use super::shape::TreeShape;

// =============================================================================
// OrderedMap Definition
// =============================================================================

/// An ordered map backed by a left-leaning red-black tree.
///
/// Keys are unique and kept in ascending order; re-inserting a key replaces
/// its value. All lookups and mutations are O(log N); the structure is
/// single-threaded and callers sharing one instance must serialize access.
///
/// # Time Complexity
///
/// | Operation                   | Complexity |
/// |-----------------------------|------------|
/// | `new`                       | O(1)       |
/// | `get` / `contains_key`      | O(log N)   |
/// | `put`                       | O(log N)   |
/// | `delete`                    | O(log N)   |
/// | `delete_min` / `delete_max` | O(log N)   |
/// | `min_key` / `max_key`       | O(log N)   |
/// | `len` / `is_empty`          | O(1)       |
/// | `iter` (full traversal)     | O(N)       |
///
/// # Examples
///
/// ```rust
/// use llrb_map::ordered::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.put(3, "three");
/// map.put(1, "one");
/// map.put(2, "two");
///
/// let keys: Vec<&i32> = map.keys().collect();
/// assert_eq!(keys, vec![&1, &2, &3]);
///
/// assert_eq!(map.delete_min(), Some("one"));
/// assert_eq!(map.min_key(), Some(&2));
/// ```
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    root: Link<K, V>,
    length: usize,
}

impl<K, V> OrderedMap<K, V> {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::ordered::OrderedMap;
    ///
    /// let map: OrderedMap<i32, String> = OrderedMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.root = None;
        self.length = 0;
    }

    /// Returns the smallest key, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::ordered::OrderedMap;
    ///
    /// let map: OrderedMap<i32, ()> = [4, 8, 12, 3, 6, 2, -4, 7]
    ///     .into_iter()
    ///     .map(|key| (key, ()))
    ///     .collect();
    /// assert_eq!(map.min_key(), Some(&-4));
    /// ```
    #[must_use]
    pub fn min_key(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// Returns the largest key, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::ordered::OrderedMap;
    ///
    /// let map: OrderedMap<i32, ()> = [4, 8, 12, 3, 6, 2, -4, 7]
    ///     .into_iter()
    ///     .map(|key| (key, ()))
    ///     .collect();
    /// assert_eq!(map.max_key(), Some(&12));
    /// ```
    #[must_use]
    pub fn max_key(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Returns a lazy iterator over entries in ascending key order.
    ///
    /// Each call starts a fresh traversal; iterating never changes the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::ordered::OrderedMap;
    ///
    /// let map: OrderedMap<i32, String> = (1..=5).rev().map(|key| (key, key.to_string())).collect();
    ///
    /// let entries: Vec<(i32, String)> = map.iter().map(|(key, value)| (*key, value.clone())).collect();
    /// assert_eq!(entries, (1..=5).map(|key| (key, key.to_string())).collect::<Vec<_>>());
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_deref(), self.length)
    }

    /// Returns an iterator over keys in ascending order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over values in ascending key order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Returns an owned structural snapshot of the tree, or `None` if empty.
    ///
    /// The snapshot exposes each node's link color, which makes the exact
    /// outcome of the balancing rules observable.
    #[must_use]
    pub fn to_shape(&self) -> Option<TreeShape<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        self.root.as_deref().map(TreeShape::from_node)
    }

    fn blacken_root(&mut self) {
        if let Some(root) = self.root.as_deref_mut() {
            root.color = Color::Black;
        }
    }
}

impl<K: Ord, V> OrderedMap<K, V> {
    /// Returns a reference to the value stored under `key`.
    ///
    /// A `None` result means the key is absent; use [`Self::contains_key`]
    /// when the value type itself can represent "nothing".
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::ordered::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.put("hello".to_string(), 42);
    ///
    /// assert_eq!(map.get("hello"), Some(&42));
    /// assert_eq!(map.get("world"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root.as_deref();
        while let Some(current) = node {
            match key.cmp(current.key.borrow()) {
                Ordering::Less => node = current.left.as_deref(),
                Ordering::Greater => node = current.right.as_deref(),
                Ordering::Equal => return Some(&current.value),
            }
        }
        None
    }

    /// Returns `true` if the map holds an entry for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::ordered::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.put(0, None::<i32>);
    ///
    /// assert!(map.contains_key(&0));
    /// assert!(!map.contains_key(&1));
    /// ```
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Inserts `value` under `key`.
    ///
    /// If the key is already present its value is overwritten in place, the
    /// stored key and the length are left untouched, and the old value is
    /// returned.
    ///
    /// # Panics
    ///
    /// Panics if `key` does not compare equal to itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::ordered::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.put(0, 10), None);
    /// assert_eq!(map.put(0, 20), Some(10));
    /// assert_eq!(map.get(&0), Some(&20));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        Self::assert_reflexive(&key);
        let (root, replaced) = Self::insert_into_node(self.root.take(), key, value);
        self.root = Some(root);
        self.blacken_root();
        if replaced.is_none() {
            self.length += 1;
        }
        self.check_invariants();
        replaced
    }

    fn insert_into_node(link: Link<K, V>, key: K, value: V) -> (Box<Node<K, V>>, Option<V>) {
        let Some(mut node) = link else {
            return (Box::new(Node::new_red(key, value)), None);
        };

        let replaced = match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, replaced) = Self::insert_into_node(node.left.take(), key, value);
                node.left = Some(left);
                replaced
            }
            Ordering::Greater => {
                let (right, replaced) = Self::insert_into_node(node.right.take(), key, value);
                node.right = Some(right);
                replaced
            }
            Ordering::Equal => Some(mem::replace(&mut node.value, value)),
        };

        (node.balance(), replaced)
    }

    /// Removes the entry for `key` and returns its value.
    ///
    /// Returns `None` without touching the tree when the key is absent.
    ///
    /// # Panics
    ///
    /// Panics if `key` does not compare equal to itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::ordered::OrderedMap;
    ///
    /// let mut map: OrderedMap<i32, &str> = [(1, "1"), (0, "0"), (2, "2")].into_iter().collect();
    ///
    /// assert_eq!(map.delete(&1), Some("1"));
    /// assert_eq!(map.delete(&100), None);
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::assert_reflexive(key);
        if !self.contains_key(key) {
            return None;
        }
        let (root, removed) = Self::delete_from_node(self.root.take()?, key);
        self.root = root;
        self.blacken_root();
        if removed.is_some() {
            self.length -= 1;
        }
        self.check_invariants();
        removed
    }

    /// Removes `key` from the subtree, which must contain it.
    fn delete_from_node<Q>(mut node: Box<Node<K, V>>, key: &Q) -> (Link<K, V>, Option<V>)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = if key.cmp(node.key.borrow()) == Ordering::Less {
            if node.left_needs_red() {
                node = node.move_red_left();
            }
            let (left, removed) = match node.left.take() {
                Some(left) => Self::delete_from_node(left, key),
                None => (None, None),
            };
            node.left = left;
            removed
        } else {
            if node.left.as_deref().is_some_and(Node::is_red) {
                node = node.rotate_right();
            }
            if key.cmp(node.key.borrow()) == Ordering::Equal && node.right.is_none() {
                debug_assert!(node.left.is_none(), "a node without a right child is a leaf");
                return (None, Some(node.value));
            }
            if node.right_needs_red() {
                node = node.move_red_right();
            }
            if key.cmp(node.key.borrow()) == Ordering::Equal {
                let Some(right) = node.right.take() else {
                    debug_assert!(node.left.is_none(), "a node without a right child is a leaf");
                    return (None, Some(node.value));
                };
                let (right, successor) = Self::delete_min_from_node(right);
                node.right = right;
                let Node {
                    key: successor_key,
                    value: successor_value,
                    ..
                } = *successor;
                node.key = successor_key;
                Some(mem::replace(&mut node.value, successor_value))
            } else {
                let (right, removed) = match node.right.take() {
                    Some(right) => Self::delete_from_node(right, key),
                    None => (None, None),
                };
                node.right = right;
                removed
            }
        };

        (Some(node.fix_up()), removed)
    }

    /// Removes the entry with the smallest key and returns its value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::ordered::OrderedMap;
    ///
    /// let mut map: OrderedMap<i32, String> = (1..=15).map(|key| (key, key.to_string())).collect();
    ///
    /// assert_eq!(map.delete_min(), Some("1".to_string()));
    /// assert_eq!(map.len(), 14);
    /// ```
    pub fn delete_min(&mut self) -> Option<V> {
        let (root, minimum) = Self::delete_min_from_node(self.root.take()?);
        self.root = root;
        self.blacken_root();
        self.length -= 1;
        self.check_invariants();
        Some(minimum.value)
    }

    /// Detaches the leftmost node of the subtree; returns the rest and the node.
    fn delete_min_from_node(mut node: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
        if node.left.is_none() {
            let right = node.right.take();
            return (right, node);
        }
        if node.left_needs_red() {
            node = node.move_red_left();
        }
        match node.left.take() {
            Some(left) => {
                let (left, minimum) = Self::delete_min_from_node(left);
                node.left = left;
                (Some(node.fix_up()), minimum)
            }
            None => {
                let right = node.right.take();
                (right, node)
            }
        }
    }

    /// Removes the entry with the largest key and returns its value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::ordered::OrderedMap;
    ///
    /// let mut map: OrderedMap<i32, String> = (1..=15).map(|key| (key, key.to_string())).collect();
    ///
    /// assert_eq!(map.delete_max(), Some("15".to_string()));
    /// assert_eq!(map.len(), 14);
    /// ```
    pub fn delete_max(&mut self) -> Option<V> {
        let (root, maximum) = Self::delete_max_from_node(self.root.take()?);
        self.root = root;
        self.blacken_root();
        self.length -= 1;
        self.check_invariants();
        Some(maximum.value)
    }

    /// Detaches the rightmost node of the subtree; returns the rest and the node.
    fn delete_max_from_node(mut node: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
        if node.left.as_deref().is_some_and(Node::is_red) {
            node = node.rotate_right();
        }
        if node.right.is_none() {
            let left = node.left.take();
            return (left, node);
        }
        if node.right_needs_red() {
            node = node.move_red_right();
        }
        match node.right.take() {
            Some(right) => {
                let (right, maximum) = Self::delete_max_from_node(right);
                node.right = right;
                (Some(node.fix_up()), maximum)
            }
            None => {
                let left = node.left.take();
                (left, node)
            }
        }
    }

    // =========================================================================
    // Invariant Checking
    // =========================================================================

    #[cfg(any(test, feature = "invariant-checks"))]
    pub(crate) fn validate(&self) -> Result<(), super::invariants::InvariantViolation> {
        super::invariants::validate(self.root.as_deref(), self.length)
    }

    /// Rejects a key that does not compare equal to itself.
    ///
    /// Such a key can never be found again once stored, so the map panics
    /// before touching the tree.
    ///
    /// # Panics
    ///
    /// Panics if `key.cmp(key)` is not [`Ordering::Equal`].
    #[inline]
    fn assert_reflexive<Q: Ord + ?Sized>(key: &Q) {
        if key.cmp(key) != Ordering::Equal {
            #[cfg(feature = "invariant-checks")]
            tracing::error!("ordered map key does not compare equal to itself");
            panic!("ordered map invariant violated: key does not compare equal to itself");
        }
    }

    /// Fails fast on a corrupted tree when `invariant-checks` is enabled.
    ///
    /// # Panics
    ///
    /// Panics if any tree invariant no longer holds, typically because the
    /// key type's `Ord` is not a total order.
    #[inline]
    #[cfg_attr(not(feature = "invariant-checks"), allow(clippy::unused_self))]
    fn check_invariants(&self) {
        #[cfg(feature = "invariant-checks")]
        if let Err(violation) = self.validate() {
            tracing::error!(%violation, length = self.length, "ordered map invariant violated");
            panic!("ordered map invariant violated: {violation}");
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for OrderedMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root, self.length)
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

/// Hashes the length followed by every entry in key order, so equal maps
/// hash equally regardless of how their trees were shaped.
impl<K: Hash, V: Hash> Hash for OrderedMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for (key, value) in self {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for OrderedMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for OrderedMap<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedMapVisitor<K, V> {
    marker: std::marker::PhantomData<fn() -> OrderedMap<K, V>>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for OrderedMapVisitor<K, V>
where
    K: serde::Deserialize<'de> + Ord,
    V: serde::Deserialize<'de>,
{
    type Value = OrderedMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        // Later duplicates overwrite earlier ones, same as `put`.
        let mut map = OrderedMap::new();
        while let Some((key, value)) = access.next_entry()? {
            map.put(key, value);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for OrderedMap<K, V>
where
    K: serde::Deserialize<'de> + Ord,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedMapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
