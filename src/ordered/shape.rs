//! Structural snapshots of an [`OrderedMap`](super::OrderedMap).

use super::node::{Color, Node};

/// An owned copy of one subtree: key, value, link color and children.
///
/// Snapshots are what the map's balancing rules are judged by, so two maps
/// built from the same sequence of operations always produce equal shapes.
///
/// # Examples
///
/// ```rust
/// use llrb_map::ordered::{Color, OrderedMap, TreeShape};
///
/// let map: OrderedMap<i32, &str> = [(1, "1"), (0, "0"), (2, "2")].into_iter().collect();
///
/// assert_eq!(
///     map.to_shape(),
///     Some(
///         TreeShape::leaf(1, "1", Color::Black)
///             .with_left(TreeShape::leaf(0, "0", Color::Black))
///             .with_right(TreeShape::leaf(2, "2", Color::Black))
///     )
/// );
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TreeShape<K, V> {
    /// The node's key.
    pub key: K,
    /// The node's value.
    pub value: V,
    /// The color of the link from the parent.
    pub color: Color,
    /// The left subtree, if any.
    pub left: Option<Box<Self>>,
    /// The right subtree, if any.
    pub right: Option<Box<Self>>,
}

impl<K, V> TreeShape<K, V> {
    /// Creates a shape without children.
    #[inline]
    #[must_use]
    pub const fn leaf(key: K, value: V, color: Color) -> Self {
        Self {
            key,
            value,
            color,
            left: None,
            right: None,
        }
    }

    /// Replaces the left subtree.
    #[must_use]
    pub fn with_left(mut self, left: Self) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    /// Replaces the right subtree.
    #[must_use]
    pub fn with_right(mut self, right: Self) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    /// Number of nodes on the longest root-to-leaf path.
    #[must_use]
    pub fn height(&self) -> usize {
        let left = self.left.as_deref().map_or(0, Self::height);
        let right = self.right.as_deref().map_or(0, Self::height);
        1 + left.max(right)
    }

    /// Number of nodes in this subtree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.left.as_deref().map_or(0, Self::node_count)
            + self.right.as_deref().map_or(0, Self::node_count)
    }
}

impl<K: Clone, V: Clone> TreeShape<K, V> {
    pub(crate) fn from_node(node: &Node<K, V>) -> Self {
        Self {
            key: node.key.clone(),
            value: node.value.clone(),
            color: node.color,
            left: node.left.as_deref().map(|left| Box::new(Self::from_node(left))),
            right: node
                .right
                .as_deref()
                .map(|right| Box::new(Self::from_node(right))),
        }
    }
}
