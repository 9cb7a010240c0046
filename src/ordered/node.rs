//! Tree nodes and the local balancing primitives.
//!
//! Every primitive that can change which node sits at the top of a subtree
//! consumes that subtree and returns the new root; the caller reattaches it
//! in its own slot. Nothing here allocates or frees nodes.

use std::fmt;

// =============================================================================
// Color Definition
// =============================================================================

/// The color of the link from a node's parent to the node.
///
/// The root has no parent, so its link is always reported as black once a
/// public operation returns. Absent children count as black.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    /// A red link: the node and its parent form a single 3-node.
    Red,
    /// A black link.
    Black,
}

impl Color {
    /// Returns the opposite color.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::ordered::Color;
    ///
    /// assert_eq!(Color::Red.flipped(), Color::Black);
    /// assert_eq!(Color::Black.flipped(), Color::Red);
    /// ```
    #[inline]
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => formatter.write_str("red"),
            Self::Black => formatter.write_str("black"),
        }
    }
}

// =============================================================================
// Node Definition
// =============================================================================

/// An exclusively owned child slot. `None` is an empty (black) position.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

/// Returns `true` only for a present node with a red incoming link.
pub(crate) fn is_red<K, V>(node: Option<&Node<K, V>>) -> bool {
    node.is_some_and(Node::is_red)
}

impl<K, V> Node<K, V> {
    /// Creates a detached red leaf.
    pub(crate) const fn new_red(key: K, value: V) -> Self {
        Self {
            key,
            value,
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    fn left_is_red(&self) -> bool {
        is_red(self.left.as_deref())
    }

    fn right_is_red(&self) -> bool {
        is_red(self.right.as_deref())
    }

    /// Left child and left-left grandchild are both red.
    fn left_left_is_red(&self) -> bool {
        self.left
            .as_deref()
            .is_some_and(|left| left.is_red() && is_red(left.left.as_deref()))
    }

    fn left_grandchild_is_black(&self) -> bool {
        !is_red(self.left.as_deref().and_then(|left| left.left.as_deref()))
    }

    fn right_left_grandchild_is_red(&self) -> bool {
        is_red(self.right.as_deref().and_then(|right| right.left.as_deref()))
    }

    /// The left side could not absorb a removal without borrowing a red link.
    pub(crate) fn left_needs_red(&self) -> bool {
        !self.left_is_red() && self.left_grandchild_is_black()
    }

    /// The right side could not absorb a removal without borrowing a red link.
    pub(crate) fn right_needs_red(&self) -> bool {
        !self.right_is_red() && !self.right_left_grandchild_is_red()
    }

    // =========================================================================
    // Balancing Primitives
    // =========================================================================

    /// Promotes the right child into this position.
    ///
    /// The promoted node inherits this node's color and this node becomes its
    /// red left child; the promoted node's former left subtree becomes this
    /// node's right subtree.
    ///
    /// # Panics
    ///
    /// Panics if there is no right child, which means the tree is corrupted.
    pub(crate) fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut promoted = self
            .right
            .take()
            .expect("rotate_left requires a right child");
        self.right = promoted.left.take();
        promoted.color = self.color;
        self.color = Color::Red;
        promoted.left = Some(self);
        promoted
    }

    /// Mirror image of [`Node::rotate_left`].
    ///
    /// # Panics
    ///
    /// Panics if there is no left child, which means the tree is corrupted.
    pub(crate) fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut promoted = self
            .left
            .take()
            .expect("rotate_right requires a left child");
        self.left = promoted.right.take();
        promoted.color = self.color;
        self.color = Color::Red;
        promoted.right = Some(self);
        promoted
    }

    /// Toggles the color of this node and of both children.
    ///
    /// # Panics
    ///
    /// Panics if either child is absent.
    pub(crate) fn color_flip(&mut self) {
        self.color = self.color.flipped();
        let left = self
            .left
            .as_deref_mut()
            .expect("color_flip requires a left child");
        left.color = left.color.flipped();
        let right = self
            .right
            .as_deref_mut()
            .expect("color_flip requires a right child");
        right.color = right.color.flipped();
    }

    /// Pushes a red link down to the left so the next step of a leftward
    /// descent never lands on a black node with two black children.
    pub(crate) fn move_red_left(mut self: Box<Self>) -> Box<Self> {
        self.color_flip();
        if self.right_left_grandchild_is_red() {
            self.right = self.right.take().map(Self::rotate_right);
            self = self.rotate_left();
            self.color_flip();
        }
        self
    }

    /// Pushes a red link down to the right; mirror of [`Node::move_red_left`].
    pub(crate) fn move_red_right(mut self: Box<Self>) -> Box<Self> {
        self.color_flip();
        if self.left_left_is_red() {
            self = self.rotate_right();
            self.color_flip();
        }
        self
    }

    /// Restores the left-leaning shape after a recursive insertion returns.
    pub(crate) fn balance(mut self: Box<Self>) -> Box<Self> {
        if self.right_is_red() && !self.left_is_red() {
            self = self.rotate_left();
        }
        if self.left_left_is_red() {
            self = self.rotate_right();
        }
        if self.left_is_red() && self.right_is_red() {
            self.color_flip();
        }
        self
    }

    /// Restores the left-leaning shape after a recursive deletion returns.
    ///
    /// Deletion may leave a red right link next to a red left link, so any red
    /// right link is rotated away before the other two rules apply.
    pub(crate) fn fix_up(mut self: Box<Self>) -> Box<Self> {
        if self.right_is_red() {
            self = self.rotate_left();
        }
        if self.left_left_is_red() {
            self = self.rotate_right();
        }
        if self.left_is_red() && self.right_is_red() {
            self.color_flip();
        }
        self
    }
}

// =============================================================================
// Tests
// =============================================================================
