//! Whole-tree invariant checking.
//!
//! Compiled for unit tests and for the `invariant-checks` feature, which
//! validates the map after every mutation and fails fast on a violation.

use std::cmp::Ordering;
use std::fmt;

use super::node::{Node, is_red};

/// A broken tree invariant, located by the in-order position of the node
/// where it was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InvariantViolation {
    /// The root's link is red.
    RedRoot,
    /// A key does not compare strictly greater than its in-order predecessor.
    OutOfOrder { position: usize },
    /// A node has a red right link.
    RedRightLink { position: usize },
    /// A red node has a red left child.
    ConsecutiveRedLinks { position: usize },
    /// The two subtrees of a node have different black heights.
    BlackImbalance {
        position: usize,
        left: usize,
        right: usize,
    },
    /// The recorded entry count disagrees with the reachable node count.
    LengthMismatch { recorded: usize, counted: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RedRoot => write!(formatter, "root link is red"),
            Self::OutOfOrder { position } => write!(
                formatter,
                "key at position {position} is not greater than its predecessor"
            ),
            Self::RedRightLink { position } => {
                write!(formatter, "node at position {position} has a red right link")
            }
            Self::ConsecutiveRedLinks { position } => write!(
                formatter,
                "node at position {position} and its left child are both red"
            ),
            Self::BlackImbalance {
                position,
                left,
                right,
            } => write!(
                formatter,
                "node at position {position} has black heights {left} (left) and {right} (right)"
            ),
            Self::LengthMismatch { recorded, counted } => write!(
                formatter,
                "recorded length {recorded} but {counted} nodes are reachable"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Checks ordering, left-leaning, black-balance and length consistency in a
/// single in-order walk.
pub(crate) fn validate<K: Ord, V>(
    root: Option<&Node<K, V>>,
    recorded: usize,
) -> Result<(), InvariantViolation> {
    if is_red(root) {
        return Err(InvariantViolation::RedRoot);
    }
    let mut walk = Walk {
        previous: None,
        counted: 0,
    };
    walk.visit(root)?;
    if walk.counted != recorded {
        return Err(InvariantViolation::LengthMismatch {
            recorded,
            counted: walk.counted,
        });
    }
    Ok(())
}

struct Walk<'a, K> {
    previous: Option<&'a K>,
    counted: usize,
}

impl<'a, K: Ord> Walk<'a, K> {
    /// Returns the black height of the subtree.
    fn visit<V>(&mut self, node: Option<&'a Node<K, V>>) -> Result<usize, InvariantViolation> {
        let Some(node) = node else {
            return Ok(0);
        };

        let left = self.visit(node.left.as_deref())?;
        let position = self.counted;

        if let Some(previous) = self.previous
            && previous.cmp(&node.key) != Ordering::Less
        {
            return Err(InvariantViolation::OutOfOrder { position });
        }
        if is_red(node.right.as_deref()) {
            return Err(InvariantViolation::RedRightLink { position });
        }
        if node.is_red() && is_red(node.left.as_deref()) {
            return Err(InvariantViolation::ConsecutiveRedLinks { position });
        }

        self.previous = Some(&node.key);
        self.counted += 1;

        let right = self.visit(node.right.as_deref())?;
        if left != right {
            return Err(InvariantViolation::BlackImbalance {
                position,
                left,
                right,
            });
        }
        Ok(left + usize::from(!node.is_red()))
    }
}
