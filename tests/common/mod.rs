//! Shared helpers for integration tests.
//!
//! The black-balance and left-leaning checks walk a [`TreeShape`] snapshot,
//! so they only rely on the public API.

#![allow(dead_code)]

use llrb_map::ordered::{Color, OrderedMap, TreeShape};

/// Builds a snapshot node whose value is the key rendered as a string.
pub fn node(key: i32, color: Color) -> TreeShape<i32, String> {
    TreeShape::leaf(key, key.to_string(), color)
}

/// Builds a map whose values are the keys rendered as strings.
pub fn string_map(keys: impl IntoIterator<Item = i32>) -> OrderedMap<i32, String> {
    keys.into_iter().map(|key| (key, key.to_string())).collect()
}

/// Describes the first broken invariant in the snapshot, if any.
pub fn shape_violation<K: Ord + Clone + std::fmt::Debug, V: Clone>(
    map: &OrderedMap<K, V>,
) -> Option<String> {
    let Some(shape) = map.to_shape() else {
        return (!map.is_empty()).then(|| format!("empty tree but len {}", map.len()));
    };
    if shape.color == Color::Red {
        return Some("red root".to_string());
    }
    if shape.node_count() != map.len() {
        return Some(format!(
            "{} nodes but len {}",
            shape.node_count(),
            map.len()
        ));
    }
    let mut keys = Vec::new();
    if let Err(message) = black_height(&shape, &mut keys) {
        return Some(message);
    }
    keys.windows(2)
        .find(|pair| pair[0] >= pair[1])
        .map(|pair| format!("keys out of order: {:?} then {:?}", pair[0], pair[1]))
}

fn black_height<K: Clone + std::fmt::Debug, V>(
    shape: &TreeShape<K, V>,
    keys: &mut Vec<K>,
) -> Result<usize, String> {
    let is_red = |child: &Option<Box<TreeShape<K, V>>>| {
        child.as_deref().is_some_and(|child| child.color == Color::Red)
    };
    if is_red(&shape.right) {
        return Err(format!("red right link below {:?}", shape.key));
    }
    if shape.color == Color::Red && is_red(&shape.left) {
        return Err(format!("consecutive red links at {:?}", shape.key));
    }
    let left = match shape.left.as_deref() {
        Some(left) => black_height(left, keys)?,
        None => 0,
    };
    keys.push(shape.key.clone());
    let right = match shape.right.as_deref() {
        Some(right) => black_height(right, keys)?,
        None => 0,
    };
    if left != right {
        return Err(format!(
            "black heights {left} and {right} differ below {:?}",
            shape.key
        ));
    }
    Ok(left + usize::from(shape.color == Color::Black))
}
