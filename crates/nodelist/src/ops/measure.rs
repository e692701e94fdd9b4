//! Read-only queries: length, sortedness, element access

use crate::error::{ListError, Result};
use crate::node::{Iter, Link, Node};

// ═══════════════════════════════════════════════════════════════════════
// Length
// ═══════════════════════════════════════════════════════════════════════

/// Count the nodes from `head` to the end of the chain.
///
/// # Example
///
/// ```
/// use nodelist::{from_slice, ops};
///
/// assert_eq!(ops::length(&None), 0);
/// assert_eq!(ops::length(&from_slice(&[4, 5, 6])), 3);
/// ```
pub fn length(head: &Link) -> usize {
    let mut count = 0;
    let mut curr = head.as_deref();
    while let Some(node) = curr {
        count += 1;
        curr = node.next.as_deref();
    }
    count
}

/// Recursive form of [`length`]. Stack depth grows with the list.
pub fn length_recursive(head: &Link) -> usize {
    match head {
        None => 0,
        Some(node) => 1 + length_recursive(&node.next),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Sortedness
// ═══════════════════════════════════════════════════════════════════════

/// True when every value is `<=` its successor.
///
/// Empty and single-element lists are sorted.
pub fn is_sorted(head: &Link) -> bool {
    let mut curr = head.as_deref();
    while let Some(node) = curr {
        match node.next.as_deref() {
            Some(next) if node.value > next.value => return false,
            next => curr = next,
        }
    }
    true
}

/// Recursive form of [`is_sorted`].
pub fn is_sorted_recursive(head: &Link) -> bool {
    fn check(node: &Node) -> bool {
        match node.next.as_deref() {
            None => true,
            Some(next) => node.value <= next.value && check(next),
        }
    }

    head.as_deref().map_or(true, check)
}

// ═══════════════════════════════════════════════════════════════════════
// Search & element access
// ═══════════════════════════════════════════════════════════════════════

/// True when some node holds `target`.
pub fn search(head: &Link, target: i64) -> bool {
    Iter::new(head).any(|value| value == target)
}

/// Value of the first node.
pub fn front(head: &Link) -> Result<i64> {
    head.as_deref()
        .map(|node| node.value)
        .ok_or(ListError::empty("front"))
}

/// Value at position `index` (0-based).
pub fn get(head: &Link, index: usize) -> Result<i64> {
    Iter::new(head)
        .nth(index)
        .ok_or_else(|| ListError::OutOfRange {
            index,
            length: length(head),
        })
}

/// Smallest value in the list.
pub fn min_value(head: &Link) -> Result<i64> {
    Iter::new(head).min().ok_or(ListError::empty("min_value"))
}
