//! Structural edits: insertion, deletion, teardown

use tracing::{debug, trace};

use super::measure::length;
use crate::error::{InsertError, ListError, Result};
use crate::node::{Iter, Link, Node};

/// The link slot at position `index`: the head itself for 0, the `next` of
/// node `index - 1` otherwise. `None` when the chain is shorter than `index`.
fn slot_at(head: &mut Link, index: usize) -> Option<&mut Link> {
    let mut cursor = head;
    for _ in 0..index {
        cursor = &mut cursor.as_mut()?.next;
    }
    Some(cursor)
}

/// The terminating `None` slot of the chain.
fn tail_slot(head: &mut Link) -> &mut Link {
    let mut cursor = head;
    while let Some(node) = cursor {
        cursor = &mut node.next;
    }
    cursor
}

// ═══════════════════════════════════════════════════════════════════════
// Insertion
// ═══════════════════════════════════════════════════════════════════════

/// Insert `value` immediately before the node currently at `index`.
///
/// `index` must lie in `0..=length(&head)`; `0` inserts at the front and
/// `length` at the end. On failure the list comes back inside the error.
///
/// # Example
///
/// ```
/// use nodelist::{from_slice, ops, to_vec, ListError};
///
/// let head = ops::insert(from_slice(&[1, 3]), 2, 1).unwrap();
/// assert_eq!(to_vec(&head), vec![1, 2, 3]);
///
/// let err = ops::insert(head, 9, 4).unwrap_err();
/// assert_eq!(err.error(), &ListError::OutOfRange { index: 4, length: 3 });
/// assert_eq!(to_vec(&err.into_head()), vec![1, 2, 3]);
/// ```
pub fn insert(mut head: Link, value: i64, index: usize) -> std::result::Result<Link, InsertError> {
    if let Some(slot) = slot_at(&mut head, index) {
        let rest = slot.take();
        *slot = Node::link(value, rest);
        trace!(value, index, "inserted node");
        return Ok(head);
    }

    let length = length(&head);
    debug!(value, index, length, "insert index out of range");
    Err(InsertError::new(head, ListError::OutOfRange { index, length }))
}

/// Insert `value` at the end of the list.
pub fn append(mut head: Link, value: i64) -> Link {
    *tail_slot(&mut head) = Node::link(value, None);
    trace!(value, "appended node");
    head
}

/// Insert `value` at the front of the list.
pub fn push_front(head: Link, value: i64) -> Link {
    Node::link(value, head)
}

// ═══════════════════════════════════════════════════════════════════════
// Removal
// ═══════════════════════════════════════════════════════════════════════

/// Remove the first node holding `target`.
///
/// A list without `target` is returned unchanged.
pub fn delete(mut head: Link, target: i64) -> Link {
    let Some(index) = Iter::new(&head).position(|value| value == target) else {
        trace!(target, "delete target not found");
        return head;
    };

    if let Some(slot) = slot_at(&mut head, index) {
        if let Some(mut node) = slot.take() {
            *slot = node.next.take();
            trace!(target, index, "deleted node");
        }
    }
    head
}

/// Detach the first node, returning its value and the rest of the list.
pub fn pop_front(head: Link) -> Result<(i64, Link)> {
    match head {
        None => Err(ListError::empty("pop_front")),
        Some(mut node) => {
            let rest = node.next.take();
            Ok((node.value, rest))
        }
    }
}

/// Release every node of the chain, front to back.
pub fn free_list(head: Link) {
    let mut curr = head;
    let mut freed = 0usize;
    while let Some(mut node) = curr {
        curr = node.next.take();
        freed += 1;
    }
    if freed > 0 {
        trace!(freed, "released nodes");
    }
}
