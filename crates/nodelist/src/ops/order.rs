//! Reordering: reversal and sorting

use tracing::debug;

use super::edit::{append, delete};
use super::measure::{length, min_value};
use crate::node::Link;

/// Reverse the chain in place by relinking each node to its predecessor.
///
/// The former tail becomes the new head.
pub fn reverse(head: Link) -> Link {
    let mut curr = head;
    let mut prev: Link = None;
    while let Some(mut node) = curr {
        curr = node.next.take();
        node.next = prev;
        prev = Some(node);
    }
    prev
}

/// Sort into non-decreasing order by repeated selection of the minimum.
///
/// Each round removes the smallest remaining value from the working list and
/// appends it to the result, so the whole sort is O(n²).
///
/// # Example
///
/// ```
/// use nodelist::{from_slice, ops, to_vec};
///
/// let sorted = ops::sort_list(from_slice(&[5, 3, 1, 4, 1]));
/// assert_eq!(to_vec(&sorted), vec![1, 1, 3, 4, 5]);
/// ```
pub fn sort_list(head: Link) -> Link {
    debug!(length = length(&head), "selection sort");

    let mut working = head;
    let mut sorted: Link = None;
    while let Ok(min) = min_value(&working) {
        working = delete(working, min);
        sorted = append(sorted, min);
    }
    sorted
}
