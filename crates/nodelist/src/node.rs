//! Node and link representation

use std::fmt;

/// An owning reference to the next node, `None` at the end of the chain.
///
/// A `Link` held by the caller is the head of a list; an empty list is `None`.
pub type Link = Option<Box<Node>>;

/// A single list element.
///
/// Every node is owned by exactly one predecessor (or by the head link), so
/// chains are acyclic by construction.
pub struct Node {
    /// The stored value
    pub value: i64,

    /// The rest of the chain
    pub next: Link,
}

impl Node {
    /// Create a boxed node in front of `next`, ready to become a head.
    pub fn link(value: i64, next: Link) -> Link {
        Some(Box::new(Self { value, next }))
    }
}

// Chains are torn down in a loop; the derived drop would recurse once per node.
impl Drop for Node {
    fn drop(&mut self) {
        crate::ops::free_list(self.next.take());
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut curr = Some(self);
        while let Some(node) = curr {
            list.entry(&node.value);
            curr = node.next.as_deref();
        }
        list.finish()
    }
}

/// Borrowing iterator over the values of a chain.
///
/// # Example
///
/// ```
/// use nodelist::{Iter, Node};
///
/// let head = Node::link(1, Node::link(2, None));
/// let values: Vec<i64> = Iter::new(&head).collect();
/// assert_eq!(values, vec![1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iter<'a> {
    /// Start iterating at `head`.
    pub fn new(head: &'a Link) -> Self {
        Self {
            next: head.as_deref(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.value
        })
    }
}

/// Build a chain holding `values` in order.
pub fn from_slice(values: &[i64]) -> Link {
    values
        .iter()
        .rev()
        .fold(None, |next, &value| Node::link(value, next))
}

/// Collect the values of a chain into a `Vec`.
pub fn to_vec(head: &Link) -> Vec<i64> {
    Iter::new(head).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_preserves_order() {
        let head = from_slice(&[3, 1, 2]);
        assert_eq!(to_vec(&head), vec![3, 1, 2]);
    }

    #[test]
    fn test_from_empty_slice_is_none() {
        assert!(from_slice(&[]).is_none());
    }

    #[test]
    fn test_debug_prints_values() {
        let head = from_slice(&[1, 2, 3]);
        assert_eq!(format!("{:?}", head), "Some([1, 2, 3])");
    }

    #[test]
    fn test_dropping_long_chain() {
        let mut head: Link = None;
        for i in 0..200_000 {
            head = Node::link(i, head);
        }
        drop(head);
    }
}
