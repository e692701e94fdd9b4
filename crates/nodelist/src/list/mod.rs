//! Owning wrapper around a head link

mod display;
mod impls;

use crate::error::Result;
use crate::node::{Iter, Link};
use crate::ops;
use crate::style::RenderStyle;

/// A singly linked list of integers that owns its head.
///
/// Every method delegates to the matching free function in [`ops`], so the
/// two APIs behave identically. The length is recomputed on each call.
///
/// # Example
///
/// ```
/// use nodelist::LinkedList;
///
/// let mut list: LinkedList = [5, 3, 1, 4, 1].into_iter().collect();
/// list.insert(9, 2).unwrap();
/// list.delete(9);
/// list.sort();
///
/// assert_eq!(list.to_vec(), vec![1, 1, 3, 4, 5]);
/// assert_eq!(list.to_string(), "1 → 1 → 3 → 4 → 5 → ╳");
/// ```
#[derive(Default)]
pub struct LinkedList {
    head: Link,
}

impl LinkedList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing chain.
    pub fn from_head(head: Link) -> Self {
        Self { head }
    }

    /// Give up ownership of the chain.
    pub fn into_head(self) -> Link {
        self.head
    }

    /// Borrow the head link.
    pub fn head(&self) -> &Link {
        &self.head
    }

    /// Apply a by-value list operation to the head in place.
    fn relink(&mut self, op: impl FnOnce(Link) -> Link) {
        let head = self.head.take();
        self.head = op(head);
    }

    // ═══════════════════════════════════════════════════════════════════
    // Queries
    // ═══════════════════════════════════════════════════════════════════

    /// Number of nodes.
    pub fn len(&self) -> usize {
        ops::length(&self.head)
    }

    /// True when the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// True when values are in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        ops::is_sorted(&self.head)
    }

    /// True when some node holds `value`.
    pub fn contains(&self, value: i64) -> bool {
        ops::search(&self.head, value)
    }

    /// First value.
    pub fn front(&self) -> Result<i64> {
        ops::front(&self.head)
    }

    /// Value at `index`.
    pub fn get(&self, index: usize) -> Result<i64> {
        ops::get(&self.head, index)
    }

    /// Iterate over the values front to back.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.head)
    }

    /// Copy the values into a `Vec`.
    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Edits
    // ═══════════════════════════════════════════════════════════════════

    /// Insert `value` before the node at `index`; the list is untouched on error.
    pub fn insert(&mut self, value: i64, index: usize) -> Result<()> {
        match ops::insert(self.head.take(), value, index) {
            Ok(head) => {
                self.head = head;
                Ok(())
            }
            Err(err) => {
                let (head, error) = err.into_parts();
                self.head = head;
                Err(error)
            }
        }
    }

    /// Insert `value` at the end.
    pub fn append(&mut self, value: i64) {
        self.relink(|head| ops::append(head, value));
    }

    /// Insert `value` at the front.
    pub fn push_front(&mut self, value: i64) {
        self.relink(|head| ops::push_front(head, value));
    }

    /// Remove and return the first value.
    pub fn pop_front(&mut self) -> Result<i64> {
        let (value, rest) = ops::pop_front(self.head.take())?;
        self.head = rest;
        Ok(value)
    }

    /// Remove the first node holding `value`. Returns whether one was found.
    pub fn delete(&mut self, value: i64) -> bool {
        let before = self.len();
        self.relink(|head| ops::delete(head, value));
        self.len() != before
    }

    /// Reverse the link direction.
    pub fn reverse(&mut self) {
        self.relink(ops::reverse);
    }

    /// Sort into non-decreasing order.
    pub fn sort(&mut self) {
        self.relink(ops::sort_list);
    }

    /// Remove every node.
    pub fn clear(&mut self) {
        ops::free_list(self.head.take());
    }

    // ═══════════════════════════════════════════════════════════════════
    // Rendering
    // ═══════════════════════════════════════════════════════════════════

    /// Render as `"1 → 2 → ╳\n"`.
    pub fn render(&self) -> String {
        ops::render(&self.head)
    }

    /// Render with custom glyphs.
    pub fn render_with(&self, style: &RenderStyle) -> String {
        ops::render_with(&self.head, style)
    }

    /// Print the rendering to stdout.
    pub fn print(&self) {
        ops::traverse_and_print(&self.head);
    }
}
