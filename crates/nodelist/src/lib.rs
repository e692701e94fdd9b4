//! # Nodelist
//!
//! A singly linked list of integers built from owning node chains.
//!
//! Each [`Node`] owns the next one through a [`Link`] (`Option<Box<Node>>`),
//! so a list is simply its head link and is acyclic by construction.
//!
//! ## Layout
//!
//! - **[`ops`]**: free functions on a head link (insert, delete, search,
//!   reverse, sort, traverse, free, length, sortedness)
//! - **[`LinkedList`]**: an owning wrapper exposing the same operations as
//!   methods
//! - **[`RenderStyle`]**: glyphs used for the arrow rendering
//!
//! ```
//! use nodelist::{from_slice, ops, to_vec};
//!
//! let head = from_slice(&[3, 1, 2]);
//! let head = ops::append(head, 0);
//! let head = ops::sort_list(head);
//!
//! assert_eq!(to_vec(&head), vec![0, 1, 2, 3]);
//! assert_eq!(ops::render(&head), "0 → 1 → 2 → 3 → ╳\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod list;
pub mod node;
pub mod ops;
pub mod style;

// Re-export main types
pub use error::{InsertError, ListError, Result};
pub use list::LinkedList;
pub use node::{from_slice, to_vec, Iter, Link, Node};
pub use style::RenderStyle;

/// Nodelist version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
