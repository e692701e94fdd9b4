//! Free functions over a head [`Link`](crate::Link)
//!
//! Operations that change the shape of a list take the head by value and
//! hand back the (possibly new) head.

mod edit;
mod measure;
mod order;
mod traverse;

pub use edit::{append, delete, free_list, insert, pop_front, push_front};
pub use measure::{
    front, get, is_sorted, is_sorted_recursive, length, length_recursive, min_value, search,
};
pub use order::{reverse, sort_list};
pub use traverse::{render, render_with, traverse_and_print, write_to};
