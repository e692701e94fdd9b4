//! Tests for the owning LinkedList wrapper

use nodelist::*;
use pretty_assertions::assert_eq;

#[test]
fn test_build_and_query() {
    let list: LinkedList = vec![4, 8, 15, 16, 23, 42].into();
    assert_eq!(list.len(), 6);
    assert!(!list.is_empty());
    assert!(list.is_sorted());
    assert!(list.contains(23));
    assert!(!list.contains(24));
    assert_eq!(list.front(), Ok(4));
    assert_eq!(list.get(5), Ok(42));
    assert_eq!(
        list.get(6),
        Err(ListError::OutOfRange {
            index: 6,
            length: 6
        })
    );
}

#[test]
fn test_wrapper_matches_free_functions() {
    let values = [9, -1, 7, 7, 0];

    let mut list = LinkedList::from(&values[..]);
    list.insert(3, 2).unwrap();
    list.delete(7);
    list.reverse();
    list.sort();

    let head = ops::insert(from_slice(&values), 3, 2).unwrap();
    let head = ops::delete(head, 7);
    let head = ops::reverse(head);
    let head = ops::sort_list(head);

    assert_eq!(list.to_vec(), to_vec(&head));
    assert_eq!(list.render(), ops::render(&head));
}

#[test]
fn test_push_and_pop_front() {
    let mut list = LinkedList::new();
    list.push_front(2);
    list.push_front(1);
    list.append(3);
    assert_eq!(list.to_vec(), vec![1, 2, 3]);

    assert_eq!(list.pop_front(), Ok(1));
    assert_eq!(list.pop_front(), Ok(2));
    assert_eq!(list.pop_front(), Ok(3));
    assert_eq!(list.pop_front(), Err(ListError::empty("pop_front")));
}

#[test]
fn test_head_round_trip() {
    let list = LinkedList::from_head(from_slice(&[1, 2]));
    assert_eq!(ops::length(list.head()), 2);
    let head = list.into_head();
    assert_eq!(to_vec(&head), vec![1, 2]);
}

#[test]
fn test_iter_by_reference() {
    let list: LinkedList = (1..=4).collect();
    let mut total = 0;
    for value in &list {
        total += value;
    }
    assert_eq!(total, 10);
}

#[test]
fn test_render_and_display() {
    let list: LinkedList = [1, 2, 3].into_iter().collect();
    assert_eq!(list.render(), "1 → 2 → 3 → ╳\n");
    assert_eq!(list.render_with(&RenderStyle::ascii()), "1 -> 2 -> 3 -> X\n");
    assert_eq!(list.to_string(), "1 → 2 → 3 → ╳");
    assert_eq!(format!("{:?}", list), "[1, 2, 3]");
}

#[test]
fn test_equality_ignores_identity() {
    let a: LinkedList = [1, 2].into_iter().collect();
    let b = LinkedList::from(vec![1, 2]);
    assert_eq!(a, b);
    assert_ne!(a, LinkedList::new());
}

#[test]
fn test_json_encoding() {
    let list: LinkedList = [3, -2].into_iter().collect();
    assert_eq!(serde_json::to_string(&list).unwrap(), "[3,-2]");
}
