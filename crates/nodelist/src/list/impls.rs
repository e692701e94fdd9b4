//! Trait implementations for LinkedList

use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::LinkedList;
use crate::node::Iter;
use crate::ops;

impl FromIterator<i64> for LinkedList {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl Extend<i64> for LinkedList {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        // Build on the reversed chain so each value goes in at the front.
        let mut reversed = ops::reverse(self.head.take());
        for value in iter {
            reversed = ops::push_front(reversed, value);
        }
        self.head = ops::reverse(reversed);
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<i64>> for LinkedList {
    fn from(values: Vec<i64>) -> Self {
        values.into_iter().collect()
    }
}

impl From<&[i64]> for LinkedList {
    fn from(values: &[i64]) -> Self {
        values.iter().copied().collect()
    }
}

impl Clone for LinkedList {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for LinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for LinkedList {}

impl Serialize for LinkedList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(&value)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_appends_in_order() {
        let mut list = LinkedList::from(vec![1, 2]);
        list.extend([3, 4]);
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = LinkedList::from(vec![1, 2, 3]);
        let mut copy = original.clone();
        copy.reverse();
        assert_eq!(original.to_vec(), vec![1, 2, 3]);
        assert_eq!(copy.to_vec(), vec![3, 2, 1]);
        assert_ne!(original, copy);
    }

    #[test]
    fn test_serialize_as_sequence() {
        let list = LinkedList::from(&[3, 1, 2][..]);
        assert_eq!(serde_json::to_string(&list).unwrap(), "[3,1,2]");
        assert_eq!(serde_json::to_string(&LinkedList::new()).unwrap(), "[]");
    }
}
