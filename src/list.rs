//! Singly-linked list with positional access.
//!
//! Nodes live in an [`Arena`] and link to each other by index.  The list
//! owns every node through the arena; `head` is the start of the chain and
//! `tail` is a non-owning alias of its last node, so appends are O(1).
//! There is no back-link, so removing the tail walks the chain.
//!
//! Every positional operation normalizes its index with floor modulo
//! against the current length: `-1` is the last element, `len` wraps to
//! the first.  Indexing an empty list fails with [`ListError::Empty`].
use std::fmt;

use log::*;
use thiserror::Error;

use crate::arena::{Arena, ArenaId};

/// Errors from positional list operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("cannot index into an empty list")]
    Empty,
}

#[derive(Debug)]
struct Entry<T> {
    value: T,
    next: Option<NodeId<T>>,
}

type NodeId<T> = ArenaId<Entry<T>>;

/// A singly-linked list.
pub struct SinglyLinkedList<T> {
    nodes: Arena<Entry<T>>,
    head: Option<NodeId<T>>,
    tail: Option<NodeId<T>>,
    length: usize,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            nodes: Arena::new(),
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// Number of elements in the list.
    pub fn size(&self) -> usize {
        self.length
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Append a value at the tail.
    pub fn add(&mut self, value: T) {
        let id = self.nodes.alloc(Entry { value, next: None });
        match self.tail {
            Some(tail) => self.nodes.get_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.length += 1;
    }

    /// Remove the tail element and return it.  Does nothing on an empty list.
    pub fn remove(&mut self) -> Option<T> {
        let Some(tail) = self.tail else {
            trace!("remove on empty list ignored");
            return None;
        };

        if self.length == 1 {
            self.head = None;
            self.tail = None;
        } else {
            let prev = self.nth(self.length - 2)?;
            self.nodes.get_mut(prev).next = None;
            self.tail = Some(prev);
        }
        self.length -= 1;

        Some(self.nodes.release(tail).value)
    }

    /// Insert a value so that it ends up at `index` (normalized).
    pub fn add_at(&mut self, value: T, index: isize) -> Result<(), ListError> {
        let index = self.normalize(index)?;

        if index == 0 {
            let id = self.nodes.alloc(Entry {
                value,
                next: self.head,
            });
            self.head = Some(id);
        } else {
            let prev = self.nth(index - 1).ok_or(ListError::Empty)?;
            let next = self.nodes.get(prev).next;
            let id = self.nodes.alloc(Entry { value, next });
            self.nodes.get_mut(prev).next = Some(id);
        }
        // the new node always has a successor (or is the only head), so tail stays put
        self.length += 1;
        Ok(())
    }

    /// Remove the element at `index` (normalized) and return it.  Does nothing
    /// on an empty list.
    pub fn remove_at(&mut self, index: isize) -> Option<T> {
        let Ok(index) = self.normalize(index) else {
            trace!("remove_at({}) on empty list ignored", index);
            return None;
        };

        let removed = if index == 0 {
            let head = self.head?;
            self.head = self.nodes.get(head).next;
            if self.head.is_none() {
                self.tail = None;
            }
            head
        } else {
            let prev = self.nth(index - 1)?;
            let target = self.nodes.get(prev).next?;
            let after = self.nodes.get(target).next;
            self.nodes.get_mut(prev).next = after;
            if self.tail == Some(target) {
                self.tail = Some(prev);
            }
            target
        };
        self.length -= 1;

        Some(self.nodes.release(removed).value)
    }

    /// Get the value at `index` (normalized).
    pub fn get_at(&self, index: isize) -> Result<&T, ListError> {
        let id = self.node_at(index)?;
        Ok(&self.nodes.get(id).value)
    }

    /// Get the value at `index` (normalized) mutably.
    pub fn get_at_mut(&mut self, index: isize) -> Result<&mut T, ListError> {
        let id = self.node_at(index)?;
        Ok(&mut self.nodes.get_mut(id).value)
    }

    /// Replace the value at `index` (normalized), returning the old value.
    pub fn change_val(&mut self, index: isize, value: T) -> Result<T, ListError> {
        let slot = self.get_at_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// The head element.
    pub fn first(&self) -> Option<&T> {
        self.head.map(|id| &self.nodes.get(id).value)
    }

    /// The tail element, in constant time.
    pub fn last(&self) -> Option<&T> {
        self.tail.map(|id| &self.nodes.get(id).value)
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.length = 0;
    }

    /// Copy the values out in head-to-tail order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values().cloned().collect()
    }

    fn normalize(&self, index: isize) -> Result<usize, ListError> {
        if self.length == 0 {
            debug!("index {} into empty list", index);
            return Err(ListError::Empty);
        }
        Ok(index.rem_euclid(self.length as isize) as usize)
    }

    fn node_at(&self, index: isize) -> Result<NodeId<T>, ListError> {
        let index = self.normalize(index)?;
        self.nth(index).ok_or(ListError::Empty)
    }

    /// Walk `n` links from the head.
    fn nth(&self, n: usize) -> Option<NodeId<T>> {
        let mut cur = self.head;
        for _ in 0..n {
            cur = self.nodes.get(cur?).next;
        }
        cur
    }

    fn values(&self) -> impl Iterator<Item = &T> + '_ {
        std::iter::successors(self.head, move |id| self.nodes.get(*id).next)
            .map(move |id| &self.nodes.get(id).value)
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        SinglyLinkedList::new()
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

#[cfg(test)]
impl<T> SinglyLinkedList<T> {
    fn assert_consistent(&self) {
        assert_eq!(self.length == 0, self.head.is_none());
        assert_eq!(self.length == 0, self.tail.is_none());
        assert_eq!(self.nodes.len(), self.length);
        assert_eq!(self.values().count(), self.length);
        if self.length > 0 {
            assert_eq!(self.nth(self.length - 1), self.tail);
            assert_eq!(self.nth(self.length), None);
        }
    }
}

#[cfg(test)]
fn list_of(values: &[i32]) -> SinglyLinkedList<i32> {
    let mut list = SinglyLinkedList::new();
    for v in values {
        list.add(*v);
    }
    list
}

#[test]
fn test_empty() {
    let mut list: SinglyLinkedList<i32> = SinglyLinkedList::new();
    assert_eq!(list.size(), 0);
    assert_eq!(list.to_string(), "[]");
    assert_eq!(list.first(), None);
    assert_eq!(list.last(), None);
    assert_eq!(list.remove(), None);
    assert_eq!(list.remove_at(3), None);
    list.assert_consistent();
}

#[test]
fn test_empty_index_fails() {
    let mut list: SinglyLinkedList<i32> = SinglyLinkedList::new();
    assert_eq!(list.get_at(0), Err(ListError::Empty));
    assert_eq!(list.get_at(-1), Err(ListError::Empty));
    assert_eq!(list.change_val(0, 4), Err(ListError::Empty));
    assert_eq!(list.add_at(4, 0), Err(ListError::Empty));
    assert_eq!(list.size(), 0);
    list.assert_consistent();
}

#[test]
fn test_add() {
    let list = list_of(&[1, 3, 5]);
    assert_eq!(list.size(), 3);
    assert_eq!(list.to_string(), "[1, 3, 5]");
    assert_eq!(format!("{:?}", list), "[1, 3, 5]");
    assert_eq!(list.first(), Some(&1));
    assert_eq!(list.last(), Some(&5));
    list.assert_consistent();
}

#[test]
fn test_remove_tail() {
    let mut list = list_of(&[1, 2, 3]);
    assert_eq!(list.remove(), Some(3));
    assert_eq!(list.last(), Some(&2));
    list.assert_consistent();

    // appending after a tail removal links onto the new tail
    list.add(9);
    assert_eq!(list.to_vec(), vec![1, 2, 9]);
    list.assert_consistent();
}

#[test]
fn test_remove_last_node_resets_head() {
    let mut list = list_of(&[7]);
    assert_eq!(list.remove(), Some(7));
    assert!(list.is_empty());
    assert_eq!(list.first(), None);
    list.assert_consistent();

    list.add(8);
    assert_eq!(list.to_vec(), vec![8]);
    list.assert_consistent();
}

#[test]
fn test_negative_wrap() {
    let list = list_of(&[10, 20, 30]);
    assert_eq!(list.get_at(-1), Ok(&30));
    assert_eq!(list.get_at(-2), Ok(&20));
    assert_eq!(list.get_at(-3), Ok(&10));
    assert_eq!(list.get_at(3), Ok(&10));
    assert_eq!(list.get_at(7), Ok(&20));
    assert_eq!(list.get_at(-4), Ok(&30));
}

#[test]
fn test_add_at_head_and_middle() {
    let mut list = list_of(&[1, 3]);
    list.add_at(0, 0).unwrap();
    assert_eq!(list.to_vec(), vec![0, 1, 3]);
    list.add_at(2, 2).unwrap();
    assert_eq!(list.to_vec(), vec![0, 1, 2, 3]);
    assert_eq!(list.last(), Some(&3));
    list.assert_consistent();

    // -1 normalizes to the last position, so the value lands before the tail
    list.add_at(9, -1).unwrap();
    assert_eq!(list.to_vec(), vec![0, 1, 2, 9, 3]);
    // len wraps to 0
    list.add_at(8, 5).unwrap();
    assert_eq!(list.to_vec(), vec![8, 0, 1, 2, 9, 3]);
    list.assert_consistent();
}

#[test]
fn test_remove_at() {
    let mut list = list_of(&[1, 2, 3, 4]);
    assert_eq!(list.remove_at(1), Some(2));
    assert_eq!(list.to_vec(), vec![1, 3, 4]);
    assert_eq!(list.remove_at(0), Some(1));
    assert_eq!(list.to_vec(), vec![3, 4]);
    list.assert_consistent();
}

#[test]
fn test_remove_at_tail_moves_tail() {
    let mut list = list_of(&[1, 2, 3]);
    assert_eq!(list.remove_at(-1), Some(3));
    assert_eq!(list.last(), Some(&2));
    list.assert_consistent();

    list.add(4);
    assert_eq!(list.to_vec(), vec![1, 2, 4]);
    list.assert_consistent();
}

#[test]
fn test_remove_at_only_node() {
    let mut list = list_of(&[5]);
    assert_eq!(list.remove_at(12), Some(5));
    assert!(list.is_empty());
    list.assert_consistent();
}

#[test]
fn test_add_at_remove_at_restores() {
    for i in -4..8 {
        let mut list = list_of(&[1, 2, 3, 4]);
        list.add_at(99, i).unwrap();
        assert_eq!(list.size(), 5);
        // the insert position normalized against the pre-insert length
        let pos = i.rem_euclid(4);
        assert_eq!(list.get_at(pos), Ok(&99));
        assert_eq!(list.remove_at(pos), Some(99));
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
        list.assert_consistent();
    }
}

#[test]
fn test_change_val() {
    let mut list = list_of(&[1, 2, 3]);
    assert_eq!(list.change_val(-1, 30), Ok(3));
    assert_eq!(list.change_val(0, 10), Ok(1));
    assert_eq!(list.to_vec(), vec![10, 2, 30]);
    assert_eq!(list.last(), Some(&30));
}

#[test]
fn test_removed_slots_are_reused() {
    let mut list = list_of(&[1, 2, 3]);
    list.remove_at(1);
    list.remove();
    list.add(4);
    list.add(5);
    assert_eq!(list.nodes.capacity(), 3);
    assert_eq!(list.to_vec(), vec![1, 4, 5]);
    list.assert_consistent();
}

#[test]
fn test_unlinked_values_are_dropped() {
    use std::rc::Rc;

    let marker = Rc::new(());
    let mut list = SinglyLinkedList::new();
    for _ in 0..3 {
        list.add(Rc::clone(&marker));
    }
    list.remove_at(1);
    assert_eq!(Rc::strong_count(&marker), 3);
    list.remove();
    assert_eq!(Rc::strong_count(&marker), 2);
    list.clear();
    assert_eq!(Rc::strong_count(&marker), 1);
    list.assert_consistent();
}
