//! Stack on top of [`SinglyLinkedList`].
//!
//! Push, pop and top all work on the tail end of the list.

use crate::list::SinglyLinkedList;

/// Stack delegating to a singly-linked list.
#[derive(Debug)]
pub struct ListStack<T> {
    backing: SinglyLinkedList<T>,
}

impl<T> ListStack<T> {
    pub fn new() -> ListStack<T> {
        ListStack {
            backing: SinglyLinkedList::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.backing.add(value)
    }

    pub fn pop(&mut self) -> Option<T> {
        self.backing.remove()
    }

    /// The most recently pushed value.
    ///
    /// This is the list's tail, the same element as `get_at(-1)`, but an
    /// empty stack gives `None` instead of an index error.
    pub fn top(&self) -> Option<&T> {
        self.backing.last()
    }

    pub fn is_empty(&self) -> bool {
        self.backing.size() == 0
    }

    pub fn depth(&self) -> usize {
        self.backing.size()
    }

    /// Read-only view of the list holding the stack, bottom first.
    pub fn as_list(&self) -> &SinglyLinkedList<T> {
        &self.backing
    }
}

impl<T> Default for ListStack<T> {
    fn default() -> Self {
        ListStack::new()
    }
}

#[test]
fn test_empty() {
    let mut stack: ListStack<i32> = ListStack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.top(), None);
    assert_eq!(stack.pop(), None);
    assert!(stack.is_empty());
}

#[test]
fn test_top_is_tail() {
    let mut stack = ListStack::new();
    for v in [1, 2, 3] {
        stack.push(v);
    }
    assert_eq!(stack.top(), Some(&3));
    assert_eq!(stack.as_list().get_at(-1), Ok(&3));
    assert_eq!(stack.as_list().first(), Some(&1));
    assert_eq!(stack.depth(), 3);
}

#[test]
fn test_empty_top_vs_list_index() {
    use crate::list::ListError;

    let stack: ListStack<i32> = ListStack::new();
    // top on an empty stack is None, while the list's -1 index still fails
    assert_eq!(stack.top(), None);
    assert_eq!(stack.as_list().get_at(-1), Err(ListError::Empty));
}
