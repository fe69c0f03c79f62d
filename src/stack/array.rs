//! Stack on a growable array.

use log::*;

/// Stack over a `Vec`; the top is the last element.
#[derive(Debug)]
pub struct ArrayStack<T> {
    items: Vec<T>,
}

impl<T> ArrayStack<T> {
    pub fn new() -> ArrayStack<T> {
        ArrayStack { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> ArrayStack<T> {
        ArrayStack {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value)
    }

    pub fn pop(&mut self) -> Option<T> {
        let value = self.items.pop();
        if value.is_none() {
            trace!("pop on empty array stack ignored");
        }
        value
    }

    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        ArrayStack::new()
    }
}

#[test]
fn test_empty() {
    let mut stack: ArrayStack<i32> = ArrayStack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.top(), None);
    assert_eq!(stack.pop(), None);
}

#[test]
fn test_pop_keeps_capacity() {
    let mut stack = ArrayStack::with_capacity(4);
    stack.push('a');
    stack.push('b');
    let cap = stack.items.capacity();
    assert_eq!(stack.pop(), Some('b'));
    assert_eq!(stack.items.capacity(), cap);
    assert_eq!(stack.top(), Some(&'a'));
    assert_eq!(stack.depth(), 1);
}
