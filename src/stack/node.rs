//! Stack built directly from linked nodes.

use log::*;

use crate::node::{Link, Node};

/// Singly-linked stack with no backing list.
///
/// Depth is the length of the chain rooted at `top`; no counter is kept.
#[derive(Debug)]
#[repr(transparent)]
pub struct NodeStack<T> {
    top: Link<T>,
}

impl<T> NodeStack<T> {
    pub fn new() -> NodeStack<T> {
        NodeStack { top: None }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn push(&mut self, value: T) {
        let next = self.top.take();
        self.top = Some(Box::new(Node::with_next(value, next)))
    }

    pub fn pop(&mut self) -> Option<T> {
        let Some(node) = self.top.take() else {
            trace!("pop on empty node stack ignored");
            return None;
        };
        let (value, next) = node.into_parts();
        self.top = next;
        Some(value)
    }

    pub fn top(&self) -> Option<&T> {
        self.top.as_ref().map(|n| n.value())
    }

    /// Count the nodes below and including the top.
    pub fn depth(&self) -> usize {
        let mut n = 0;
        let mut cur = self.top.as_deref();
        while let Some(node) = cur {
            n += 1;
            cur = node.next();
        }
        n
    }
}

impl<T> Default for NodeStack<T> {
    fn default() -> Self {
        NodeStack::new()
    }
}

impl<T> Drop for NodeStack<T> {
    // unlink one node at a time; the default recursive drop overflows on deep chains
    fn drop(&mut self) {
        let mut cur = self.top.take();
        while let Some(mut node) = cur {
            cur = node.take_next();
        }
    }
}

#[test]
fn test_empty() {
    let mut stack: NodeStack<i32> = NodeStack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.top(), None);
    assert_eq!(stack.pop(), None);
    assert!(stack.is_empty());
}

#[test]
fn test_push_one() {
    let mut stack = NodeStack::new();
    stack.push(3);
    assert!(!stack.is_empty());
    assert_eq!(stack.top(), Some(&3));
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.top(), None);
    assert_eq!(stack.pop(), None);
}

#[test]
fn test_depth() {
    let mut stack = NodeStack::new();
    assert_eq!(stack.depth(), 0);
    for i in 0..5 {
        stack.push(i);
    }
    assert_eq!(stack.depth(), 5);
    stack.pop();
    assert_eq!(stack.depth(), 4);
}

#[test]
fn test_deep_drop() {
    let mut stack = NodeStack::new();
    for i in 0..200_000 {
        stack.push(i);
    }
    drop(stack);
}
