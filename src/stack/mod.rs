//! Stack variants sharing one interface.
//!
//! [`NodeStack`], [`ListStack`] and [`ArrayStack`] store their values in
//! different ways but offer the same operations through [`Stack`], so they
//! can be swapped for one another (see [`StackKind`]).
use std::fmt;

use clap::ValueEnum;

mod array;
mod list;
mod node;

pub use array::ArrayStack;
pub use list::ListStack;
pub use node::NodeStack;

/// Interface for LIFO stacks.
pub trait Stack<T> {
    /// Put a value on top of the stack.
    fn push(&mut self, value: T);

    /// Remove and return the top value; `None` (and no change) when empty.
    fn pop(&mut self) -> Option<T>;

    /// Look at the top value.
    fn top(&self) -> Option<&T>;

    fn is_empty(&self) -> bool;
}

macro_rules! delegate_stack {
    ($ty:ident) => {
        impl<T> Stack<T> for $ty<T> {
            fn push(&mut self, value: T) {
                $ty::push(self, value)
            }

            fn pop(&mut self) -> Option<T> {
                $ty::pop(self)
            }

            fn top(&self) -> Option<&T> {
                $ty::top(self)
            }

            fn is_empty(&self) -> bool {
                $ty::is_empty(self)
            }
        }
    };
}

delegate_stack!(NodeStack);
delegate_stack!(ListStack);
delegate_stack!(ArrayStack);

/// Selector for a stack implementation.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackKind {
    /// Chain of boxed nodes.
    Node,
    /// Singly-linked list.
    List,
    /// Growable array.
    Array,
}

impl StackKind {
    pub const ALL: [StackKind; 3] = [StackKind::Node, StackKind::List, StackKind::Array];

    /// Create an empty stack of this kind.
    pub fn build<T: 'static>(self) -> Box<dyn Stack<T>> {
        match self {
            StackKind::Node => Box::new(NodeStack::new()),
            StackKind::List => Box::new(ListStack::new()),
            StackKind::Array => Box::new(ArrayStack::new()),
        }
    }
}

impl fmt::Display for StackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StackKind::Node => "node",
            StackKind::List => "list",
            StackKind::Array => "array",
        };
        f.write_str(name)
    }
}

#[test]
fn test_each_kind_is_lifo() {
    for kind in StackKind::ALL {
        let mut stack = kind.build::<i32>();
        for v in 0..10 {
            stack.push(v);
        }
        for v in (0..10).rev() {
            assert_eq!(stack.top(), Some(&v), "{} stack", kind);
            assert_eq!(stack.pop(), Some(v), "{} stack", kind);
        }
        assert!(stack.is_empty(), "{} stack", kind);
        assert_eq!(stack.pop(), None);
    }
}
