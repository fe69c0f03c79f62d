//! Stacks and singly-linked lists, several ways.
//!
//! The same LIFO interface ([`Stack`]) is provided by three representations:
//! a chain of boxed nodes ([`NodeStack`]), a [`SinglyLinkedList`]
//! ([`ListStack`]) and a growable array ([`ArrayStack`]).

pub mod arena;
pub mod list;
pub mod node;
pub mod ops;
pub mod stack;

pub use list::{ListError, SinglyLinkedList};
pub use stack::{ArrayStack, ListStack, NodeStack, Stack, StackKind};
