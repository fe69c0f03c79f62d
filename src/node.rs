//! Owning link-chain nodes.

/// An owning link to the next node in a chain.
pub type Link<T> = Option<Box<Node<T>>>;

/// A single value in a chain, owning the rest of the chain after it.
#[derive(Debug)]
pub struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    /// Create a node with no successor.
    pub fn new(value: T) -> Node<T> {
        Node { value, next: None }
    }

    /// Create a node in front of an existing chain.
    pub fn with_next(value: T, next: Link<T>) -> Node<T> {
        Node { value, next }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replace the value, returning the old one.
    pub fn set_value(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    /// Detach and return the rest of the chain.
    pub fn take_next(&mut self) -> Link<T> {
        self.next.take()
    }

    /// Replace the successor, returning the previously linked chain.
    pub fn set_next(&mut self, next: Link<T>) -> Link<T> {
        std::mem::replace(&mut self.next, next)
    }

    /// Split the node into its value and the rest of the chain.
    pub fn into_parts(self) -> (T, Link<T>) {
        (self.value, self.next)
    }
}

#[test]
fn test_node_chain() {
    let tail = Box::new(Node::new(2));
    let mut head = Node::with_next(1, Some(tail));
    assert_eq!(head.value(), &1);
    assert_eq!(head.next().map(|n| *n.value()), Some(2));

    assert_eq!(head.set_value(5), 1);
    *head.value_mut() += 1;
    assert_eq!(head.value(), &6);

    let rest = head.take_next();
    assert!(head.next().is_none());
    let (v, after) = rest.map(|n| n.into_parts()).unwrap();
    assert_eq!(v, 2);
    assert!(after.is_none());
}

#[test]
fn test_set_next_returns_old() {
    let mut head = Node::new('a');
    assert!(head.set_next(Some(Box::new(Node::new('b')))).is_none());
    let old = head.set_next(None);
    assert_eq!(old.map(|n| *n.value()), Some('b'));
}
