//! Linked-list walkthrough and index normalization.

use stackdemo::{ListError, SinglyLinkedList};

#[test]
fn test_list_walkthrough() {
    let mut ls = SinglyLinkedList::new();
    assert_eq!(ls.size(), 0);
    ls.add(1);
    ls.add(3);
    ls.add(5);
    assert_eq!(ls.to_string(), "[1, 3, 5]");

    ls.add_at(0, 0).unwrap();
    assert_eq!(ls.get_at(0), Ok(&0));
    assert_eq!(ls.to_string(), "[0, 1, 3, 5]");

    ls.remove_at(0);
    assert_eq!(ls.to_string(), "[1, 3, 5]");

    ls.remove();
    assert_eq!(ls.to_string(), "[1, 3]");

    ls.add_at(2, 1).unwrap();
    assert_eq!(ls.to_string(), "[1, 2, 3]");
    assert_eq!(ls.size(), 3);
}

#[test]
fn test_negative_indices_address_from_end() {
    let mut ls = SinglyLinkedList::new();
    for c in ['a', 'b', 'c'] {
        ls.add(c);
    }
    assert_eq!(ls.get_at(-1), Ok(&'c'));
    assert_eq!(ls.get_at(-2), Ok(&'b'));
    assert_eq!(ls.get_at(-3), Ok(&'a'));
    assert_eq!(ls.last(), ls.get_at(-1).ok());
}

#[test]
fn test_add_at_then_remove_at_round_trip() {
    let mut ls = SinglyLinkedList::new();
    for v in 0..6 {
        ls.add(v * 10);
    }
    let before = ls.to_vec();
    for i in [0, 1, 3, 5, -1, -6, 11] {
        ls.add_at(-1, i).unwrap();
        let pos = i.rem_euclid(6);
        assert_eq!(ls.remove_at(pos), Some(-1));
        assert_eq!(ls.to_vec(), before);
        assert_eq!(ls.size(), 6);
    }
}

#[test]
fn test_drain_from_both_ends() {
    let mut ls = SinglyLinkedList::new();
    for v in 1..=5 {
        ls.add(v);
    }
    assert_eq!(ls.remove_at(0), Some(1));
    assert_eq!(ls.remove(), Some(5));
    assert_eq!(ls.remove_at(-1), Some(4));
    assert_eq!(ls.remove(), Some(3));
    assert_eq!(ls.remove_at(0), Some(2));
    assert!(ls.is_empty());
    assert_eq!(ls.to_string(), "[]");
    assert_eq!(ls.remove(), None);
    assert_eq!(ls.remove_at(0), None);
    assert_eq!(ls.get_at(0), Err(ListError::Empty));

    ls.add(6);
    assert_eq!(ls.first(), Some(&6));
    assert_eq!(ls.last(), Some(&6));
}
