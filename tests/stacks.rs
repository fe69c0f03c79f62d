//! Behaviour shared by every stack implementation.

use stackdemo::{ArrayStack, ListStack, NodeStack, Stack, StackKind};

fn check_lifo(stack: &mut dyn Stack<i32>, values: &[i32]) {
    for v in values {
        stack.push(*v);
        assert_eq!(stack.top(), Some(v));
    }
    for v in values.iter().rev() {
        assert!(!stack.is_empty());
        assert_eq!(stack.top(), Some(v));
        assert_eq!(stack.pop(), Some(*v));
    }
    assert!(stack.is_empty());
}

#[test]
fn test_lifo_all_kinds() {
    let values = [4, 8, 15, 16, 23, 42];
    for kind in StackKind::ALL {
        let mut stack = kind.build::<i32>();
        check_lifo(&mut *stack, &values);
    }
}

#[test]
fn test_empty_tracks_net_pushes() {
    for kind in StackKind::ALL {
        let mut stack = kind.build::<i32>();
        assert!(stack.is_empty());
        stack.push(1);
        stack.push(2);
        stack.pop();
        assert!(!stack.is_empty(), "{} stack", kind);
        stack.push(3);
        stack.pop();
        stack.pop();
        assert!(stack.is_empty(), "{} stack", kind);
    }
}

#[test]
fn test_pop_empty_is_noop() {
    for kind in StackKind::ALL {
        let mut stack = kind.build::<i32>();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty(), "{} stack", kind);
        assert_eq!(stack.top(), None, "{} stack", kind);
    }
}

/// push(1); top; push(7); pop; top; pop; empty
fn walkthrough<S: Stack<i32>>(mut stack: S) -> (Option<i32>, Option<i32>, bool) {
    stack.push(1);
    let first = stack.top().copied();
    stack.push(7);
    stack.pop();
    let second = stack.top().copied();
    stack.pop();
    (first, second, stack.is_empty())
}

#[test]
fn test_walkthrough_list_stack() {
    assert_eq!(walkthrough(ListStack::new()), (Some(1), Some(1), true));
}

#[test]
fn test_walkthrough_matches_across_kinds() {
    let expected = walkthrough(ListStack::new());
    assert_eq!(walkthrough(ArrayStack::new()), expected);
    assert_eq!(walkthrough(NodeStack::new()), expected);
}

#[test]
fn test_interleaved_ops_agree() {
    let mut stacks: Vec<Box<dyn Stack<i32>>> =
        StackKind::ALL.iter().map(|k| k.build::<i32>()).collect();
    for step in 0..200 {
        for stack in stacks.iter_mut() {
            if step % 3 == 2 {
                stack.pop();
            } else {
                stack.push(step);
            }
        }
        let tops: Vec<Option<i32>> = stacks.iter().map(|s| s.top().copied()).collect();
        assert!(tops.windows(2).all(|w| w[0] == w[1]), "step {}: {:?}", step, tops);
    }
}
