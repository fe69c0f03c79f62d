//! Scripted operations for replaying against lists and stacks.
//!
//! Operations are written as colon-separated tokens, e.g. `add:5`,
//! `add-at:0:2` or `pop`.  Each one knows how to apply itself and what (if
//! anything) it reports back for display.
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

use crate::list::{ListError, SinglyLinkedList};
use crate::stack::Stack;

/// Errors parsing an operation token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpError {
    #[error("unknown operation `{0}`")]
    Unknown(String),
    #[error("operation `{op}` takes {expected} argument(s), found {found}")]
    Arity {
        op: String,
        expected: usize,
        found: usize,
    },
    #[error("invalid number `{text}` for `{op}`: {source}")]
    Number {
        op: String,
        text: String,
        source: ParseIntError,
    },
}

/// An operation on a [`SinglyLinkedList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOp {
    Add(i64),
    Remove,
    AddAt { value: i64, index: isize },
    RemoveAt(isize),
    Get(isize),
    Set { index: isize, value: i64 },
    Size,
    Print,
}

/// An operation on any [`Stack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOp {
    Push(i64),
    Pop,
    Top,
    Empty,
}

struct Token<'a> {
    text: &'a str,
    name: &'a str,
    args: Vec<&'a str>,
}

impl<'a> Token<'a> {
    fn split(text: &'a str) -> Token<'a> {
        let mut parts = text.split(':');
        let name = parts.next().unwrap_or_default();
        Token {
            text,
            name,
            args: parts.collect(),
        }
    }

    fn expect_args(&self, expected: usize) -> Result<(), OpError> {
        if self.args.len() == expected {
            Ok(())
        } else {
            Err(OpError::Arity {
                op: self.name.to_string(),
                expected,
                found: self.args.len(),
            })
        }
    }

    fn arg<N: FromStr<Err = ParseIntError>>(&self, i: usize) -> Result<N, OpError> {
        let text = self.args[i];
        text.parse().map_err(|source| OpError::Number {
            op: self.name.to_string(),
            text: text.to_string(),
            source,
        })
    }

    fn unknown(&self) -> OpError {
        OpError::Unknown(self.text.to_string())
    }
}

impl FromStr for ListOp {
    type Err = OpError;

    fn from_str(s: &str) -> Result<ListOp, OpError> {
        let tok = Token::split(s.trim());
        let (arity, op) = match tok.name {
            "add" => (1, None),
            "remove" => (0, Some(ListOp::Remove)),
            "add-at" => (2, None),
            "remove-at" => (1, None),
            "get" => (1, None),
            "set" => (2, None),
            "size" => (0, Some(ListOp::Size)),
            "print" => (0, Some(ListOp::Print)),
            _ => return Err(tok.unknown()),
        };
        tok.expect_args(arity)?;
        if let Some(op) = op {
            return Ok(op);
        }

        Ok(match tok.name {
            "add" => ListOp::Add(tok.arg(0)?),
            "add-at" => ListOp::AddAt {
                value: tok.arg(0)?,
                index: tok.arg(1)?,
            },
            "remove-at" => ListOp::RemoveAt(tok.arg(0)?),
            "get" => ListOp::Get(tok.arg(0)?),
            "set" => ListOp::Set {
                index: tok.arg(0)?,
                value: tok.arg(1)?,
            },
            _ => return Err(tok.unknown()),
        })
    }
}

impl FromStr for StackOp {
    type Err = OpError;

    fn from_str(s: &str) -> Result<StackOp, OpError> {
        let tok = Token::split(s.trim());
        match tok.name {
            "push" => {
                tok.expect_args(1)?;
                Ok(StackOp::Push(tok.arg(0)?))
            }
            "pop" | "top" | "empty" => {
                tok.expect_args(0)?;
                Ok(match tok.name {
                    "pop" => StackOp::Pop,
                    "top" => StackOp::Top,
                    _ => StackOp::Empty,
                })
            }
            _ => Err(tok.unknown()),
        }
    }
}

impl fmt::Display for ListOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListOp::Add(v) => write!(f, "add:{}", v),
            ListOp::Remove => write!(f, "remove"),
            ListOp::AddAt { value, index } => write!(f, "add-at:{}:{}", value, index),
            ListOp::RemoveAt(i) => write!(f, "remove-at:{}", i),
            ListOp::Get(i) => write!(f, "get:{}", i),
            ListOp::Set { index, value } => write!(f, "set:{}:{}", index, value),
            ListOp::Size => write!(f, "size"),
            ListOp::Print => write!(f, "print"),
        }
    }
}

impl fmt::Display for StackOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackOp::Push(v) => write!(f, "push:{}", v),
            StackOp::Pop => write!(f, "pop"),
            StackOp::Top => write!(f, "top"),
            StackOp::Empty => write!(f, "empty"),
        }
    }
}

impl ListOp {
    /// The list walkthrough: build `[1, 3, 5]`, insert and remove at the
    /// head, drop the tail, then insert in the middle.
    pub fn demo() -> Vec<ListOp> {
        use ListOp::*;
        vec![
            Size,
            Add(1),
            Add(3),
            Add(5),
            Print,
            AddAt { value: 0, index: 0 },
            Get(0),
            Print,
            RemoveAt(0),
            Print,
            Remove,
            Print,
            AddAt { value: 2, index: 1 },
            Print,
        ]
    }

    /// Apply the operation, returning a line to report if it produces one.
    pub fn apply(self, list: &mut SinglyLinkedList<i64>) -> Result<Option<String>, ListError> {
        Ok(match self {
            ListOp::Add(v) => {
                list.add(v);
                None
            }
            ListOp::Remove => {
                list.remove();
                None
            }
            ListOp::AddAt { value, index } => {
                list.add_at(value, index)?;
                None
            }
            ListOp::RemoveAt(index) => {
                list.remove_at(index);
                None
            }
            ListOp::Get(index) => Some(list.get_at(index)?.to_string()),
            ListOp::Set { index, value } => {
                list.change_val(index, value)?;
                None
            }
            ListOp::Size => Some(list.size().to_string()),
            ListOp::Print => Some(list.to_string()),
        })
    }
}

impl StackOp {
    /// The stack walkthrough: push two values, pop one, and drain.
    pub fn demo() -> Vec<StackOp> {
        use StackOp::*;
        vec![Push(1), Top, Push(7), Pop, Top, Pop, Empty]
    }

    /// Apply the operation, returning a line to report if it produces one.
    pub fn apply(self, stack: &mut dyn Stack<i64>) -> Option<String> {
        match self {
            StackOp::Push(v) => {
                stack.push(v);
                None
            }
            StackOp::Pop => {
                stack.pop();
                None
            }
            StackOp::Top => Some(match stack.top() {
                Some(v) => v.to_string(),
                None => "None".to_string(),
            }),
            StackOp::Empty => Some(stack.is_empty().to_string()),
        }
    }
}

#[test]
fn test_parse_list_ops() {
    assert_eq!("add:5".parse::<ListOp>(), Ok(ListOp::Add(5)));
    assert_eq!("remove".parse::<ListOp>(), Ok(ListOp::Remove));
    assert_eq!(
        "add-at:0:-1".parse::<ListOp>(),
        Ok(ListOp::AddAt {
            value: 0,
            index: -1
        })
    );
    assert_eq!("remove-at:2".parse::<ListOp>(), Ok(ListOp::RemoveAt(2)));
    assert_eq!(
        "set:1:9".parse::<ListOp>(),
        Ok(ListOp::Set { index: 1, value: 9 })
    );
    assert_eq!(" print ".parse::<ListOp>(), Ok(ListOp::Print));
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        "frob".parse::<ListOp>(),
        Err(OpError::Unknown("frob".into()))
    );
    assert_eq!(
        "add".parse::<ListOp>(),
        Err(OpError::Arity {
            op: "add".into(),
            expected: 1,
            found: 0
        })
    );
    assert_eq!(
        "size:1".parse::<ListOp>(),
        Err(OpError::Arity {
            op: "size".into(),
            expected: 0,
            found: 1
        })
    );
    assert!(matches!(
        "push:x".parse::<StackOp>(),
        Err(OpError::Number { .. })
    ));
    assert!(matches!(
        "add".parse::<StackOp>(),
        Err(OpError::Unknown(_))
    ));
}

#[test]
fn test_display_parses_back() {
    for op in ListOp::demo() {
        assert_eq!(op.to_string().parse::<ListOp>(), Ok(op));
    }
    for op in StackOp::demo() {
        assert_eq!(op.to_string().parse::<StackOp>(), Ok(op));
    }
}

#[test]
fn test_list_demo_output() {
    let mut list = SinglyLinkedList::new();
    let out: Vec<String> = ListOp::demo()
        .into_iter()
        .filter_map(|op| op.apply(&mut list).unwrap())
        .collect();
    assert_eq!(
        out,
        vec![
            "0",
            "[1, 3, 5]",
            "0",
            "[0, 1, 3, 5]",
            "[1, 3, 5]",
            "[1, 3]",
            "[1, 2, 3]"
        ]
    );
}

#[test]
fn test_stack_demo_output() {
    use crate::stack::StackKind;

    for kind in StackKind::ALL {
        let mut stack = kind.build::<i64>();
        let out: Vec<String> = StackOp::demo()
            .into_iter()
            .filter_map(|op| op.apply(&mut *stack))
            .collect();
        assert_eq!(out, vec!["1", "1", "true"], "{} stack", kind);
    }
}

#[test]
fn test_list_op_on_empty_fails() {
    let mut list = SinglyLinkedList::new();
    assert_eq!(ListOp::Get(0).apply(&mut list), Err(ListError::Empty));
    assert_eq!(ListOp::RemoveAt(0).apply(&mut list), Ok(None));
}
