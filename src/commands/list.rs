//! linked-list replay command

use std::fmt::Display;

use anstyle::Style;
use clap::Args;

use stackdemo::ops::ListOp;
use stackdemo::SinglyLinkedList;

use crate::reporting::*;

use super::Command;

/// Replay operations against a singly-linked list.
#[derive(Debug, Args)]
#[command(name = "list")]
pub struct ListCmd {
    /// Echo each operation before its output.
    #[arg(short = 'e', long = "echo")]
    echo: bool,

    /// Operations to apply (add:V, remove, add-at:V:I, remove-at:I, get:I,
    /// set:I:V, size, print); defaults to the list walkthrough.
    #[arg(name = "OP")]
    ops: Vec<ListOp>,
}

impl Command for ListCmd {
    fn run(&self) -> Result<()> {
        let ops = if self.ops.is_empty() {
            info!("no operations given, replaying the list walkthrough");
            ListOp::demo()
        } else {
            self.ops.clone()
        };

        let mut list = SinglyLinkedList::new();
        for op in ops {
            debug!("applying {}", op);
            if self.echo {
                echo_op(&op);
            }
            if op == ListOp::Print {
                print_list(&list);
            } else if let Some(line) = op.apply(&mut list).with_op_context(op)? {
                anstream::println!("{}", line);
            }
        }

        info!("list finished with {} elements", list.size());
        Ok(())
    }
}

/// Print a list as `[a, b, c]`.
pub fn print_list<T: Display>(list: &SinglyLinkedList<T>) {
    anstream::println!("{}", list);
}

pub(super) fn echo_op<O: Display>(op: &O) {
    let dim = Style::new().dimmed();
    anstream::println!("{dim}> {op}{dim:#}");
}
