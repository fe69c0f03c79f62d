//! stack replay command

use clap::Args;

use stackdemo::ops::StackOp;
use stackdemo::{Stack, StackKind};

use crate::reporting::*;

use super::list::echo_op;
use super::Command;

/// Replay operations against one of the stack implementations.
#[derive(Debug, Args)]
#[command(name = "stack")]
pub struct StackCmd {
    /// Stack implementation to use.
    #[arg(short = 'k', long = "kind", value_enum, default_value_t = StackKind::List)]
    kind: StackKind,

    /// Echo each operation before its output.
    #[arg(short = 'e', long = "echo")]
    echo: bool,

    /// Operations to apply (push:V, pop, top, empty); defaults to the stack
    /// walkthrough.
    #[arg(name = "OP")]
    ops: Vec<StackOp>,
}

impl Command for StackCmd {
    fn run(&self) -> Result<()> {
        info!("using {} stack", self.kind);
        let ops = if self.ops.is_empty() {
            info!("no operations given, replaying the stack walkthrough");
            StackOp::demo()
        } else {
            self.ops.clone()
        };

        let mut stack = self.kind.build::<i64>();
        for op in ops {
            debug!("applying {}", op);
            if self.echo {
                echo_op(&op);
            }
            if let Some(line) = op.apply(&mut *stack) {
                anstream::println!("{}", line);
            }
        }

        if !stack.is_empty() {
            info!("{} stack left non-empty", self.kind);
        }
        Ok(())
    }
}
