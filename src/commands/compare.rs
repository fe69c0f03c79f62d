//! stack comparison command

use std::time::{Duration, Instant};

use anstyle::Style;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use stackdemo::{Stack, StackKind};

use crate::reporting::*;

use super::Command;

const TICK: u64 = 1024;

/// Compare push/pop performance of the stack implementations.
#[derive(Debug, Args)]
#[command(name = "compare")]
pub struct CompareCmd {
    /// Number of values to push (and pop) on each stack.
    #[arg(short = 'n', long = "count", default_value_t = 100_000)]
    count: u64,

    /// Stack implementations to compare (default: all).
    #[arg(short = 'k', long = "kind", value_enum)]
    kinds: Vec<StackKind>,
}

impl Command for CompareCmd {
    fn run(&self) -> Result<()> {
        let kinds = if self.kinds.is_empty() {
            StackKind::ALL.to_vec()
        } else {
            self.kinds.clone()
        };
        info!("comparing {} stacks with {} values", kinds.len(), self.count);

        let style = ProgressStyle::with_template("{prefix:>6} {bar:40} {pos}/{len}")?;
        let mut timings = Vec::with_capacity(kinds.len());
        for kind in kinds {
            let pb = ProgressBar::new(self.count * 2)
                .with_style(style.clone())
                .with_prefix(kind.to_string());
            let mut stack = kind.build::<u64>();
            let elapsed = exercise(&mut *stack, self.count, &pb)
                .map_err(|e| anyhow!("{} stack: {}", kind, e))?;
            pb.finish_and_clear();
            debug!("{} stack finished in {:?}", kind, elapsed);
            timings.push((kind, elapsed));
        }

        let bold = Style::new().bold();
        anstream::println!("{bold}{:>6}  {:>12}{bold:#}", "kind", "elapsed");
        for (kind, elapsed) in timings {
            anstream::println!("{:>6}  {:>12.3?}", kind.to_string(), elapsed);
        }
        Ok(())
    }
}

/// Push `count` values, then pop them all, checking they come back in reverse.
fn exercise(stack: &mut dyn Stack<u64>, count: u64, pb: &ProgressBar) -> Result<Duration> {
    let start = Instant::now();
    for i in 0..count {
        stack.push(i);
        if i % TICK == 0 {
            pb.set_position(i);
        }
    }
    for i in (0..count).rev() {
        match stack.pop() {
            Some(v) if v == i => (),
            other => return Err(anyhow!("popped {:?}, expected {}", other, i)),
        }
        if i % TICK == 0 {
            pb.set_position(count * 2 - i);
        }
    }
    if !stack.is_empty() {
        return Err(anyhow!("stack not empty after popping every value"));
    }
    Ok(start.elapsed())
}
