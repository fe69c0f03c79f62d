use anyhow::Result;
use clap::Parser;
use log::*;

mod commands;
mod reporting;

use commands::{Command, DemoCommands};

/// Exercise stacks and singly-linked lists.
#[derive(Parser, Debug)]
struct StackDemoCLI {
    /// Suppress informational output
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
    /// Increase logging verbosity (can be repeated)
    #[arg(short='v', long="verbose", action=clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: DemoCommands,
}

impl StackDemoCLI {
    fn init_logging(&self) -> Result<()> {
        let mut verbose: usize = 2;
        if self.verbose > 0 {
            verbose += self.verbose as usize;
        } else if self.quiet {
            verbose -= 1;
        }

        stderrlog::new()
            .module(module_path!())
            .verbosity(verbose)
            .init()?;
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = StackDemoCLI::parse();
    cli.init_logging()?;
    debug!("starting stackdemo");
    cli.command.run()?;
    Ok(())
}
