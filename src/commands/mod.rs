use clap::Subcommand;
use enum_dispatch::*;

mod compare;
mod list;
mod stack;

/// Interface for stackdemo commands.
#[enum_dispatch]
pub trait Command {
    fn run(&self) -> anyhow::Result<()>;
}

#[derive(Subcommand, Debug)]
#[enum_dispatch(Command)]
pub enum DemoCommands {
    List(list::ListCmd),
    Stack(stack::StackCmd),
    Compare(compare::CompareCmd),
}
