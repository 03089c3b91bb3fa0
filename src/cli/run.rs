//! Command dispatch.

use anyhow::Result;

use super::args::{Arguments, Command};
use super::commands::CommandResult;
use super::commands::{check::check, compile::compile, init::init, inspect::inspect};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Compile(cmd)) => compile(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Inspect(cmd)) => inspect(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
