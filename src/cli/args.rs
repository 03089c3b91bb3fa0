//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `compile`: compile PO sources into binary MO catalogs
//! - `check`: parse and validate PO sources without writing anything
//! - `inspect`: list the entries of a compiled MO catalog
//! - `init`: initialize a pomo configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::DuplicatePolicy;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Args)]
pub struct CompileCommand {
    /// Input translation source files (.po)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output catalog path (requires exactly one input file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory to place compiled catalogs in (overrides config file)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Keep entries flagged as fuzzy instead of skipping them
    #[arg(long)]
    pub include_fuzzy: bool,

    /// Policy for duplicate msgids (overrides config file)
    #[arg(long, value_enum)]
    pub on_duplicate: Option<DuplicatePolicy>,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Translation source files to validate (.po)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Treat entries flagged as fuzzy as kept, not skipped
    #[arg(long)]
    pub include_fuzzy: bool,
}

#[derive(Debug, Args)]
pub struct InspectCommand {
    /// Compiled catalog to inspect (.mo)
    pub file: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile translation sources (.po) into binary catalogs (.mo)
    Compile(CompileCommand),
    /// Validate translation sources and report problems without compiling
    Check(CheckCommand),
    /// List the entries of a compiled catalog
    Inspect(InspectCommand),
    /// Initialize a new .pomorc.json configuration file
    Init,
}
