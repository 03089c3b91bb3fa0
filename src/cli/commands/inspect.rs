use std::fs;

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, command_result::InspectSummary};
use crate::cli::args::InspectCommand;
use crate::mo;

/// Read a compiled catalog back and list its entries.
pub fn inspect(cmd: InspectCommand) -> Result<CommandResult> {
    let bytes = fs::read(&cmd.file)
        .with_context(|| format!("cannot read {}", cmd.file.display()))?;
    let catalog = mo::read(&bytes)
        .with_context(|| format!("cannot parse {}", cmd.file.display()))?;

    let header = catalog.header().map(str::to_string);
    let entries = catalog
        .entries()
        .iter()
        .filter(|(key, _)| !key.is_empty())
        .cloned()
        .collect();

    Ok(CommandResult {
        summary: CommandSummary::Inspect(InspectSummary {
            path: cmd.file,
            header,
            entries,
        }),
        diagnostics: Vec::new(),
        strict_warnings: false,
    })
}
