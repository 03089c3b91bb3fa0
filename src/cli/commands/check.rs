use std::fs;

use anyhow::Result;

use super::{
    CommandResult, CommandSummary,
    command_result::{CheckSummary, FileFailure},
};
use crate::catalog::{self, BuildOptions};
use crate::cli::args::CheckCommand;
use crate::config::Config;
use crate::po;

/// Parse and validate sources without writing anything.
///
/// Runs the same build the compiler runs, plus the advisory lints
/// (empty translations, plural-form counts), and discards the catalog.
pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let config = Config::load()?;
    let options = BuildOptions {
        include_fuzzy: cmd.include_fuzzy || config.include_fuzzy,
        lint: true,
    };

    let mut checked = 0;
    let mut failures = Vec::new();
    let mut diagnostics = Vec::new();

    for file in &cmd.files {
        let source = match fs::read_to_string(file) {
            Ok(source) => source,
            Err(err) => {
                failures.push(FileFailure {
                    path: file.clone(),
                    message: format!("cannot read {}: {}", file.display(), err),
                });
                continue;
            }
        };
        match po::parse(&source) {
            Ok(entries) => {
                checked += 1;
                let (_, file_diagnostics) = catalog::build(&entries, options);
                diagnostics.extend(
                    file_diagnostics
                        .into_iter()
                        .map(|d| d.with_file(&file.display().to_string())),
                );
            }
            Err(err) => {
                failures.push(FileFailure {
                    path: file.clone(),
                    message: err.to_string(),
                });
            }
        }
    }

    Ok(CommandResult {
        summary: CommandSummary::Check(CheckSummary { checked, failures }),
        diagnostics,
        strict_warnings: true,
    })
}
