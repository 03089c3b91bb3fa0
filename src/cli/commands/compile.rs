use std::path::{Path, PathBuf};

use anyhow::Result;

use super::{
    CommandResult, CommandSummary,
    command_result::{CompileSummary, CompiledFile, FileFailure},
};
use crate::catalog::BuildOptions;
use crate::cli::args::CompileCommand;
use crate::config::{Config, DuplicatePolicy};
use crate::diagnostic::{Diagnostic, Rule, Severity};
use crate::session::Session;

pub fn compile(cmd: CompileCommand) -> Result<CommandResult> {
    let config = Config::load()?;

    if cmd.output.is_some() && cmd.files.len() > 1 {
        anyhow::bail!("--output requires exactly one input file");
    }
    let output_dir = cmd
        .output_dir
        .or_else(|| config.output_dir.as_ref().map(PathBuf::from));
    let policy = cmd.on_duplicate.unwrap_or(config.on_duplicate);
    let options = BuildOptions {
        include_fuzzy: cmd.include_fuzzy || config.include_fuzzy,
        lint: false,
    };

    let mut compiled = Vec::new();
    let mut failures = Vec::new();
    let mut diagnostics = Vec::new();

    // One failed input never aborts the batch; the exit status carries
    // the overall outcome.
    for file in &cmd.files {
        let mut session = match Session::open(file) {
            Ok(session) => session,
            Err(err) => {
                failures.push(FileFailure {
                    path: file.clone(),
                    message: err.to_string(),
                });
                continue;
            }
        };

        if let Some(output) = &cmd.output {
            session.set_output_path(output.clone());
        } else if let Some(dir) = &output_dir {
            session.set_output_path(dir.join(catalog_file_name(file)));
        }

        let output = match session.compile(options) {
            Ok(output) => output,
            Err(err) => {
                failures.push(FileFailure {
                    path: file.clone(),
                    message: err.to_string(),
                });
                continue;
            }
        };

        let file_diagnostics = apply_duplicate_policy(output.diagnostics, policy);
        let rejected = file_diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error);
        diagnostics.extend(
            file_diagnostics
                .into_iter()
                .map(|d| d.with_file(&file.display().to_string())),
        );
        if rejected {
            failures.push(FileFailure {
                path: file.clone(),
                message: "duplicate msgids (policy is 'error')".to_string(),
            });
            continue;
        }

        if let Err(err) = crate::compile::write_catalog(session.output_path(), &output.bytes) {
            failures.push(FileFailure {
                path: file.clone(),
                message: err.to_string(),
            });
            continue;
        }

        compiled.push(CompiledFile {
            source: file.clone(),
            output: session.output_path().to_path_buf(),
            entry_count: output.entry_count,
        });
    }

    Ok(CommandResult {
        summary: CommandSummary::Compile(CompileSummary { compiled, failures }),
        diagnostics,
        strict_warnings: false,
    })
}

/// `dir/messages.po` compiles to `<output_dir>/messages.mo`.
fn catalog_file_name(source: &Path) -> PathBuf {
    let mut name = source
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("messages.po"));
    name.set_extension("mo");
    name
}

/// Demote, promote, or drop duplicate-key warnings per the policy.
fn apply_duplicate_policy(
    diagnostics: Vec<Diagnostic>,
    policy: DuplicatePolicy,
) -> Vec<Diagnostic> {
    diagnostics
        .into_iter()
        .filter_map(|mut d| {
            if d.rule != Rule::DuplicateKey {
                return Some(d);
            }
            match policy {
                DuplicatePolicy::Warn => Some(d),
                DuplicatePolicy::Allow => None,
                DuplicatePolicy::Error => {
                    d.severity = Severity::Error;
                    Some(d)
                }
            }
        })
        .collect()
}
