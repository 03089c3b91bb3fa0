use std::path::PathBuf;

use crate::cli::ExitStatus;
use crate::diagnostic::{Diagnostic, Severity};

/// One source compiled to a catalog on disk.
#[derive(Debug)]
pub struct CompiledFile {
    pub source: PathBuf,
    pub output: PathBuf,
    pub entry_count: usize,
}

/// One input that could not be processed.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug)]
pub struct CompileSummary {
    pub compiled: Vec<CompiledFile>,
    pub failures: Vec<FileFailure>,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub checked: usize,
    pub failures: Vec<FileFailure>,
}

#[derive(Debug)]
pub struct InspectSummary {
    pub path: PathBuf,
    pub header: Option<String>,
    /// Message entries, metadata excluded, in catalog order.
    pub entries: Vec<(String, String)>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

#[derive(Debug)]
pub enum CommandSummary {
    Compile(CompileSummary),
    Check(CheckSummary),
    Inspect(InspectSummary),
    Init(InitSummary),
}

/// Result of running a pomo command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Diagnostics gathered across all inputs, paths attached.
    pub diagnostics: Vec<Diagnostic>,
    /// If true, warnings alone make the command exit non-zero
    /// (`check` semantics; `compile` tolerates warnings).
    pub strict_warnings: bool,
}

impl CommandResult {
    pub fn error_count(&self) -> usize {
        let diag_errors = self
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        diag_errors + self.failures().len()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    pub fn failures(&self) -> &[FileFailure] {
        match &self.summary {
            CommandSummary::Compile(s) => &s.failures,
            CommandSummary::Check(s) => &s.failures,
            CommandSummary::Inspect(_) | CommandSummary::Init(_) => &[],
        }
    }

    pub fn exit_status(&self) -> ExitStatus {
        if self.error_count() > 0 {
            ExitStatus::Failure
        } else if self.strict_warnings && self.warning_count() > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
