//! Report formatting and printing.
//!
//! Diagnostics come out cargo-style: severity, message, rule name, then
//! a clickable `--> path:line` location. Kept separate from the command
//! layer so pomo stays usable as a library without pulling in stdout
//! formatting.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, FileFailure};
use crate::diagnostic::{Diagnostic, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

/// Print a full command report to a custom writer (used by tests).
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    let mut sorted: Vec<&Diagnostic> = result.diagnostics.iter().collect();
    sorted.sort_by(|a, b| {
        a.file_path
            .cmp(&b.file_path)
            .then_with(|| a.line.cmp(&b.line))
    });
    for diagnostic in sorted {
        print_diagnostic(diagnostic, writer);
    }
    for failure in result.failures() {
        print_failure(failure, writer);
    }
    print_summary(result, writer);
}

fn print_diagnostic<W: Write>(diagnostic: &Diagnostic, writer: &mut W) {
    let severity = match diagnostic.severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };
    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity,
        diagnostic.message,
        diagnostic.rule.to_string().dimmed().cyan()
    );
    if let Some(path) = &diagnostic.file_path {
        match diagnostic.line {
            Some(line) => {
                let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), path, line);
            }
            None => {
                let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
            }
        }
    }
}

fn print_failure<W: Write>(failure: &FileFailure, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}: {}: {}",
        "error".bold().red(),
        failure.path.display(),
        failure.message
    );
}

fn print_summary<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Compile(summary) => {
            for file in &summary.compiled {
                let _ = writeln!(
                    writer,
                    "{} {}",
                    SUCCESS_MARK.green(),
                    format!(
                        "Compiled {} -> {} ({} {})",
                        file.source.display(),
                        file.output.display(),
                        file.entry_count,
                        plural(file.entry_count, "entry", "entries"),
                    )
                    .green()
                );
            }
            if !summary.failures.is_empty() {
                let total = summary.compiled.len() + summary.failures.len();
                let _ = writeln!(
                    writer,
                    "\n{} {} of {} {} failed to compile",
                    FAILURE_MARK.red(),
                    summary.failures.len(),
                    total,
                    plural(total, "file", "files"),
                );
            }
        }
        CommandSummary::Check(summary) => {
            let errors = result.error_count();
            let warnings = result.warning_count();
            if errors == 0 && warnings == 0 {
                let _ = writeln!(
                    writer,
                    "{} {}",
                    SUCCESS_MARK.green(),
                    format!(
                        "Checked {} {} - no problems found",
                        summary.checked,
                        plural(summary.checked, "file", "files")
                    )
                    .green()
                );
            } else {
                let _ = writeln!(
                    writer,
                    "\n{} {} problems ({} {}, {} {})",
                    FAILURE_MARK.red(),
                    errors + warnings,
                    errors,
                    plural(errors, "error", "errors").red(),
                    warnings,
                    plural(warnings, "warning", "warnings").yellow(),
                );
            }
        }
        CommandSummary::Inspect(summary) => {
            let _ = writeln!(
                writer,
                "{}: {} {}",
                summary.path.display(),
                summary.entries.len(),
                plural(summary.entries.len(), "entry", "entries"),
            );
            if let Some(header) = &summary.header {
                for line in header.lines() {
                    let _ = writeln!(writer, "  {}", line.dimmed());
                }
            }
            for (key, value) in &summary.entries {
                let _ = writeln!(writer, "{} => {}", display_string(key), display_string(value));
            }
        }
        CommandSummary::Init(summary) => {
            if summary.created {
                let _ = writeln!(
                    writer,
                    "{} {}",
                    SUCCESS_MARK.green(),
                    "Created .pomorc.json".green()
                );
            }
        }
    }
}

/// Quote a catalog string for terminal output, making the context (EOT)
/// and plural (NUL) separators visible.
fn display_string(s: &str) -> String {
    let escaped: String = s
        .chars()
        .map(|c| match c {
            '\u{4}' => " | ".to_string(),
            '\u{0}' => "\" / \"".to_string(),
            '\n' => "\\n".to_string(),
            '\t' => "\\t".to_string(),
            '"' => "\\\"".to_string(),
            c => c.to_string(),
        })
        .collect();
    format!("\"{}\"", escaped)
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
