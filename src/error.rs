//! Typed errors for the compile pipeline.
//!
//! Two failure kinds exist: the source could not be parsed as PO syntax,
//! or the output could not be written. Everything else (bad CLI usage,
//! missing config) stays in the anyhow layer at the CLI boundary.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompileError {
    /// The translation source is not valid PO syntax.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A source could not be read or a catalog could not be written.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CompileError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        CompileError::Parse {
            line,
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CompileError::Io {
            path: path.into(),
            source,
        }
    }
}
