//! An editing session over one translation source.
//!
//! The session owns what the original tool kept in ambient UI state: the
//! source path, the in-memory document buffer, and the chosen output
//! path. Lifecycle is load-on-open, mutate-in-editor, persist-on-save;
//! the buffer is exclusively owned and everything runs synchronously on
//! the caller's thread.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::BuildOptions;
use crate::compile::{self, CompileOutput};
use crate::error::CompileError;

#[derive(Debug)]
pub struct Session {
    source_path: PathBuf,
    output_path: PathBuf,
    buffer: String,
    dirty: bool,
}

impl Session {
    /// Load a translation source into a new session.
    ///
    /// The output path defaults to the source path with a `.mo`
    /// extension.
    pub fn open(path: &Path) -> Result<Self, CompileError> {
        let buffer = fs::read_to_string(path).map_err(|e| CompileError::io(path, e))?;
        Ok(Self {
            source_path: path.to_path_buf(),
            output_path: path.with_extension("mo"),
            buffer,
            dirty: false,
        })
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn set_output_path(&mut self, path: PathBuf) {
        self.output_path = path;
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Replace the document buffer, marking the session dirty.
    pub fn set_buffer(&mut self, content: String) {
        if content != self.buffer {
            self.buffer = content;
            self.dirty = true;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Persist the buffer back to the source file.
    pub fn save(&mut self) -> Result<(), CompileError> {
        fs::write(&self.source_path, &self.buffer)
            .map_err(|e| CompileError::io(&self.source_path, e))?;
        self.dirty = false;
        Ok(())
    }

    /// Compile the current buffer (not the file on disk) to catalog
    /// bytes. A failed compile leaves the buffer and both paths as they
    /// were.
    pub fn compile(&self, options: BuildOptions) -> Result<CompileOutput, CompileError> {
        compile::compile_str(&self.buffer, options)
    }

    /// Compile the buffer and write the catalog to the output path.
    pub fn compile_to_output(&self, options: BuildOptions) -> Result<CompileOutput, CompileError> {
        let output = self.compile(options)?;
        compile::write_catalog(&self.output_path, &output.bytes)?;
        Ok(output)
    }
}
