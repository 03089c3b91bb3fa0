//! The single-shot compile pipeline: source text in, catalog bytes out.

use std::fs;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::catalog::{self, BuildOptions};
use crate::diagnostic::Diagnostic;
use crate::error::CompileError;
use crate::mo;
use crate::po;

/// Result of compiling one translation source.
#[derive(Debug)]
pub struct CompileOutput {
    /// The serialized catalog.
    pub bytes: Vec<u8>,
    /// Number of message entries in the catalog, metadata entry included.
    pub entry_count: usize,
    /// Non-fatal findings (duplicate keys, synthesized header, ...).
    pub diagnostics: Vec<Diagnostic>,
}

/// Compile PO source text into MO catalog bytes.
///
/// Pure and synchronous: parse, build the sorted catalog, serialize.
/// Compiling the same text twice yields byte-identical output.
pub fn compile_str(source: &str, options: BuildOptions) -> Result<CompileOutput, CompileError> {
    let entries = po::parse(source)?;
    let (catalog, diagnostics) = catalog::build(&entries, options);
    let bytes = mo::write(&catalog);
    Ok(CompileOutput {
        bytes,
        entry_count: catalog.len(),
        diagnostics,
    })
}

/// Write catalog bytes to `path`, atomically.
///
/// The bytes land in a temporary file in the destination directory and
/// are renamed into place, so a failure part-way leaves any pre-existing
/// file at `path` untouched and never a half-written one. The parent
/// directory is created if missing.
pub fn write_catalog(path: &Path, bytes: &[u8]) -> Result<(), CompileError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| CompileError::io(path, e))?;

    let tmp = NamedTempFile::new_in(parent).map_err(|e| CompileError::io(path, e))?;
    fs::write(tmp.path(), bytes).map_err(|e| CompileError::io(path, e))?;
    tmp.persist(path)
        .map_err(|e| CompileError::io(path, e.error))?;
    Ok(())
}
