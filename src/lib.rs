//! Pomo - gettext catalog compiler
//!
//! Pomo is a CLI tool and library for compiling gettext translation
//! sources (`.po`) into the binary catalog format (`.mo`) consumed by
//! localization runtimes. It parses PO syntax itself and treats the MO
//! layout as a documented wire contract rather than delegating to
//! platform library internals.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `po`: Translation-source parser
//! - `catalog`: The sorted, deduplicated key/value build step
//! - `mo`: Binary catalog serialization and inspection
//! - `compile`: The parse-build-serialize pipeline and atomic output
//! - `session`: An owned open/edit/save/compile session over one source
//! - `diagnostic`: Non-fatal findings and their severities
//! - `error`: The typed compile error (parse vs I/O)

pub mod catalog;
pub mod cli;
pub mod compile;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod mo;
pub mod po;
pub mod session;
