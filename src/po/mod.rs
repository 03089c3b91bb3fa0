//! Translation-source (`.po`) parsing.

mod entry;
mod parser;

pub use entry::PoEntry;
pub use parser::parse;
