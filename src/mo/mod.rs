//! The binary catalog (`.mo`) format.
//!
//! The layout is the GNU gettext revision-0 format, treated here as a
//! public wire contract rather than something delegated to a library:
//!
//! ```text
//! offset  size  field
//!      0     4  magic (0x950412de, little-endian in files we write)
//!      4     4  format revision (0)
//!      8     4  N, number of strings
//!     12     4  O, offset of the original-string descriptor table
//!     16     4  T, offset of the translated-string descriptor table
//!     20     4  S, size of the hash table (0, we emit none)
//!     24     4  H, offset of the hash table (0)
//!      O   8*N  original descriptors: (length u32, offset u32)
//!      T   8*N  translated descriptors: (length u32, offset u32)
//!              string blob, each string NUL-terminated; the descriptor
//!              length excludes the terminating NUL
//! ```
//!
//! Descriptors are in ascending key order, so the runtime can binary
//! search originals. The empty hash table is explicitly allowed by the
//! format; every conforming reader falls back to the search path.

mod reader;
mod writer;

pub use reader::read;
pub use writer::write;

/// Magic number as stored in a little-endian catalog.
pub const MO_MAGIC: u32 = 0x9504_12de;

/// Size of the fixed header: seven u32 fields.
pub const HEADER_SIZE: u32 = 28;
