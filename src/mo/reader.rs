//! Parses MO bytes back into a catalog, for inspection and testing.

use crate::catalog::Catalog;
use crate::error::CompileError;
use crate::mo::{HEADER_SIZE, MO_MAGIC};

/// Byte order of a catalog file, decided by how the magic reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ByteOrder {
    Little,
    Big,
}

/// Parse a compiled catalog.
///
/// Accepts both byte orders (the magic disambiguates) and rejects
/// truncated input, out-of-bounds descriptors, and non-UTF-8 strings.
/// Errors reuse [`CompileError::Parse`] with the byte offset in place of
/// a line number.
pub fn read(bytes: &[u8]) -> Result<Catalog, CompileError> {
    let order = match read_u32(bytes, 0, ByteOrder::Little)? {
        m if m == MO_MAGIC => ByteOrder::Little,
        m if m == MO_MAGIC.swap_bytes() => ByteOrder::Big,
        m => {
            return Err(CompileError::parse(
                0,
                format!("not a catalog file (bad magic 0x{:08x})", m),
            ));
        }
    };

    let revision = read_u32(bytes, 4, order)?;
    if revision >> 16 != 0 {
        return Err(CompileError::parse(
            4,
            format!("unsupported catalog format revision {}", revision),
        ));
    }

    let count = read_u32(bytes, 8, order)? as usize;
    let orig_table = read_u32(bytes, 12, order)? as usize;
    let trans_table = read_u32(bytes, 16, order)? as usize;

    // The header and both descriptor tables (8 bytes per descriptor,
    // two tables) must fit in the file; checked before allocating so a
    // hostile count cannot trigger a huge reservation.
    let fits = count
        .checked_mul(16)
        .and_then(|n| n.checked_add(HEADER_SIZE as usize))
        .is_some_and(|n| n <= bytes.len());
    if !fits {
        return Err(CompileError::parse(8, "entry count exceeds file size"));
    }

    let mut entries = Vec::with_capacity(count);
    for i in 0..count {
        let key = read_string(bytes, orig_table + i * 8, order)?;
        let value = read_string(bytes, trans_table + i * 8, order)?;
        entries.push((key, value));
    }

    // The writer guarantees sorted unique keys; foreign files might not.
    for pair in entries.windows(2) {
        if pair[0].0 >= pair[1].0 {
            return Err(CompileError::parse(
                orig_table,
                "catalog entries are not sorted by key",
            ));
        }
    }

    Ok(Catalog::from_sorted_entries(entries))
}

fn read_u32(bytes: &[u8], offset: usize, order: ByteOrder) -> Result<u32, CompileError> {
    let end = offset
        .checked_add(4)
        .filter(|&end| end <= bytes.len())
        .ok_or_else(|| CompileError::parse(offset, "catalog file is truncated"))?;
    let raw: [u8; 4] = bytes[offset..end]
        .try_into()
        .map_err(|_| CompileError::parse(offset, "catalog file is truncated"))?;
    Ok(match order {
        ByteOrder::Little => u32::from_le_bytes(raw),
        ByteOrder::Big => u32::from_be_bytes(raw),
    })
}

/// Read one `(length, offset)` descriptor and the string it points at.
fn read_string(bytes: &[u8], descriptor: usize, order: ByteOrder) -> Result<String, CompileError> {
    let length = read_u32(bytes, descriptor, order)? as usize;
    let offset = read_u32(bytes, descriptor + 4, order)? as usize;
    let end = offset
        .checked_add(length)
        .filter(|&end| end < bytes.len())
        .ok_or_else(|| {
            CompileError::parse(descriptor, "string descriptor points outside the file")
        })?;
    if bytes[end] != 0 {
        return Err(CompileError::parse(end, "string is not NUL-terminated"));
    }
    String::from_utf8(bytes[offset..end].to_vec())
        .map_err(|_| CompileError::parse(offset, "string is not valid UTF-8"))
}
