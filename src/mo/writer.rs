//! Serializes a built catalog into MO bytes.

use crate::catalog::Catalog;
use crate::mo::{HEADER_SIZE, MO_MAGIC};

/// Serialize a catalog to the revision-0 little-endian MO layout.
///
/// Pure function of the catalog contents: the same catalog always
/// produces byte-identical output. The catalog is already sorted and
/// deduplicated, so the descriptor tables come out in ascending key
/// order as the format requires.
pub fn write(catalog: &Catalog) -> Vec<u8> {
    let entries = catalog.entries();
    let count = entries.len() as u32;

    let orig_table_offset = HEADER_SIZE;
    let trans_table_offset = orig_table_offset + count * 8;
    let blob_offset = trans_table_offset + count * 8;

    // Lay out the blob first so descriptor offsets are known. Each
    // original is immediately followed by its translation.
    let mut blob: Vec<u8> = Vec::new();
    let mut orig_descriptors: Vec<(u32, u32)> = Vec::with_capacity(entries.len());
    let mut trans_descriptors: Vec<(u32, u32)> = Vec::with_capacity(entries.len());

    for (key, value) in entries {
        orig_descriptors.push(append_string(&mut blob, blob_offset, key));
        trans_descriptors.push(append_string(&mut blob, blob_offset, value));
    }

    let mut out = Vec::with_capacity(blob_offset as usize + blob.len());
    for field in [
        MO_MAGIC,
        0, // format revision
        count,
        orig_table_offset,
        trans_table_offset,
        0, // hash table size
        0, // hash table offset
    ] {
        out.extend_from_slice(&field.to_le_bytes());
    }
    for (length, offset) in orig_descriptors.iter().chain(&trans_descriptors) {
        out.extend_from_slice(&length.to_le_bytes());
        out.extend_from_slice(&offset.to_le_bytes());
    }
    out.extend_from_slice(&blob);
    out
}

/// Append a NUL-terminated string to the blob, returning its
/// `(length, absolute offset)` descriptor. Length excludes the NUL.
fn append_string(blob: &mut Vec<u8>, blob_offset: u32, s: &str) -> (u32, u32) {
    let offset = blob_offset + blob.len() as u32;
    blob.extend_from_slice(s.as_bytes());
    blob.push(0);
    (s.len() as u32, offset)
}
