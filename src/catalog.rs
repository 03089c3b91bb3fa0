//! Builds the key/value catalog from parsed PO entries.
//!
//! The build step is the explicit, immutable middle of the pipeline:
//! entries go in, a sorted list of `(key, translation)` pairs comes out,
//! and the MO writer never sees anything unsorted or mutable. Keys sort
//! in byte-lexicographic order, which puts the empty metadata key first.

use std::collections::{BTreeMap, HashMap};

use crate::diagnostic::Diagnostic;
use crate::po::PoEntry;

/// Header used when the source has none. A catalog without the empty-key
/// metadata entry would break runtime charset detection.
const DEFAULT_HEADER: &str = "Content-Type: text/plain; charset=UTF-8\n";

#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Keep entries flagged `fuzzy` instead of dropping them.
    pub include_fuzzy: bool,
    /// Emit advisory diagnostics (empty translations, plural-form count
    /// mismatches) in addition to the ones that always fire.
    pub lint: bool,
}

/// A compiled catalog: unique keys, sorted ascending, metadata entry
/// (empty key) always present and therefore always first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(String, String)>,
}

impl Catalog {
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The metadata header string (value of the empty key).
    pub fn header(&self) -> Option<&str> {
        match self.entries.first() {
            Some((key, value)) if key.is_empty() => Some(value),
            _ => None,
        }
    }

    /// Rebuild a catalog from already-sorted unique pairs (used by the
    /// MO reader; the builder is the normal entry point).
    pub(crate) fn from_sorted_entries(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }
}

/// Build a catalog from parsed entries.
///
/// Obsolete entries are dropped. Fuzzy entries are dropped unless
/// requested. Untranslated entries are dropped. Duplicate keys keep the
/// last definition and emit a warning. The metadata entry is synthesized
/// from the header entry's translation, or from [`DEFAULT_HEADER`] when
/// the source has no header.
pub fn build(entries: &[PoEntry], options: BuildOptions) -> (Catalog, Vec<Diagnostic>) {
    let mut map: BTreeMap<String, String> = BTreeMap::new();
    let mut first_seen: HashMap<String, usize> = HashMap::new();
    let mut diagnostics = Vec::new();
    let mut header: Option<String> = None;

    for entry in entries {
        if entry.obsolete {
            continue;
        }
        if entry.fuzzy && !options.include_fuzzy {
            if options.lint {
                diagnostics.push(Diagnostic::fuzzy_skipped(&entry.msgid, entry.line));
            }
            continue;
        }

        if entry.is_header() {
            if header.is_some() {
                diagnostics.push(Diagnostic::duplicate_key(
                    "",
                    first_seen.get("").copied().unwrap_or(entry.line),
                    entry.line,
                ));
            } else {
                first_seen.insert(String::new(), entry.line);
            }
            header = Some(normalize_header(&entry.catalog_value()));
            continue;
        }

        if entry.is_untranslated() {
            if options.lint {
                diagnostics.push(Diagnostic::empty_translation(&entry.msgid, entry.line));
            }
            continue;
        }

        let key = entry.catalog_key();
        match first_seen.get(&key) {
            Some(&first_line) => {
                diagnostics.push(Diagnostic::duplicate_key(&key, first_line, entry.line));
            }
            None => {
                first_seen.insert(key.clone(), entry.line);
            }
        }
        map.insert(key, entry.catalog_value());
    }

    let header = match header {
        Some(h) => h,
        None => {
            diagnostics.push(Diagnostic::missing_header());
            DEFAULT_HEADER.to_string()
        }
    };

    if options.lint {
        if let Some(expected) = header_nplurals(&header) {
            for entry in entries {
                if entry.is_plural()
                    && !entry.obsolete
                    && !entry.is_untranslated()
                    && entry.msgstr.len() != expected
                {
                    diagnostics.push(Diagnostic::plural_mismatch(
                        &entry.msgid,
                        entry.line,
                        expected,
                        entry.msgstr.len(),
                    ));
                }
            }
        }
    }

    map.insert(String::new(), header);

    let catalog = Catalog {
        entries: map.into_iter().collect(),
    };
    (catalog, diagnostics)
}

/// Keep header fields as-is but guarantee a trailing newline, so the
/// metadata entry always ends on a field boundary.
fn normalize_header(raw: &str) -> String {
    if raw.is_empty() || raw.ends_with('\n') {
        raw.to_string()
    } else {
        format!("{}\n", raw)
    }
}

/// Extract `nplurals=N` from the header's `Plural-Forms:` field.
fn header_nplurals(header: &str) -> Option<usize> {
    let line = header
        .lines()
        .find(|l| l.trim_start().starts_with("Plural-Forms:"))?;
    let rest = line.split_once("nplurals=")?.1;
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}
