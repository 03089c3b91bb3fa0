//! Parsed representation of a single PO entry.

/// One entry of a translation source file.
///
/// An entry maps an original string (`msgid`, optionally qualified by a
/// `msgctxt` context) to its translation(s). Plural entries carry a
/// `msgid_plural` and an indexed list of translated forms; singular
/// entries have exactly one form in `msgstr`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoEntry {
    /// 1-based line where the entry starts (first comment or field line).
    pub line: usize,
    /// Context qualifier from `msgctxt`, if any.
    pub msgctxt: Option<String>,
    /// The original string.
    pub msgid: String,
    /// Plural form of the original string, if the entry is plural.
    pub msgid_plural: Option<String>,
    /// Translated forms. One element for singular entries, one per
    /// `msgstr[N]` index for plural entries (index order).
    pub msgstr: Vec<String>,
    /// Entry carries the `fuzzy` flag (`#, fuzzy`).
    pub fuzzy: bool,
    /// Entry is commented out with `#~`.
    pub obsolete: bool,
}

impl PoEntry {
    /// True for the reserved header entry (empty `msgid`, no context).
    pub fn is_header(&self) -> bool {
        self.msgid.is_empty() && self.msgctxt.is_none()
    }

    /// True if the entry declares a plural form.
    pub fn is_plural(&self) -> bool {
        self.msgid_plural.is_some()
    }

    /// True if every translated form is empty.
    pub fn is_untranslated(&self) -> bool {
        self.msgstr.iter().all(|s| s.is_empty())
    }

    /// The catalog key for this entry.
    ///
    /// Context entries join context and msgid with EOT (`\x04`); plural
    /// entries join msgid and msgid_plural with NUL. Both separators come
    /// from the GNU gettext runtime's lookup convention, so the compiled
    /// catalog stays compatible with stock `gettext()`/`ngettext()`.
    pub fn catalog_key(&self) -> String {
        let id = match &self.msgid_plural {
            Some(plural) => format!("{}\u{0}{}", self.msgid, plural),
            None => self.msgid.clone(),
        };
        match &self.msgctxt {
            Some(ctx) => format!("{}\u{4}{}", ctx, id),
            None => id,
        }
    }

    /// The catalog value: the single translation, or the NUL-joined
    /// plural forms.
    pub fn catalog_value(&self) -> String {
        self.msgstr.join("\u{0}")
    }
}
