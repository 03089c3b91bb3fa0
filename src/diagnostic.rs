use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    DuplicateKey,
    FuzzySkipped,
    EmptyTranslation,
    MissingHeader,
    PluralMismatch,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::DuplicateKey => write!(f, "duplicate-key"),
            Rule::FuzzySkipped => write!(f, "fuzzy-skipped"),
            Rule::EmptyTranslation => write!(f, "empty-translation"),
            Rule::MissingHeader => write!(f, "missing-header"),
            Rule::PluralMismatch => write!(f, "plural-mismatch"),
        }
    }
}

/// A non-fatal finding from building or checking a catalog.
///
/// Diagnostics never abort compilation on their own; the duplicate-key
/// policy in the config decides whether `duplicate-key` is promoted to
/// an error at the command layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file_path: Option<String>,
    pub line: Option<usize>,
    pub message: String,
    pub severity: Severity,
    pub rule: Rule,
}

impl Diagnostic {
    pub fn duplicate_key(key: &str, first_line: usize, line: usize) -> Self {
        Self {
            file_path: None,
            line: Some(line),
            message: format!(
                "duplicate msgid \"{}\" (first defined at line {}); last definition wins",
                display_key(key),
                first_line
            ),
            severity: Severity::Warning,
            rule: Rule::DuplicateKey,
        }
    }

    pub fn fuzzy_skipped(msgid: &str, line: usize) -> Self {
        Self {
            file_path: None,
            line: Some(line),
            message: format!(
                "fuzzy entry \"{}\" skipped (pass --include-fuzzy to keep it)",
                truncate(msgid, 40)
            ),
            severity: Severity::Warning,
            rule: Rule::FuzzySkipped,
        }
    }

    pub fn empty_translation(msgid: &str, line: usize) -> Self {
        Self {
            file_path: None,
            line: Some(line),
            message: format!("empty msgstr for \"{}\"", truncate(msgid, 40)),
            severity: Severity::Warning,
            rule: Rule::EmptyTranslation,
        }
    }

    pub fn missing_header() -> Self {
        Self {
            file_path: None,
            line: None,
            message: "source has no header entry; a minimal one was synthesized".to_string(),
            severity: Severity::Warning,
            rule: Rule::MissingHeader,
        }
    }

    pub fn plural_mismatch(msgid: &str, line: usize, expected: usize, found: usize) -> Self {
        Self {
            file_path: None,
            line: Some(line),
            message: format!(
                "\"{}\" has {} plural forms, header Plural-Forms declares {}",
                truncate(msgid, 40),
                found,
                expected
            ),
            severity: Severity::Warning,
            rule: Rule::PluralMismatch,
        }
    }

    /// Attach the source file path once it is known (the catalog builder
    /// works on in-memory text and does not see paths).
    pub fn with_file(mut self, path: &str) -> Self {
        self.file_path = Some(path.to_string());
        self
    }
}

/// Render control separators in catalog keys readably.
fn display_key(key: &str) -> String {
    key.replace('\u{4}', "|").replace('\u{0}', "/")
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        format!("{}...", s.chars().take(max_len).collect::<String>())
    }
}
