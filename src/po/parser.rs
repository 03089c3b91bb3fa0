//! Line-oriented parser for gettext PO translation sources.
//!
//! The grammar is small: an entry is a run of comment lines followed by
//! `msgctxt`/`msgid`/`msgid_plural`/`msgstr` fields, each holding one or
//! more quoted strings, separated from the next entry by a blank line.
//! Obsolete entries are prefixed with `#~` on every line. The parser is a
//! single pass with one entry of lookbehind state and reports the first
//! syntax error it hits with its 1-based line number.

use crate::error::CompileError;
use crate::po::entry::PoEntry;

/// Which field a continuation line (`"..."`) appends to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Msgctxt,
    Msgid,
    MsgidPlural,
    Msgstr(usize),
}

/// Accumulator for the entry currently being parsed.
#[derive(Debug, Default)]
struct EntryBuilder {
    line: usize,
    msgctxt: Option<String>,
    msgid: Option<String>,
    msgid_plural: Option<String>,
    msgstr: Vec<String>,
    saw_plain_msgstr: bool,
    saw_indexed_msgstr: bool,
    fuzzy: bool,
    obsolete: bool,
    current: Option<Field>,
}

impl EntryBuilder {
    // A builder holding only comments or flags carries nothing to emit.
    fn is_empty(&self) -> bool {
        self.msgctxt.is_none() && self.msgid.is_none() && self.msgstr.is_empty()
    }

    fn has_msgstr(&self) -> bool {
        self.saw_plain_msgstr || self.saw_indexed_msgstr
    }

    fn set_msgstr(&mut self, index: usize, value: String) {
        if self.msgstr.len() <= index {
            self.msgstr.resize(index + 1, String::new());
        }
        self.msgstr[index] = value;
    }

    fn append(&mut self, text: &str, line: usize) -> Result<(), CompileError> {
        let target = match self.current {
            Some(Field::Msgctxt) => self.msgctxt.as_mut(),
            Some(Field::Msgid) => self.msgid.as_mut(),
            Some(Field::MsgidPlural) => self.msgid_plural.as_mut(),
            Some(Field::Msgstr(i)) => self.msgstr.get_mut(i),
            None => None,
        };
        match target {
            Some(s) => {
                s.push_str(text);
                Ok(())
            }
            None => Err(CompileError::parse(
                line,
                "continuation string with no preceding msgid or msgstr",
            )),
        }
    }

    fn finish(self, end_line: usize) -> Result<PoEntry, CompileError> {
        // Validate before taking the builder apart.
        if self.msgid.is_none() {
            return Err(CompileError::parse(
                end_line.min(self.line),
                "entry has no msgid",
            ));
        }
        if !self.has_msgstr() {
            return Err(CompileError::parse(self.line, "entry has no msgstr"));
        }
        if self.msgid_plural.is_some() && self.saw_plain_msgstr {
            return Err(CompileError::parse(
                self.line,
                "plural entry must use indexed msgstr[N]",
            ));
        }
        if self.msgid_plural.is_none() && self.saw_indexed_msgstr {
            return Err(CompileError::parse(
                self.line,
                "indexed msgstr[N] without msgid_plural",
            ));
        }
        Ok(PoEntry {
            line: self.line,
            msgctxt: self.msgctxt,
            msgid: self.msgid.unwrap_or_default(),
            msgid_plural: self.msgid_plural,
            msgstr: self.msgstr,
            fuzzy: self.fuzzy,
            obsolete: self.obsolete,
        })
    }
}

/// Parse a complete PO document into its entries, in source order.
///
/// Returns the first syntax error encountered; a successful parse never
/// loses an entry, including fuzzy and obsolete ones (filtering is the
/// catalog builder's job).
pub fn parse(source: &str) -> Result<Vec<PoEntry>, CompileError> {
    let mut entries = Vec::new();
    let mut builder: Option<EntryBuilder> = None;
    let mut last_line = 0;

    for (idx, raw) in source.lines().enumerate() {
        let line_no = idx + 1;
        last_line = line_no;
        let line = raw.trim();

        if line.is_empty() {
            if let Some(b) = builder.take() {
                // Comment-only blocks (file header comments) are not entries.
                if !b.is_empty() {
                    entries.push(b.finish(line_no)?);
                }
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix("#~") {
            let rest = rest.trim();
            if rest.is_empty() {
                continue;
            }
            let b = builder.get_or_insert_with(|| EntryBuilder {
                line: line_no,
                ..EntryBuilder::default()
            });
            parse_field_line(b, rest, line_no, &mut entries, true)?;
            continue;
        }

        if let Some(rest) = line.strip_prefix('#') {
            // Comments belong to the entry that follows, so a completed
            // entry (one that already has its translation) ends here
            // even without a blank separator line.
            if builder.as_ref().is_some_and(EntryBuilder::has_msgstr) {
                if let Some(b) = builder.take() {
                    entries.push(b.finish(line_no)?);
                }
            }
            // Flag comments matter (fuzzy); other comment kinds
            // (translator `#`, extracted `#.`, reference `#:`,
            // previous `#|`) are carried over verbatim by editors but
            // have no effect on the compiled catalog.
            if let Some(flags) = rest.strip_prefix(',') {
                let b = builder.get_or_insert_with(|| EntryBuilder {
                    line: line_no,
                    ..EntryBuilder::default()
                });
                if flags.split(',').any(|f| f.trim() == "fuzzy") {
                    b.fuzzy = true;
                }
            } else if builder.is_none() {
                // Leading comments still anchor the entry's line number.
                builder = Some(EntryBuilder {
                    line: line_no,
                    ..EntryBuilder::default()
                });
            }
            continue;
        }

        let b = builder.get_or_insert_with(|| EntryBuilder {
            line: line_no,
            ..EntryBuilder::default()
        });
        parse_field_line(b, line, line_no, &mut entries, false)?;
    }

    if let Some(b) = builder.take() {
        if !b.is_empty() {
            entries.push(b.finish(last_line)?);
        }
    }

    Ok(entries)
}

/// Parse one non-comment, non-blank line into the builder.
///
/// A `msgctxt` or `msgid` keyword appearing after the current entry
/// already has a translation closes that entry and starts a new one, so
/// sources without blank separator lines still parse. `obsolete` marks
/// lines that came in behind a `#~` prefix; it applies to whichever
/// entry the line ends up in, never to the one being closed.
fn parse_field_line(
    builder: &mut EntryBuilder,
    line: &str,
    line_no: usize,
    entries: &mut Vec<PoEntry>,
    obsolete: bool,
) -> Result<(), CompileError> {
    if builder.has_msgstr()
        && (keyword(line, "msgctxt").is_some() || keyword(line, "msgid").is_some())
    {
        flush(builder, line_no, entries)?;
    }
    builder.obsolete |= obsolete;

    if let Some(rest) = keyword(line, "msgctxt") {
        if builder.msgctxt.is_some() || builder.msgid.is_some() {
            return Err(CompileError::parse(line_no, "unexpected msgctxt"));
        }
        builder.msgctxt = Some(parse_string(rest, line_no)?);
        builder.current = Some(Field::Msgctxt);
    } else if let Some(rest) = keyword(line, "msgid_plural") {
        if builder.msgid.is_none() {
            return Err(CompileError::parse(line_no, "msgid_plural without msgid"));
        }
        if builder.msgid_plural.is_some() {
            return Err(CompileError::parse(line_no, "duplicate msgid_plural"));
        }
        builder.msgid_plural = Some(parse_string(rest, line_no)?);
        builder.current = Some(Field::MsgidPlural);
    } else if let Some(rest) = keyword(line, "msgid") {
        if builder.msgid.is_some() {
            return Err(CompileError::parse(line_no, "duplicate msgid"));
        }
        builder.msgid = Some(parse_string(rest, line_no)?);
        builder.current = Some(Field::Msgid);
    } else if let Some(rest) = line.strip_prefix("msgstr[") {
        let Some((index_str, rest)) = rest.split_once(']') else {
            return Err(CompileError::parse(line_no, "unterminated msgstr index"));
        };
        let index: usize = index_str.trim().parse().map_err(|_| {
            CompileError::parse(line_no, format!("invalid msgstr index '{}'", index_str))
        })?;
        if builder.msgid.is_none() {
            return Err(CompileError::parse(line_no, "msgstr without msgid"));
        }
        builder.set_msgstr(index, parse_string(rest, line_no)?);
        builder.saw_indexed_msgstr = true;
        builder.current = Some(Field::Msgstr(index));
    } else if let Some(rest) = keyword(line, "msgstr") {
        if builder.msgid.is_none() {
            return Err(CompileError::parse(line_no, "msgstr without msgid"));
        }
        if builder.saw_plain_msgstr {
            return Err(CompileError::parse(line_no, "duplicate msgstr"));
        }
        builder.set_msgstr(0, parse_string(rest, line_no)?);
        builder.saw_plain_msgstr = true;
        builder.current = Some(Field::Msgstr(0));
    } else if line.starts_with('"') {
        let text = parse_string(line, line_no)?;
        builder.append(&text, line_no)?;
    } else {
        let word: String = line.chars().take_while(|c| !c.is_whitespace()).collect();
        return Err(CompileError::parse(
            line_no,
            format!("unrecognized keyword '{}'", word),
        ));
    }
    Ok(())
}

/// Close the builder's current entry and reset it for the next one.
/// The reset clears every marker, including `obsolete`; the caller
/// re-applies markers from the current line only.
fn flush(
    builder: &mut EntryBuilder,
    line_no: usize,
    entries: &mut Vec<PoEntry>,
) -> Result<(), CompileError> {
    let done = std::mem::take(builder);
    entries.push(done.finish(line_no)?);
    builder.line = line_no;
    Ok(())
}

/// Match `keyword` followed by whitespace or a quote, returning the rest.
fn keyword<'a>(line: &'a str, kw: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(kw)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) || rest.starts_with('"') {
        Some(rest)
    } else {
        None
    }
}

/// Parse a quoted PO string with C-style escapes.
///
/// Rejects unterminated strings, trailing text after the closing quote,
/// and unknown escape sequences.
fn parse_string(raw: &str, line_no: usize) -> Result<String, CompileError> {
    let raw = raw.trim();
    let Some(body) = raw.strip_prefix('"') else {
        return Err(CompileError::parse(line_no, "expected quoted string"));
    };

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    loop {
        match chars.next() {
            None => {
                return Err(CompileError::parse(line_no, "unterminated quoted string"));
            }
            Some('"') => break,
            Some('\\') => match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some('"') => out.push('"'),
                Some('\\') => out.push('\\'),
                Some('0') => out.push('\u{0}'),
                Some(other) => {
                    return Err(CompileError::parse(
                        line_no,
                        format!("invalid escape sequence '\\{}'", other),
                    ));
                }
                None => {
                    return Err(CompileError::parse(line_no, "unterminated quoted string"));
                }
            },
            Some(c) => out.push(c),
        }
    }

    if !chars.as_str().trim().is_empty() {
        return Err(CompileError::parse(
            line_no,
            "unexpected text after closing quote",
        ));
    }
    Ok(out)
}
