//! Delimited contact line parser.
//!
//! Each input line holds one contact as `name<delimiter>phone`:
//! - Spreadsheet paste: `Jane Doe,555-123-4567` (first `,` splits)
//! - Screenshot transcript: `Jane Doe, 555-123-4567` (first `, ` splits)
//!
//! Bad lines never abort a block; they become [`Diagnostic`]s.

use contactkit_shared::{Contact, Field, Rejection};

use crate::phone;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Field separator, chosen by the source of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Comma only, as produced by spreadsheet copy/paste.
    Spreadsheet,
    /// Comma followed by a space, as returned by the image transcript.
    Transcript,
}

impl Delimiter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spreadsheet => ",",
            Self::Transcript => ", ",
        }
    }
}

/// A skipped line and the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number within the parsed block.
    pub line: usize,
    pub reason: Rejection,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

/// A contact parsed from a given line, not yet checked for duplicates.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub line: usize,
    pub contact: Contact,
}

/// Result of parsing a multi-line block.
#[derive(Debug, Clone, Default)]
pub struct ParsedBlock {
    pub candidates: Vec<Candidate>,
    pub diagnostics: Vec<Diagnostic>,
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Parse one line into a candidate contact.
pub fn parse_line(line: &str, delimiter: Delimiter) -> Result<Contact, Rejection> {
    let (name, phone) = match line.split_once(delimiter.as_str()) {
        Some((name, phone)) => (name.trim(), phone.trim()),
        None => (line.trim(), ""),
    };

    if name.is_empty() {
        return Err(Rejection::MissingField(Field::Name));
    }
    if phone.is_empty() {
        return Err(Rejection::MissingField(Field::Phone));
    }

    if !phone::is_valid_phone(phone) {
        return Err(Rejection::InvalidPhoneFormat {
            name: name.to_string(),
            phone: phone.to_string(),
        });
    }

    Ok(Contact::new(name, phone::format(phone)))
}

/// Parse every line of `text`, collecting candidates and diagnostics.
///
/// Whitespace-only lines are skipped without a diagnostic, so they are not
/// counted as missing fields. A leading byte-order mark (common in CSV
/// exports) is dropped before the first line is split.
pub fn parse_block(text: &str, delimiter: Delimiter) -> ParsedBlock {
    let mut block = ParsedBlock::default();
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    for (idx, line) in text.split('\n').enumerate() {
        let line_no = idx + 1;

        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line, delimiter) {
            Ok(contact) => block.candidates.push(Candidate {
                line: line_no,
                contact,
            }),
            Err(reason) => {
                tracing::debug!(line = line_no, %reason, "skipping contact line");
                block.diagnostics.push(Diagnostic {
                    line: line_no,
                    reason,
                });
            }
        }
    }

    block
}
