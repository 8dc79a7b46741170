//! vCard 3.0 export.
//!
//! Each contact renders to a fixed five-line block:
//!
//! ```text
//! BEGIN:VCARD
//! VERSION:3.0
//! FN:<name>
//! TEL;TYPE=CELL:<phone>
//! END:VCARD
//! ```
//!
//! Lines are joined with `\n` and values are written verbatim (no folding or
//! escaping), matching what phone address books import from this tool.

use contactkit_shared::{Contact, ExportMode};

/// Suggested file name for the combined artifact.
pub const COMBINED_FILE_NAME: &str = "contacts.vcf";

/// A rendered artifact ready for an external writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFile {
    pub file_name: String,
    pub content: String,
}

/// Output of [`export`], shaped by the requested mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Export {
    /// Every card in one text blob (empty when there are no contacts).
    Combined(String),
    /// One artifact per contact, in store order.
    PerContact(Vec<CardFile>),
}

impl Export {
    /// Flatten into files. An empty combined export produces no file.
    pub fn into_files(self) -> Vec<CardFile> {
        match self {
            Self::Combined(content) if content.is_empty() => Vec::new(),
            Self::Combined(content) => vec![CardFile {
                file_name: COMBINED_FILE_NAME.to_string(),
                content,
            }],
            Self::PerContact(files) => files,
        }
    }
}

/// Render contacts in the given mode.
pub fn export(contacts: &[Contact], mode: ExportMode) -> Export {
    match mode {
        ExportMode::Combined => Export::Combined(serialize(contacts)),
        ExportMode::PerContact => Export::PerContact(serialize_each(contacts)),
    }
}

/// Render one contact's block, without a trailing newline.
pub fn serialize_single(contact: &Contact) -> String {
    let mut output = String::new();
    write_card(contact, &mut output);
    output
}

/// Concatenate every block, each followed by a newline.
pub fn serialize(contacts: &[Contact]) -> String {
    let mut output = String::new();
    for contact in contacts {
        write_card(contact, &mut output);
        output.push('\n');
    }
    output
}

/// One `(file name, block)` pair per contact.
pub fn serialize_each(contacts: &[Contact]) -> Vec<CardFile> {
    contacts
        .iter()
        .map(|contact| CardFile {
            file_name: card_file_name(contact.name()),
            content: serialize_single(contact),
        })
        .collect()
}

/// `<name>.vcf`, with characters that would break out of a single path
/// component replaced by `_`.
pub fn card_file_name(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let stem = match stem.trim() {
        "" | "." | ".." => "contact",
        s => s,
    };
    format!("{stem}.vcf")
}

fn write_card(contact: &Contact, output: &mut String) {
    output.push_str("BEGIN:VCARD\n");
    output.push_str("VERSION:3.0\n");

    output.push_str("FN:");
    output.push_str(contact.name());
    output.push('\n');

    output.push_str("TEL;TYPE=CELL:");
    output.push_str(contact.phone());
    output.push('\n');

    output.push_str("END:VCARD");
}
