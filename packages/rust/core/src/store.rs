//! In-memory, insertion-ordered contact collection.
//!
//! Every insert path validates the phone and rejects duplicates, so the store
//! never holds two contacts with the same [`DedupKey`].

use std::collections::HashSet;

use contactkit_shared::{Contact, ContactId, Field, Rejection};
use tracing::{debug, info};

use crate::dedup::{DedupKey, is_duplicate};
use crate::parser::{Delimiter, Diagnostic, parse_block};
use crate::phone;

/// What a batch insert stored and what it skipped.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Newly stored contacts, in input order.
    pub added: Vec<Contact>,
    /// One entry per skipped line, in input order.
    pub diagnostics: Vec<Diagnostic>,
}

impl BatchOutcome {
    /// Lines skipped because the contact already existed.
    pub fn duplicates(&self) -> usize {
        self.count(|r| matches!(r, Rejection::DuplicateContact { .. }))
    }

    /// Lines skipped because the phone was not ten digits.
    pub fn invalid(&self) -> usize {
        self.count(|r| matches!(r, Rejection::InvalidPhoneFormat { .. }))
    }

    /// Lines skipped because a field was missing.
    pub fn missing(&self) -> usize {
        self.count(|r| matches!(r, Rejection::MissingField(_)))
    }

    fn count(&self, pred: impl Fn(&Rejection) -> bool) -> usize {
        self.diagnostics.iter().filter(|d| pred(&d.reason)).count()
    }
}

/// Ordered owner of all contacts gathered in a session.
#[derive(Debug, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a single manually entered contact.
    pub fn add_one(&mut self, name: &str, phone: &str) -> Result<&Contact, Rejection> {
        let name = name.trim();
        let phone = phone.trim();

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

        let contact = Contact::new(name, phone::format(phone));
        if is_duplicate(&contact, &self.contacts) {
            return Err(Rejection::DuplicateContact {
                name: contact.name().to_string(),
                phone: contact.phone().to_string(),
            });
        }

        debug!(id = %contact.id(), name = contact.name(), "contact added");
        let idx = self.contacts.len();
        self.contacts.push(contact);
        Ok(&self.contacts[idx])
    }

    /// Parse `text` line by line and append every new, valid contact.
    ///
    /// Candidates are checked against the store and against earlier lines of
    /// the same batch, so a paste that repeats a contact stores it once.
    pub fn add_batch(&mut self, text: &str, delimiter: Delimiter) -> BatchOutcome {
        let parsed = parse_block(text, delimiter);
        let mut diagnostics = parsed.diagnostics;
        let mut seen: HashSet<DedupKey> = self.contacts.iter().map(DedupKey::of).collect();
        let mut added = Vec::new();

        for candidate in parsed.candidates {
            let contact = candidate.contact;
            if !seen.insert(DedupKey::of(&contact)) {
                debug!(line = candidate.line, name = contact.name(), "skipping duplicate");
                diagnostics.push(Diagnostic {
                    line: candidate.line,
                    reason: Rejection::DuplicateContact {
                        name: contact.name().to_string(),
                        phone: contact.phone().to_string(),
                    },
                });
                continue;
            }
            added.push(contact);
        }
        diagnostics.sort_by_key(|d| d.line);

        self.contacts.extend(added.iter().cloned());

        info!(
            ?delimiter,
            added = added.len(),
            skipped = diagnostics.len(),
            total = self.contacts.len(),
            "batch ingested"
        );

        BatchOutcome { added, diagnostics }
    }

    /// Ingest text returned by the image-understanding service.
    pub fn add_transcript(&mut self, text: &str) -> BatchOutcome {
        self.add_batch(text, Delimiter::Transcript)
    }

    /// Remove the contact with `id`. Unknown ids are ignored.
    pub fn remove_by_id(&mut self, id: ContactId) -> Option<Contact> {
        let idx = self.contacts.iter().position(|c| c.id() == id)?;
        Some(self.contacts.remove(idx))
    }

    /// Drop every contact.
    pub fn clear(&mut self) {
        debug!(count = self.contacts.len(), "clearing contacts");
        self.contacts.clear();
    }

    /// All contacts in insertion order.
    pub fn all(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id() == id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_one_formats_and_appends() {
        let mut store = ContactStore::new();
        let contact = store.add_one("Jane Doe", "(555) 123-4567").expect("add");
        assert_eq!(contact.phone(), "555-123-4567");

        store.add_one("John Roe", "5559876543").expect("add");
        let names: Vec<&str> = store.all().iter().map(Contact::name).collect();
        assert_eq!(names, ["Jane Doe", "John Roe"]);
    }

    #[test]
    fn add_one_rejects_invalid_phone() {
        let mut store = ContactStore::new();
        let err = store.add_one("Jane Doe", "555-1234").unwrap_err();
        assert!(matches!(err, Rejection::InvalidPhoneFormat { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn add_one_rejects_blank_fields() {
        let mut store = ContactStore::new();
        assert_eq!(
            store.add_one("   ", "5551234567").unwrap_err(),
            Rejection::MissingField(Field::Name)
        );
        assert_eq!(
            store.add_one("Jane", "").unwrap_err(),
            Rejection::MissingField(Field::Phone)
        );
    }

    #[test]
    fn add_one_rejects_duplicate_with_different_formatting() {
        let mut store = ContactStore::new();
        store.add_one("Jane Doe", "5551234567").expect("add");
        let err = store.add_one("JANE DOE", "(555) 123-4567").unwrap_err();
        assert!(matches!(err, Rejection::DuplicateContact { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_batch_collapses_in_batch_duplicates() {
        let mut store = ContactStore::new();
        let outcome = store.add_batch("A,5551234567\nA,555 123 4567", Delimiter::Spreadsheet);

        assert_eq!(outcome.added.len(), 1);
        assert_eq!(store.len(), 1);
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].line, 2);
        assert_eq!(outcome.duplicates(), 1);
    }

    #[test]
    fn add_batch_skips_contacts_already_stored() {
        let mut store = ContactStore::new();
        store.add_one("Jane Doe", "555-123-4567").expect("add");

        let outcome = store.add_transcript("jane doe, 5551234567\nJohn Roe, 555-987-6543");
        assert_eq!(outcome.added.len(), 1);
        assert_eq!(outcome.added[0].name(), "John Roe");
        assert_eq!(outcome.duplicates(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn add_batch_reports_every_skip_in_line_order() {
        let mut store = ContactStore::new();
        let text = "A,5551234567\nB\nC,555-123-456\nA,(555)123-4567\nD,5550001111";
        let outcome = store.add_batch(text, Delimiter::Spreadsheet);

        let names: Vec<&str> = outcome.added.iter().map(Contact::name).collect();
        assert_eq!(names, ["A", "D"]);

        let lines: Vec<usize> = outcome.diagnostics.iter().map(|d| d.line).collect();
        assert_eq!(lines, [2, 3, 4]);
        assert_eq!(outcome.missing(), 1);
        assert_eq!(outcome.invalid(), 1);
        assert_eq!(outcome.duplicates(), 1);
    }

    #[test]
    fn byte_order_mark_does_not_defeat_dedup() {
        let mut store = ContactStore::new();
        store.add_one("Alice Smith", "555-201-0001").expect("add");

        let outcome = store.add_batch("\u{feff}Alice Smith,555-201-0001", Delimiter::Spreadsheet);
        assert!(outcome.added.is_empty());
        assert_eq!(outcome.duplicates(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_batch_appends_after_existing() {
        let mut store = ContactStore::new();
        store.add_one("First", "5550000001").expect("add");
        store.add_batch("Second,5550000002\nThird,5550000003", Delimiter::Spreadsheet);

        let names: Vec<&str> = store.all().iter().map(Contact::name).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[test]
    fn remove_by_id_removes_only_match() {
        let mut store = ContactStore::new();
        let keep = store.add_one("Keep", "5550000001").expect("add").id();
        let drop = store.add_one("Drop", "5550000002").expect("add").id();

        let removed = store.remove_by_id(drop).expect("removed");
        assert_eq!(removed.name(), "Drop");
        assert_eq!(store.len(), 1);
        assert!(store.get(keep).is_some());
        assert!(store.get(drop).is_none());
    }

    #[test]
    fn remove_by_unknown_id_is_noop() {
        let mut store = ContactStore::new();
        store.add_one("Jane", "5551234567").expect("add");
        let before = store.all().to_vec();

        assert!(store.remove_by_id(ContactId::new()).is_none());
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn removed_contact_can_be_added_again() {
        let mut store = ContactStore::new();
        let id = store.add_one("Jane", "5551234567").expect("add").id();
        store.remove_by_id(id);
        assert!(store.add_one("Jane", "5551234567").is_ok());
    }

    #[test]
    fn clear_empties_store() {
        let mut store = ContactStore::new();
        store.add_batch("A,5550000001\nB,5550000002", Delimiter::Spreadsheet);
        assert_eq!(store.len(), 2);

        store.clear();
        assert!(store.is_empty());
        assert!(store.all().is_empty());
    }

    #[test]
    fn spreadsheet_fixture_ingests() {
        let fixture = std::fs::read_to_string("../../../fixtures/text/spreadsheet.fixture.txt")
            .expect("read fixture");
        let mut store = ContactStore::new();
        let outcome = store.add_batch(&fixture, Delimiter::Spreadsheet);

        assert_eq!(outcome.added.len(), 3);
        assert_eq!(outcome.duplicates(), 1);
        assert_eq!(outcome.invalid(), 1);
        assert_eq!(outcome.missing(), 1);
    }

    #[test]
    fn transcript_fixture_ingests() {
        let fixture = std::fs::read_to_string("../../../fixtures/text/transcript.fixture.txt")
            .expect("read fixture");
        let mut store = ContactStore::new();
        let outcome = store.add_transcript(&fixture);

        assert_eq!(outcome.added.len(), 2);
        assert_eq!(outcome.missing(), 1);
        assert_eq!(store.all()[0].phone(), "555-201-3344");
    }
}
