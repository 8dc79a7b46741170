//! Duplicate detection.
//!
//! Two contacts are the same when their names match case-insensitively and
//! their phones carry the same digits, whatever the punctuation.

use contactkit_shared::Contact;

use crate::phone::strip_non_digits;

/// Equivalence key for a contact: `(lowercase(name), digits(phone))`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    name: String,
    digits: String,
}

impl DedupKey {
    pub fn new(name: &str, phone: &str) -> Self {
        Self {
            name: name.to_lowercase(),
            digits: strip_non_digits(phone),
        }
    }

    pub fn of(contact: &Contact) -> Self {
        Self::new(contact.name(), contact.phone())
    }
}

/// `true` iff some record in `existing` shares the candidate's key.
pub fn is_duplicate<'a>(
    candidate: &Contact,
    existing: impl IntoIterator<Item = &'a Contact>,
) -> bool {
    let key = DedupKey::of(candidate);
    existing.into_iter().any(|c| DedupKey::of(c) == key)
}
