//! Core domain types for ContactKit.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// ContactId
// ---------------------------------------------------------------------------

/// A UUID v7 wrapper for contact identifiers (time-sortable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub Uuid);

impl ContactId {
    /// Generate a new time-sortable contact identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ContactId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

/// A single stored contact.
///
/// Fields are private so a record cannot change after creation; the phone is
/// whatever the normalizer produced when the record was built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    id: ContactId,
    name: String,
    phone: String,
}

impl Contact {
    /// Build a record with a fresh identifier.
    ///
    /// Callers are responsible for trimming and normalizing first.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: ContactId::new(),
            name: name.into(),
            phone: phone.into(),
        }
    }

    pub fn id(&self) -> ContactId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

impl std::fmt::Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_id_roundtrip() {
        let id = ContactId::new();
        let s = id.to_string();
        let parsed: ContactId = s.parse().expect("parse ContactId");
        assert_eq!(id, parsed);
    }

    #[test]
    fn contact_ids_are_unique() {
        let a = Contact::new("Jane", "555-123-4567");
        let b = Contact::new("Jane", "555-123-4567");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn contact_display_matches_listing() {
        let c = Contact::new("Jane Doe", "555-123-4567");
        assert_eq!(c.to_string(), "Jane Doe: 555-123-4567");
    }

    #[test]
    fn contact_serialization() {
        let c = Contact::new("Jane Doe", "555-123-4567");
        let json = serde_json::to_string(&c).expect("serialize");
        assert!(json.contains("\"name\":\"Jane Doe\""));
        assert!(json.contains(&c.id().to_string()));

        let parsed: Contact = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, c);
    }
}
