//! Contact ingestion pipeline for ContactKit.
//!
//! Text from manual entry, spreadsheet pastes, or screenshot transcripts is
//! parsed, phone-normalized, deduplicated into a [`store::ContactStore`], and
//! exported as vCard 3.0 by [`vcard`].

pub mod dedup;
pub mod parser;
pub mod phone;
pub mod store;
pub mod transcript;
pub mod vcard;

pub use parser::{Delimiter, Diagnostic};
pub use store::{BatchOutcome, ContactStore};
