//! Error types for ContactKit.
//!
//! Library crates use [`ContactKitError`] and [`Rejection`] via `thiserror`.
//! A [`Rejection`] is a per-contact skip reason and is returned as a value,
//! never escalated into [`ContactKitError`].
//! The CLI wraps these with `color-eyre` for rich diagnostics.

use std::fmt;
use std::path::PathBuf;

/// Which field of a contact was absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => f.write_str("name"),
            Self::Phone => f.write_str("phone"),
        }
    }
}

/// Why a single contact candidate was not stored.
///
/// Every variant is recoverable: batch operations record it and move on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// The phone does not resolve to exactly 10 digits.
    #[error("invalid phone number for {name}: {phone}")]
    InvalidPhoneFormat { name: String, phone: String },

    /// Name or phone was absent after splitting and trimming.
    #[error("missing {0}")]
    MissingField(Field),

    /// Same name (case-insensitive) and digits as an existing contact.
    #[error("duplicate contact: {name} ({phone})")]
    DuplicateContact { name: String, phone: String },
}

/// Top-level error type for all ContactKit operations.
#[derive(Debug, thiserror::Error)]
pub enum ContactKitError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ContactKitError>;

impl ContactKitError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl Rejection {
    /// Short label used when aggregating diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidPhoneFormat { .. } => "invalid phone",
            Self::MissingField(_) => "missing field",
            Self::DuplicateContact { .. } => "duplicate",
        }
    }
}
