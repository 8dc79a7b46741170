//! Shared types, error model, and configuration for ContactKit.
//!
//! This crate is the foundation depended on by all other ContactKit crates.
//! It provides:
//! - [`ContactKitError`] and [`Rejection`]: the error model
//! - Domain types ([`Contact`], [`ContactId`])
//! - Configuration ([`AppConfig`], [`ExportMode`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DEFAULT_INSTRUCTION, DefaultsConfig, ExportMode, TranscriptConfig, config_dir,
    config_file_path, init_config, load_config, load_config_from,
};
pub use error::{ContactKitError, Field, Rejection, Result};
pub use types::{Contact, ContactId};
