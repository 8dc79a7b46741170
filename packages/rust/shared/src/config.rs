//! Application configuration for ContactKit.
//!
//! User config lives at `~/.contactkit/contactkit.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ContactKitError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "contactkit.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".contactkit";

/// Instruction sent alongside a screenshot to the image-understanding service.
///
/// The service is expected to answer with one `Name, Phone` line per contact,
/// which is what the transcript line parser consumes.
pub const DEFAULT_INSTRUCTION: &str = "Analyze the screenshot provided and identify all \
unsaved phone numbers. For each number, attempt to determine the corresponding name based \
on the context of the screenshot. If a name is associated with a number, output the \
following: Name, {Number formatted in XXX-XXX-XXXX}";

// ---------------------------------------------------------------------------
// Export mode
// ---------------------------------------------------------------------------

/// How contact cards are packaged for emission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportMode {
    /// All cards concatenated into a single artifact.
    #[default]
    Combined,
    /// One artifact per contact.
    PerContact,
}

impl std::fmt::Display for ExportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Combined => f.write_str("combined"),
            Self::PerContact => f.write_str("per-contact"),
        }
    }
}

// ---------------------------------------------------------------------------
// Config structs (matching contactkit.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Screenshot transcript settings.
    #[serde(default)]
    pub transcript: TranscriptConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Directory `.vcf` files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Packaging used when `--mode` is not given.
    #[serde(default)]
    pub export_mode: ExportMode,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            export_mode: ExportMode::default(),
        }
    }
}

fn default_output_dir() -> String {
    ".".into()
}

/// `[transcript]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptConfig {
    /// Instruction handed to the image-understanding service.
    #[serde(default = "default_instruction")]
    pub instruction: String,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            instruction: default_instruction(),
        }
    }
}

fn default_instruction() -> String {
    DEFAULT_INSTRUCTION.into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.contactkit/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ContactKitError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.contactkit/contactkit.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| ContactKitError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        ContactKitError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| ContactKitError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| ContactKitError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ContactKitError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
