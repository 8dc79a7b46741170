//! CLI command definitions, routing, and tracing setup.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use contactkit_core::vcard::{self, CardFile};
use contactkit_core::{BatchOutcome, ContactStore, Delimiter, transcript};
use contactkit_shared::{
    AppConfig, ContactKitError, ExportMode, Rejection, init_config, load_config,
};
use tokio::io::AsyncReadExt;
use tracing::{info, warn};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// ContactKit: turn pasted lists and screenshots into contact cards.
#[derive(Parser)]
#[command(
    name = "contactkit",
    version,
    about = "Collect contacts from text and screenshot transcripts and export them as vCards.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Card packaging selected on the command line.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum ModeArg {
    /// A single contacts.vcf holding every card.
    Combined,
    /// One <name>.vcf per contact.
    PerContact,
}

impl From<ModeArg> for ExportMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Combined => Self::Combined,
            ModeArg::PerContact => Self::PerContact,
        }
    }
}

/// Contact sources, ingested in the order: manual, spreadsheet, transcript.
#[derive(Args, Debug, Default)]
pub(crate) struct Inputs {
    /// Add one contact by hand (repeatable).
    #[arg(long = "contact", num_args = 2, value_names = ["NAME", "PHONE"])]
    pub contacts: Vec<String>,

    /// File of `Name,Phone` lines pasted from a spreadsheet ("-" for stdin).
    #[arg(long = "spreadsheet", value_name = "PATH")]
    pub spreadsheets: Vec<PathBuf>,

    /// File of `Name, Phone` lines returned for a screenshot ("-" for stdin).
    #[arg(long = "transcript", value_name = "PATH")]
    pub transcripts: Vec<PathBuf>,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Ingest contacts and print the deduplicated list.
    List {
        #[command(flatten)]
        inputs: Inputs,

        /// Print contacts as a JSON array.
        #[arg(long)]
        json: bool,
    },

    /// Ingest contacts and write vCard files.
    Export {
        #[command(flatten)]
        inputs: Inputs,

        /// Packaging: combined or per-contact (defaults to config).
        #[arg(short, long)]
        mode: Option<ModeArg>,

        /// Output directory (defaults to config).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the instruction to send with a screenshot.
    Prompt,

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "contactkit=info",
        1 => "contactkit=debug",
        _ => "contactkit=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::List { inputs, json } => cmd_list(&inputs, json).await,
        Command::Export { inputs, mode, out } => {
            cmd_export(&inputs, mode.map(ExportMode::from), out).await
        }
        Command::Prompt => cmd_prompt().await,
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show().await,
        },
    }
}

// ---------------------------------------------------------------------------
// Ingestion
// ---------------------------------------------------------------------------

/// Build a fresh store from every input source.
async fn ingest(inputs: &Inputs) -> Result<ContactStore> {
    if inputs.contacts.is_empty() && inputs.spreadsheets.is_empty() && inputs.transcripts.is_empty()
    {
        return Err(eyre!("no inputs given: use --contact, --spreadsheet, or --transcript"));
    }

    let mut store = ContactStore::new();

    for pair in inputs.contacts.chunks_exact(2) {
        let (name, phone) = (&pair[0], &pair[1]);
        match store.add_one(name, phone) {
            Ok(contact) => info!(id = %contact.id(), name = contact.name(), "added contact"),
            Err(reason) => report_rejection("--contact", &reason),
        }
    }

    for path in &inputs.spreadsheets {
        let text = read_input(path).await?;
        let outcome = store.add_batch(&text, Delimiter::Spreadsheet);
        report_batch(path, &outcome);
    }

    for path in &inputs.transcripts {
        let text = read_input(path).await?;
        let outcome = store.add_transcript(&text);
        report_batch(path, &outcome);
    }

    Ok(store)
}

async fn read_input(path: &Path) -> Result<String> {
    let mut text = String::new();
    if path.as_os_str() == "-" {
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .map_err(|e| ContactKitError::io(path, e))?;
    } else {
        text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ContactKitError::io(path, e))?;
    }
    Ok(text)
}

fn report_rejection(source: &str, reason: &Rejection) {
    warn!(source, kind = reason.kind(), "contact skipped");
    eprintln!("  {source}: {reason}");
}

/// Print invalid and malformed lines individually; duplicates only as a count.
fn report_batch(path: &Path, outcome: &BatchOutcome) {
    let source = path.display();
    for diag in &outcome.diagnostics {
        if !matches!(diag.reason, Rejection::DuplicateContact { .. }) {
            eprintln!("  {source}: {diag}");
        }
    }

    let duplicates = outcome.duplicates();
    if duplicates > 0 {
        eprintln!("  {source}: {duplicates} duplicate contact(s) skipped");
    }

    info!(
        source = %source,
        added = outcome.added.len(),
        invalid = outcome.invalid(),
        missing = outcome.missing(),
        duplicates,
        "processed input"
    );
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

async fn cmd_list(inputs: &Inputs, json: bool) -> Result<()> {
    let store = ingest(inputs).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(store.all())?);
        return Ok(());
    }

    if store.is_empty() {
        println!("No contacts.");
        return Ok(());
    }

    for contact in store.all() {
        println!("{contact}");
    }
    Ok(())
}

async fn cmd_export(inputs: &Inputs, mode: Option<ExportMode>, out: Option<PathBuf>) -> Result<()> {
    let config = load_config()?;
    export_contacts(&config, inputs, mode, out).await?;
    Ok(())
}

/// Ingest, render, and write cards. Returns the paths written.
async fn export_contacts(
    config: &AppConfig,
    inputs: &Inputs,
    mode: Option<ExportMode>,
    out: Option<PathBuf>,
) -> Result<Vec<PathBuf>> {
    let mode = mode.unwrap_or(config.defaults.export_mode);
    let out_dir = out.unwrap_or_else(|| PathBuf::from(&config.defaults.output_dir));

    let store = ingest(inputs).await?;
    let files = vcard::export(store.all(), mode).into_files();

    if files.is_empty() {
        println!("No contacts to export.");
        return Ok(Vec::new());
    }

    tokio::fs::create_dir_all(&out_dir)
        .await
        .map_err(|e| ContactKitError::io(&out_dir, e))?;

    info!(%mode, count = store.len(), out = %out_dir.display(), "exporting contacts");

    let mut taken = HashSet::new();
    let mut written = Vec::with_capacity(files.len());
    for file in &files {
        let path = out_dir.join(unique_file_name(file, &mut taken));
        tokio::fs::write(&path, &file.content)
            .await
            .map_err(|e| ContactKitError::io(&path, e))?;
        println!("  wrote {}", path.display());
        written.push(path);
    }

    println!();
    println!("  Exported {} contact(s) to {} file(s).", store.len(), files.len());
    println!();

    Ok(written)
}

/// Keep per-contact files from overwriting each other when names repeat.
///
/// Names are compared case-insensitively since common filesystems (APFS,
/// NTFS) treat `Mom.vcf` and `MOM.vcf` as the same file.
fn unique_file_name(file: &CardFile, taken: &mut HashSet<String>) -> String {
    if taken.insert(file.file_name.to_lowercase()) {
        return file.file_name.clone();
    }

    let stem = file
        .file_name
        .strip_suffix(".vcf")
        .unwrap_or(&file.file_name);
    let mut n = 2;
    loop {
        let candidate = format!("{stem} ({n}).vcf");
        if taken.insert(candidate.to_lowercase()) {
            return candidate;
        }
        n += 1;
    }
}

async fn cmd_prompt() -> Result<()> {
    let config = load_config()?;
    println!("{}", transcript::instruction(&config));
    Ok(())
}

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

async fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
