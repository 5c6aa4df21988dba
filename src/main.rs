//! confval: typed, self-healing configuration values
//!
//! A CLI tool that reads values from a TOML file as declared types, repairing the
//! file when a value is missing, unreadable or out of bounds.

mod cli;
mod service;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Commands, OutputFormat};
use confval::domain::logger;
use confval::TomlStore;
use service::{Action, EntryService};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging if debug mode
    if cli.debug {
        logger::init(&logger::default_log_dir())?;
    }

    let (entry, action) = match cli.command {
        Commands::Get(entry) => (entry, Action::Get),
        Commands::Set { entry, value } => (entry, Action::Set(value)),
        Commands::Reset(entry) => (entry, Action::Reset),
        Commands::Version => {
            println!("confval {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
    };

    let path = cli.file.unwrap_or_else(TomlStore::default_path);
    let mut store = TomlStore::open(&path)
        .with_context(|| format!("Failed to open config file {}", path.display()))?;

    let report = EntryService::new(&mut store).run(&entry, action)?;

    if store.is_dirty() {
        store
            .save()
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        if !cli.quiet {
            eprintln!("Updated {} ({}: {})", path.display(), report.key, report.status);
        }
    }

    match cli.output {
        OutputFormat::Text => println!("{}", report.formatted),
        OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
    }

    Ok(())
}
