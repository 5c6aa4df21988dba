//! CLI argument parsing and command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Read and write typed, self-healing configuration values
#[derive(Parser)]
#[command(
    name = "confval",
    version,
    about = "Read and write typed, self-healing configuration values",
    long_about = "Reads a value from a TOML config file as a declared type, repairing or \
                  replacing it in the file when it is missing, unreadable or out of bounds."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the TOML file holding the values
    #[arg(long, short = 'f', global = true)]
    pub file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, short = 'o', global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Formatted value only (default)
    #[default]
    Text,
    /// JSON object with key, value, formatted and status
    Json,
}

/// Type a value is declared as
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Kind {
    Bool,
    /// 16-bit integer
    Short,
    /// 32-bit integer
    Int,
    /// 64-bit integer
    Long,
    /// Integer of any size
    BigInt,
    /// 32-bit float
    Float,
    /// 64-bit float
    Double,
    /// Arbitrary precision decimal
    Decimal,
    Char,
    String,
    Path,
    /// List of 32-bit integers
    IntList,
    StringList,
    /// Sorted list of distinct strings
    StringSet,
}

/// Declaration of the value a command works on
#[derive(Debug, Clone, Args)]
pub struct EntryArgs {
    /// Dotted path of the value, e.g. server.port
    pub key: String,

    /// Declared type of the value
    #[arg(long, short = 't')]
    pub kind: Kind,

    /// Default value, in the same syntax as `set`
    #[arg(long, short = 'd', allow_hyphen_values = true)]
    pub default: String,

    /// Lower bound, applied to each element for list kinds
    #[arg(long, allow_hyphen_values = true)]
    pub min: Option<String>,

    /// Upper bound, applied to each element for list kinds
    #[arg(long, allow_hyphen_values = true)]
    pub max: Option<String>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Print a value, repairing it in the file if needed
    Get(EntryArgs),
    /// Parse and store a new value; empty input resets it
    Set {
        #[command(flatten)]
        entry: EntryArgs,
        /// New value; list elements are separated by commas or spaces
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Store the default value
    Reset(EntryArgs),
    /// Display version information
    Version,
}
