//! Error types for confval.

use thiserror::Error;

/// User-entered text could not become a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input is not a valid representation of the expected type
    #[error("'{input}' is not a valid {expected}")]
    Invalid {
        input: String,
        expected: &'static str,
    },

    /// The input is not one of a fixed set of names
    #[error("'{input}' is not one of: {}", choices.join(", "))]
    UnknownChoice { input: String, choices: Vec<String> },

    /// One element of a list input failed to parse
    #[error("element {index}: {source}")]
    Element {
        index: usize,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    pub fn invalid(input: &str, expected: &'static str) -> Self {
        ParseError::Invalid {
            input: input.to_string(),
            expected,
        }
    }
}

/// Main error type for confval.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Dotted path rejected before touching the store
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    /// Store has no file to persist to
    #[error("Store is not backed by a file")]
    NoBackingFile,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}
