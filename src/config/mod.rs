//! Store layer.
//!
//! The persisted key/value store the value pipeline reads from and writes to,
//! with an in-memory implementation and a TOML file implementation.

mod service;
mod store;
mod types;
mod validation;

pub use service::TomlStore;
pub use store::{ConfigStore, MemoryStore};
pub use types::{raw_from_toml, toml_from_raw};
pub use validation::validate_path;
