//! Service layer running CLI commands against a store.

mod entry_service;

pub use entry_service::{Action, EntryService};
