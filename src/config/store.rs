//! Key/value store contract and an in-memory implementation.

use std::collections::BTreeMap;

use crate::domain::RawNode;

/// Persisted key/value store addressed by dotted paths.
pub trait ConfigStore {
    /// Fetch the node at `path`, or `None` if absent.
    fn get_raw(&self, path: &str) -> Option<RawNode>;

    /// Write or overwrite the node at `path`.
    fn set_raw(&mut self, path: &str, node: RawNode);
}

/// Flat in-memory store keyed by the full dotted path.
///
/// Counts writes so callers can tell whether a load rewrote anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    entries: BTreeMap<String, RawNode>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry without counting it as a write.
    pub fn with(mut self, path: &str, node: impl Into<RawNode>) -> Self {
        self.entries.insert(path.to_string(), node.into());
        self
    }

    pub fn remove(&mut self, path: &str) -> Option<RawNode> {
        self.entries.remove(path)
    }

    /// Number of `set_raw` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ConfigStore for MemoryStore {
    fn get_raw(&self, path: &str) -> Option<RawNode> {
        self.entries.get(path).cloned()
    }

    fn set_raw(&mut self, path: &str, node: RawNode) {
        self.writes += 1;
        self.entries.insert(path.to_string(), node);
    }
}
