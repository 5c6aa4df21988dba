//! TOML-backed store for loading and persisting config files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::store::ConfigStore;
use super::types::{raw_from_toml, toml_from_raw};
use crate::domain::{ConfigError, RawNode};

/// Store backed by a TOML document, optionally tied to a file on disk.
///
/// Writes only touch the in-memory document. Callers decide when to
/// [`save`](TomlStore::save) and when to [`reload`](TomlStore::reload).
#[derive(Debug, Clone, Default)]
pub struct TomlStore {
    file: Option<PathBuf>,
    root: toml::Table,
    dirty: bool,
}

impl TomlStore {
    /// Get the default configuration file path.
    /// Always uses ~/.config/confval/config.toml for cross-platform consistency.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("confval")
            .join("config.toml")
    }

    /// Open the store at `path`. A missing file opens as an empty document.
    pub fn open(path: &Path) -> Result<Self, ConfigError> {
        let mut store = Self {
            file: Some(path.to_path_buf()),
            ..Self::default()
        };
        store.reload()?;
        Ok(store)
    }

    /// In-memory store parsed from TOML text; not tied to any file.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            root: toml::from_str(content)?,
            ..Self::default()
        })
    }

    /// Re-read the backing file, discarding unsaved writes.
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        let Some(path) = &self.file else {
            return Err(ConfigError::NoBackingFile);
        };

        self.root = if path.exists() {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        } else {
            debug!("Config file {} does not exist yet", path.display());
            toml::Table::new()
        };
        self.dirty = false;
        Ok(())
    }

    /// Write the document to the backing file, creating parent directories if needed.
    pub fn save(&mut self) -> Result<(), ConfigError> {
        let Some(path) = &self.file else {
            return Err(ConfigError::NoBackingFile);
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, self.to_toml_string()?)?;
        debug!("Saved config file {}", path.display());
        self.dirty = false;
        Ok(())
    }

    /// Serialize the current document, including unsaved writes.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(&self.root)?)
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// True if there are writes not yet saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl ConfigStore for TomlStore {
    fn get_raw(&self, path: &str) -> Option<RawNode> {
        let mut segments = path.split('.').peekable();
        let mut table = &self.root;
        while let Some(segment) = segments.next() {
            let value = table.get(segment)?;
            if segments.peek().is_none() {
                return Some(raw_from_toml(value));
            }
            table = value.as_table()?;
        }
        None
    }

    fn set_raw(&mut self, path: &str, node: RawNode) {
        let (parents, leaf) = match path.rsplit_once('.') {
            Some((parents, leaf)) => (Some(parents), leaf),
            None => (None, path),
        };

        let mut table = &mut self.root;
        for segment in parents.into_iter().flat_map(|p| p.split('.')) {
            let entry = table
                .entry(segment)
                .or_insert(toml::Value::Table(toml::Table::new()));
            if !entry.is_table() {
                // A scalar in the way of a section is overwritten
                *entry = toml::Value::Table(toml::Table::new());
            }
            let toml::Value::Table(next) = entry else {
                return;
            };
            table = next;
        }

        table.insert(leaf.to_string(), toml_from_raw(&node));
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_nested_value() {
        let store = TomlStore::from_toml_str("[server]\nport = 8080\nname = \"lobby\"").unwrap();
        assert_eq!(store.get_raw("server.port"), Some(RawNode::Int(8080)));
        assert_eq!(store.get_raw("server.name"), Some(RawNode::from("lobby")));
        assert_eq!(store.get_raw("server.missing"), None);
        assert_eq!(store.get_raw("server.port.deeper"), None);
        assert_eq!(store.get_raw("absent.port"), None);
    }

    #[test]
    fn test_set_creates_sections() {
        let mut store = TomlStore::default();
        store.set_raw("a.b.c", RawNode::Bool(true));
        assert_eq!(store.get_raw("a.b.c"), Some(RawNode::Bool(true)));
        assert!(store.is_dirty());

        let text = store.to_toml_string().unwrap();
        let reparsed = TomlStore::from_toml_str(&text).unwrap();
        assert_eq!(reparsed.get_raw("a.b.c"), Some(RawNode::Bool(true)));
    }

    #[test]
    fn test_set_overwrites_scalar_in_the_way() {
        let mut store = TomlStore::from_toml_str("a = 1").unwrap();
        store.set_raw("a.b", RawNode::Int(2));
        assert_eq!(store.get_raw("a.b"), Some(RawNode::Int(2)));
    }

    #[test]
    fn test_save_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut store = TomlStore::open(&path).unwrap();
        assert_eq!(store.get_raw("limit"), None);
        store.set_raw("limit", RawNode::Int(10));
        store.set_raw("names", RawNode::List(vec!["a".into(), "b".into()]));
        store.save().unwrap();
        assert!(!store.is_dirty());

        let reopened = TomlStore::open(&path).unwrap();
        assert_eq!(reopened.get_raw("limit"), Some(RawNode::Int(10)));
        assert_eq!(
            reopened.get_raw("names"),
            Some(RawNode::List(vec!["a".into(), "b".into()]))
        );
        assert_eq!(reopened.file_path(), Some(path.as_path()));
    }

    #[test]
    fn test_reload_discards_unsaved_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "limit = 1\n").unwrap();

        let mut store = TomlStore::open(&path).unwrap();
        store.set_raw("limit", RawNode::Int(2));
        store.reload().unwrap();
        assert_eq!(store.get_raw("limit"), Some(RawNode::Int(1)));
    }

    #[test]
    fn test_in_memory_store_cannot_save() {
        let mut store = TomlStore::default();
        assert!(matches!(store.save(), Err(ConfigError::NoBackingFile)));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            TomlStore::from_toml_str("not = = toml"),
            Err(ConfigError::TomlDe(_))
        ));
    }
}
