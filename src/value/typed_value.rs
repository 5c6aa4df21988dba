//! A single typed configuration entry bound to a dotted path.

use std::fmt;

use tracing::{debug, info, warn};

use super::kind::ValueKind;
use crate::config::{validate_path, ConfigStore};
use crate::domain::{Accumulator, ConfigError, Outcome, ParseError, RawNode, Unreadable};

/// How the most recent load resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Stored value was used as-is.
    Intact,
    /// Nothing was stored; the default was written.
    Missing,
    /// Stored value was repaired and the repair written back.
    Repaired,
    /// Stored value could not be read; the default was written.
    Unreadable,
}

impl LoadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadStatus::Intact => "intact",
            LoadStatus::Missing => "missing",
            LoadStatus::Repaired => "repaired",
            LoadStatus::Unreadable => "unreadable",
        }
    }

    /// True if the load wrote to the store.
    pub fn rewrote_store(&self) -> bool {
        !matches!(self, LoadStatus::Intact)
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configuration value of kind `K` stored under a dotted path.
///
/// Construction loads the value immediately. Loading never fails: a missing,
/// unreadable or out-of-bounds entry is replaced in the store by the default
/// or by a repaired value. The store is passed into every operation that reads
/// or writes it; [`get`](TypedValue::get) only reads the cache.
#[derive(Debug, Clone)]
pub struct TypedValue<K: ValueKind> {
    kind: K,
    path: String,
    default: K::Value,
    current: K::Value,
    last_load: LoadStatus,
}

impl<K: ValueKind> TypedValue<K> {
    /// Create the value and load it from `store`.
    ///
    /// # Errors
    ///
    /// Returns error if `path` is not a valid dotted path.
    pub fn new<S>(
        kind: K,
        path: impl Into<String>,
        default: K::Value,
        store: &mut S,
    ) -> Result<Self, ConfigError>
    where
        S: ConfigStore + ?Sized,
    {
        let path = path.into();
        validate_path(&path)?;

        let mut value = Self {
            kind,
            path,
            current: default.clone(),
            default,
            last_load: LoadStatus::Intact,
        };
        value.reload(store);
        Ok(value)
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn default_value(&self) -> &K::Value {
        &self.default
    }

    /// The cached value. Never touches the store.
    pub fn get(&self) -> &K::Value {
        &self.current
    }

    pub fn last_load(&self) -> LoadStatus {
        self.last_load
    }

    /// Load again, for when the backing store changed externally.
    pub fn reload<S>(&mut self, store: &mut S) -> LoadStatus
    where
        S: ConfigStore + ?Sized,
    {
        let (value, status) = self.load(store);
        self.current = value;
        self.last_load = status;
        status
    }

    fn load<S>(&self, store: &mut S) -> (K::Value, LoadStatus)
    where
        S: ConfigStore + ?Sized,
    {
        let Some(raw) = store.get_raw(&self.path) else {
            debug!(path = %self.path, "Value missing, writing default");
            self.write(store, &self.default);
            return (self.default.clone(), LoadStatus::Missing);
        };

        match self.read(&raw) {
            Outcome::Unchanged(value) => (value, LoadStatus::Intact),
            Outcome::Replaced(value) => {
                warn!(
                    path = %self.path,
                    stored = %raw,
                    repaired = %self.kind.format(&value),
                    "Stored value repaired"
                );
                self.write(store, &value);
                (value, LoadStatus::Repaired)
            }
            Outcome::Unreadable => {
                warn!(
                    path = %self.path,
                    stored = %raw,
                    shape = raw.shape(),
                    "Stored value unreadable, writing default"
                );
                self.write(store, &self.default);
                (self.default.clone(), LoadStatus::Unreadable)
            }
        }
    }

    /// Run a stored node through convert then validate, without touching any store.
    pub fn read(&self, raw: &RawNode) -> Outcome<K::Value> {
        let pipeline = || -> Result<Outcome<K::Value>, Unreadable> {
            let converted = Accumulator::new(raw).convert(|node| self.kind.convert(node))?;
            Ok(self.kind.validate(converted).finish())
        };
        pipeline().into()
    }

    /// Validate and commit a new value. Returns true if it had to be repaired.
    pub fn set<S>(&mut self, store: &mut S, value: K::Value) -> bool
    where
        S: ConfigStore + ?Sized,
    {
        let checked = self.kind.validate(Accumulator::new(value));
        let repaired = checked.is_repaired();
        let value = checked.into_value();
        info!(
            path = %self.path,
            value = %self.kind.format(&value),
            repaired,
            "Setting value"
        );
        self.commit(store, value);
        repaired
    }

    /// Commit the default value. The default is not re-validated.
    pub fn reset<S>(&mut self, store: &mut S)
    where
        S: ConfigStore + ?Sized,
    {
        info!(path = %self.path, "Resetting value to default");
        self.commit(store, self.default.clone());
    }

    /// Parse user input and set it. Empty input resets unless the kind is optional.
    ///
    /// Returns true if the parsed value had to be repaired.
    ///
    /// # Errors
    ///
    /// Returns the parse error; cache and store are left untouched.
    pub fn parse_and_set<S>(&mut self, store: &mut S, input: &str) -> Result<bool, ParseError>
    where
        S: ConfigStore + ?Sized,
    {
        if input.is_empty() && !self.kind.is_optional() {
            self.reset(store);
            return Ok(false);
        }

        let value = self.kind.parse(input)?;
        Ok(self.set(store, value))
    }

    /// Check a value against this entry's bounds without committing it.
    pub fn validate(&self, value: K::Value) -> K::Value {
        self.kind.validate(Accumulator::new(value)).into_value()
    }

    pub fn format(&self, value: &K::Value) -> String {
        self.kind.format(value)
    }

    /// Completion hints: the formatted current value, then the formatted default.
    pub fn suggestions(&self) -> [String; 2] {
        [self.to_string(), self.kind.format(&self.default)]
    }

    fn commit<S>(&mut self, store: &mut S, value: K::Value)
    where
        S: ConfigStore + ?Sized,
    {
        self.kind.before_set(&self.current, &value);
        self.write(store, &value);
        self.current = value;
        self.kind.after_set(&self.current);
    }

    fn write<S>(&self, store: &mut S, value: &K::Value)
    where
        S: ConfigStore + ?Sized,
    {
        store.set_raw(&self.path, self.kind.to_file_node(value));
    }
}

impl<K: ValueKind> fmt::Display for TypedValue<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind.format(&self.current))
    }
}

/// Two entries are equal when they share a path and a default.
impl<K: ValueKind> PartialEq for TypedValue<K> {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.default == other.default
    }
}
