//! Builds the typed value a command declares and runs the command on it.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use confval::{
    BigIntKind, BoolKind, Bound, CharKind, Collection, ConfigStore, Container, DecimalKind,
    FloatKind, IntegerKind, PathKind, RawNode, StringKind, TypedValue, ValueKind,
};

use crate::cli::{EntryArgs, Kind};

/// What to do with the value once it is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Get,
    Set(String),
    Reset,
}

/// Result of a command, printed as text or JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub key: String,
    /// The value as written to the file.
    pub value: RawNode,
    pub formatted: String,
    pub status: String,
}

/// Service running one command against a store.
pub struct EntryService<'a, S: ConfigStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: ConfigStore + ?Sized> EntryService<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Load the declared value, which may repair the store, then apply `action`.
    ///
    /// # Errors
    ///
    /// Returns error if the key, default, bounds or new value cannot be parsed.
    pub fn run(&mut self, entry: &EntryArgs, action: Action) -> Result<Report> {
        debug!(key = %entry.key, kind = ?entry.kind, action = ?action, "Running command");

        match entry.kind {
            Kind::Bool => self.scalar(BoolKind, entry, action),
            Kind::Short => self.scalar(IntegerKind::<i16>::new(), entry, action),
            Kind::Int => self.scalar(IntegerKind::<i32>::new(), entry, action),
            Kind::Long => self.scalar(IntegerKind::<i64>::new(), entry, action),
            Kind::BigInt => self.scalar(BigIntKind, entry, action),
            Kind::Float => self.scalar(FloatKind::<f32>::new(), entry, action),
            Kind::Double => self.scalar(FloatKind::<f64>::new(), entry, action),
            Kind::Decimal => self.scalar(DecimalKind, entry, action),
            Kind::Char => self.scalar(CharKind, entry, action),
            Kind::String => self.scalar(StringKind, entry, action),
            Kind::Path => self.scalar(PathKind, entry, action),
            Kind::IntList => self.list::<_, Vec<i32>>(IntegerKind::<i32>::new(), entry, action),
            Kind::StringList => self.list::<_, Vec<String>>(StringKind, entry, action),
            Kind::StringSet => self.list::<_, BTreeSet<String>>(StringKind, entry, action),
        }
    }

    fn scalar<K>(&mut self, kind: K, entry: &EntryArgs, action: Action) -> Result<Report>
    where
        K: ValueKind,
        K::Value: PartialOrd + Send + Sync,
    {
        let bounds = range_bounds(&kind, entry)?;
        self.execute(kind.with_bounds(bounds), entry, action)
    }

    fn list<K, C>(&mut self, element: K, entry: &EntryArgs, action: Action) -> Result<Report>
    where
        K: ValueKind,
        K::Value: PartialOrd + Send + Sync,
        C: Container<K::Value>,
    {
        let bounds = range_bounds(&element, entry)?;
        let kind: Collection<_, C> = Collection::new(element.with_bounds(bounds));
        self.execute(kind, entry, action)
    }

    fn execute<K: ValueKind>(&mut self, kind: K, entry: &EntryArgs, action: Action) -> Result<Report> {
        let default = kind
            .parse(&entry.default)
            .with_context(|| format!("Invalid default for '{}'", entry.key))?;
        let mut value = TypedValue::new(kind, entry.key.as_str(), default, &mut *self.store)?;

        let status = match action {
            Action::Get => value.last_load().as_str(),
            Action::Set(input) => {
                let repaired = value
                    .parse_and_set(&mut *self.store, &input)
                    .with_context(|| format!("Invalid value for '{}'", entry.key))?;
                if repaired {
                    "repaired"
                } else {
                    "set"
                }
            }
            Action::Reset => {
                value.reset(&mut *self.store);
                "reset"
            }
        };

        Ok(Report {
            key: entry.key.clone(),
            value: value.kind().to_file_node(value.get()),
            formatted: value.to_string(),
            status: status.to_string(),
        })
    }
}

/// Turn `--min`/`--max` into inclusive bounds, parsed by the kind itself.
fn range_bounds<K>(kind: &K, entry: &EntryArgs) -> Result<Vec<Bound<K::Value>>>
where
    K: ValueKind,
    K::Value: PartialOrd + Send + Sync,
{
    let mut bounds = Vec::new();
    if let Some(min) = &entry.min {
        let min = kind.parse(min).context("Invalid --min")?;
        bounds.push(Bound::at_least(min));
    }
    if let Some(max) = &entry.max {
        let max = kind.parse(max).context("Invalid --max")?;
        bounds.push(Bound::at_most(max));
    }
    Ok(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use confval::MemoryStore;

    fn entry(key: &str, kind: Kind, default: &str) -> EntryArgs {
        EntryArgs {
            key: key.to_string(),
            kind,
            default: default.to_string(),
            min: None,
            max: None,
        }
    }

    #[test]
    fn test_get_missing_writes_default() {
        let mut store = MemoryStore::new();
        let report = EntryService::new(&mut store)
            .run(&entry("limit", Kind::Int, "10"), Action::Get)
            .unwrap();

        assert_eq!(report.status, "missing");
        assert_eq!(report.formatted, "10");
        assert_eq!(store.get_raw("limit"), Some(RawNode::Int(10)));
    }

    #[test]
    fn test_get_repairs_with_max() {
        let mut store = MemoryStore::new().with("limit", 150);
        let mut args = entry("limit", Kind::Int, "10");
        args.max = Some("100".to_string());

        let report = EntryService::new(&mut store).run(&args, Action::Get).unwrap();
        assert_eq!(report.status, "repaired");
        assert_eq!(report.value, RawNode::Int(100));
        assert_eq!(store.get_raw("limit"), Some(RawNode::Int(100)));
    }

    #[test]
    fn test_big_int_beyond_i64_is_stored_as_text() {
        let mut store = MemoryStore::new();
        let huge = "99999999999999999999999";
        let report = EntryService::new(&mut store)
            .run(&entry("supply", Kind::BigInt, "0"), Action::Set(huge.to_string()))
            .unwrap();

        assert_eq!(report.status, "set");
        assert_eq!(report.formatted, huge);
        assert_eq!(store.get_raw("supply"), Some(RawNode::from(huge)));
    }

    #[test]
    fn test_set_clamps_each_list_element() {
        let mut store = MemoryStore::new();
        let mut args = entry("ports", Kind::IntList, "");
        args.min = Some("1".to_string());

        let report = EntryService::new(&mut store)
            .run(&args, Action::Set("5, -3 7".to_string()))
            .unwrap();
        assert_eq!(report.status, "repaired");
        assert_eq!(report.formatted, "5, 1, 7");
    }

    #[test]
    fn test_set_invalid_value_is_error() {
        let mut store = MemoryStore::new().with("limit", 3);
        let result = EntryService::new(&mut store)
            .run(&entry("limit", Kind::Int, "10"), Action::Set("abc".to_string()));

        assert!(result.is_err());
        assert_eq!(store.get_raw("limit"), Some(RawNode::Int(3)));
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_reset_and_string_set() {
        let mut store = MemoryStore::new().with("tags", RawNode::List(vec!["b".into(), "a".into()]));
        let args = entry("tags", Kind::StringSet, "x");

        let report = EntryService::new(&mut store).run(&args, Action::Get).unwrap();
        assert_eq!(report.formatted, "a, b");
        assert_eq!(report.status, "intact");

        let report = EntryService::new(&mut store).run(&args, Action::Reset).unwrap();
        assert_eq!(report.status, "reset");
        assert_eq!(store.get_raw("tags"), Some(RawNode::List(vec!["x".into()])));
    }

    #[test]
    fn test_invalid_default_and_key() {
        let mut store = MemoryStore::new();
        assert!(EntryService::new(&mut store)
            .run(&entry("flag", Kind::Bool, "maybe"), Action::Get)
            .is_err());
        assert!(EntryService::new(&mut store)
            .run(&entry("a..b", Kind::Bool, "true"), Action::Get)
            .is_err());
        assert!(store.is_empty());
    }
}
