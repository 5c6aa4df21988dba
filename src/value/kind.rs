//! Per-type hooks a configuration value is built from.

use std::fmt;

use crate::domain::{Accumulator, Bound, ConvertError, IntoRawNode, ParseError, RawNode};

/// Capability trait describing how one type of value is parsed, read, checked and stored.
///
/// Only [`parse`](ValueKind::parse) is required; every other hook has a default.
pub trait ValueKind {
    type Value: Clone + PartialEq + fmt::Debug + IntoRawNode + 'static;

    /// Parse user-entered text.
    fn parse(&self, input: &str) -> Result<Self::Value, ParseError>;

    /// Interpret a node read from the store.
    ///
    /// By default the node is stringified and parsed; a parse failure makes it unreadable.
    fn convert(&self, raw: &RawNode) -> Result<Self::Value, ConvertError<Self::Value>> {
        self.parse(&raw.to_string())
            .map_err(|_| ConvertError::Unreadable)
    }

    /// Ordered bounds every value must satisfy.
    fn bounds(&self) -> Vec<Bound<Self::Value>> {
        Vec::new()
    }

    /// Validation step of the pipeline. Collections override this to check elements too.
    fn validate(&self, acc: Accumulator<Self::Value>) -> Accumulator<Self::Value> {
        acc.validate(&self.bounds())
    }

    /// Encode a value for the store.
    fn to_file_node(&self, value: &Self::Value) -> RawNode {
        value.to_raw_node()
    }

    fn format(&self, value: &Self::Value) -> String {
        value.to_raw_node().to_string()
    }

    /// Whether empty input is handed to `parse` instead of meaning "reset".
    fn is_optional(&self) -> bool {
        false
    }

    /// Called before every set or reset, with the current and the incoming value.
    fn before_set(&self, _current: &Self::Value, _next: &Self::Value) {}

    /// Called after every set or reset, with the committed value.
    fn after_set(&self, _value: &Self::Value) {}

    /// Attach additional bounds, checked after this kind's own.
    fn with_bounds(self, bounds: Vec<Bound<Self::Value>>) -> Bounded<Self>
    where
        Self: Sized,
    {
        Bounded::new(self, bounds)
    }
}

/// A kind with extra bounds appended to its own.
#[derive(Debug, Clone)]
pub struct Bounded<K: ValueKind> {
    inner: K,
    bounds: Vec<Bound<K::Value>>,
}

impl<K: ValueKind> Bounded<K> {
    pub fn new(inner: K, bounds: Vec<Bound<K::Value>>) -> Self {
        Self { inner, bounds }
    }

    pub fn inner(&self) -> &K {
        &self.inner
    }
}

impl<K: ValueKind> ValueKind for Bounded<K> {
    type Value = K::Value;

    fn parse(&self, input: &str) -> Result<Self::Value, ParseError> {
        self.inner.parse(input)
    }

    fn convert(&self, raw: &RawNode) -> Result<Self::Value, ConvertError<Self::Value>> {
        self.inner.convert(raw)
    }

    fn bounds(&self) -> Vec<Bound<Self::Value>> {
        let mut bounds = self.inner.bounds();
        bounds.extend(self.bounds.iter().cloned());
        bounds
    }

    fn validate(&self, acc: Accumulator<Self::Value>) -> Accumulator<Self::Value> {
        self.inner.validate(acc).validate(&self.bounds)
    }

    fn to_file_node(&self, value: &Self::Value) -> RawNode {
        self.inner.to_file_node(value)
    }

    fn format(&self, value: &Self::Value) -> String {
        self.inner.format(value)
    }

    fn is_optional(&self) -> bool {
        self.inner.is_optional()
    }

    fn before_set(&self, current: &Self::Value, next: &Self::Value) {
        self.inner.before_set(current, next);
    }

    fn after_set(&self, value: &Self::Value) {
        self.inner.after_set(value);
    }
}
