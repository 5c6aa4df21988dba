//! Raw node model shared with the backing store.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;

use num_bigint::BigInt;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dynamically-typed value as held by the backing key/value store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNode {
    /// Boolean scalar
    Bool(bool),
    /// Integer scalar
    Int(i64),
    /// Floating point scalar
    Float(f64),
    /// String scalar
    String(String),
    /// Ordered list of nodes
    List(Vec<RawNode>),
    /// Nested section. No built-in kind reads a value from it.
    Table(BTreeMap<String, RawNode>),
}

impl RawNode {
    /// Short name of the node's shape, used in log output.
    pub fn shape(&self) -> &'static str {
        match self {
            RawNode::Bool(_) => "bool",
            RawNode::Int(_) => "int",
            RawNode::Float(_) => "float",
            RawNode::String(_) => "string",
            RawNode::List(_) => "list",
            RawNode::Table(_) => "table",
        }
    }

    pub fn is_scalar(&self) -> bool {
        !matches!(self, RawNode::List(_) | RawNode::Table(_))
    }
}

impl fmt::Display for RawNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawNode::Bool(b) => write!(f, "{b}"),
            RawNode::Int(i) => write!(f, "{i}"),
            // Debug keeps the fractional part ("150.0"), so the text still reads as a float
            RawNode::Float(x) => write!(f, "{x:?}"),
            RawNode::String(s) => f.write_str(s),
            RawNode::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            RawNode::Table(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key} = {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for RawNode {
    fn from(value: bool) -> Self {
        RawNode::Bool(value)
    }
}

impl From<i32> for RawNode {
    fn from(value: i32) -> Self {
        RawNode::Int(i64::from(value))
    }
}

impl From<i64> for RawNode {
    fn from(value: i64) -> Self {
        RawNode::Int(value)
    }
}

impl From<f64> for RawNode {
    fn from(value: f64) -> Self {
        RawNode::Float(value)
    }
}

impl From<&str> for RawNode {
    fn from(value: &str) -> Self {
        RawNode::String(value.to_string())
    }
}

impl From<String> for RawNode {
    fn from(value: String) -> Self {
        RawNode::String(value)
    }
}

impl From<Vec<RawNode>> for RawNode {
    fn from(items: Vec<RawNode>) -> Self {
        RawNode::List(items)
    }
}

/// Natural file encoding of a value.
pub trait IntoRawNode {
    fn to_raw_node(&self) -> RawNode;
}

impl IntoRawNode for bool {
    fn to_raw_node(&self) -> RawNode {
        RawNode::Bool(*self)
    }
}

macro_rules! int_node {
    ($($t:ty),*) => {
        $(
            impl IntoRawNode for $t {
                fn to_raw_node(&self) -> RawNode {
                    RawNode::Int(i64::from(*self))
                }
            }
        )*
    };
}

int_node!(i16, i32, i64);

impl IntoRawNode for f32 {
    fn to_raw_node(&self) -> RawNode {
        // Widen through the shortest decimal text so 0.1f32 is stored as 0.1
        RawNode::Float(
            self.to_string()
                .parse::<f64>()
                .unwrap_or_else(|_| f64::from(*self)),
        )
    }
}

impl IntoRawNode for f64 {
    fn to_raw_node(&self) -> RawNode {
        RawNode::Float(*self)
    }
}

impl IntoRawNode for Decimal {
    /// Narrows to an integer or float node only when no digits or scale are lost.
    fn to_raw_node(&self) -> RawNode {
        let text = self.to_string();
        if self.scale() == 0 {
            if let Ok(i) = text.parse::<i64>() {
                return RawNode::Int(i);
            }
        }
        match text.parse::<f64>() {
            Ok(f) if f.is_finite() && format!("{f:?}") == text => RawNode::Float(f),
            _ => RawNode::String(text),
        }
    }
}

impl IntoRawNode for BigInt {
    /// Integer node when it fits `i64`, otherwise its decimal text.
    fn to_raw_node(&self) -> RawNode {
        match i64::try_from(self) {
            Ok(i) => RawNode::Int(i),
            Err(_) => RawNode::String(self.to_string()),
        }
    }
}

impl IntoRawNode for char {
    fn to_raw_node(&self) -> RawNode {
        RawNode::String(self.to_string())
    }
}

impl IntoRawNode for String {
    fn to_raw_node(&self) -> RawNode {
        RawNode::String(self.clone())
    }
}

impl IntoRawNode for PathBuf {
    fn to_raw_node(&self) -> RawNode {
        RawNode::String(self.to_string_lossy().into_owned())
    }
}

impl<T: IntoRawNode> IntoRawNode for Option<T> {
    /// An absent value is stored as the empty string.
    fn to_raw_node(&self) -> RawNode {
        match self {
            Some(value) => value.to_raw_node(),
            None => RawNode::String(String::new()),
        }
    }
}

impl<T: IntoRawNode> IntoRawNode for Vec<T> {
    fn to_raw_node(&self) -> RawNode {
        RawNode::List(self.iter().map(IntoRawNode::to_raw_node).collect())
    }
}

impl<T: IntoRawNode> IntoRawNode for BTreeSet<T> {
    fn to_raw_node(&self) -> RawNode {
        RawNode::List(self.iter().map(IntoRawNode::to_raw_node).collect())
    }
}
