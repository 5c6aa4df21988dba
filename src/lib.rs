//! confval: typed, self-healing configuration values.
//!
//! Each value is declared with a kind, a dotted path and a default. Loading it
//! from a key/value store never fails: missing, unreadable or out-of-bounds
//! entries are replaced by the default or a repaired value, and the
//! replacement is written back.
//!
//! ```
//! use confval::{Bound, IntegerKind, MemoryStore, TypedValue, ValueKind};
//!
//! let mut store = MemoryStore::new().with("limit", 150);
//! let kind = IntegerKind::<i32>::new().with_bounds(vec![Bound::at_most(100)]);
//! let limit = TypedValue::new(kind, "limit", 10, &mut store)?;
//! assert_eq!(*limit.get(), 100);
//! # Ok::<(), confval::ConfigError>(())
//! ```

pub mod config;
pub mod domain;
pub mod value;

pub use config::{ConfigStore, MemoryStore, TomlStore};
pub use domain::{
    Accumulator, Bound, ConfigError, Container, ConvertError, IntoRawNode, Outcome, ParseError,
    RawNode, Unreadable,
};
pub use value::kinds::{
    BigIntKind, BoolKind, CharKind, ChoiceKind, DecimalKind, FloatKind, IntegerKind, OptionalKind,
    PathKind, StringKind,
};
pub use value::{Bounded, Collection, LoadStatus, TypedValue, ValueKind};
