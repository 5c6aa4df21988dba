//! Typed configuration values.
//!
//! A [`TypedValue`] ties a [`ValueKind`] to a dotted path in a store.
//! [`Collection`] is the kind for values holding a container of elements.

mod collection;
mod kind;
pub mod kinds;
mod typed_value;

pub use collection::Collection;
pub use kind::{Bounded, ValueKind};
pub use typed_value::{LoadStatus, TypedValue};
