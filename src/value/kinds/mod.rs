//! Built-in value kinds.

mod bigint;
mod boolean;
mod decimal;
mod number;
mod optional;
mod path;
mod text;

pub use bigint::BigIntKind;
pub use boolean::BoolKind;
pub use decimal::DecimalKind;
pub use number::{Float, FloatKind, Integer, IntegerKind};
pub use optional::OptionalKind;
pub use path::PathKind;
pub use text::{CharKind, ChoiceKind, StringKind};
