//! Ready-made bounds grouped by the type they check.

pub mod bigint;
pub mod collection;
pub mod decimal;
pub mod numeric;
pub mod path;
pub mod text;

pub use numeric::Number;
