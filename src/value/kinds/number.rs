//! Integer and floating point values.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::domain::{ConvertError, IntoRawNode, ParseError, RawNode};
use crate::value::ValueKind;

/// Integer types a stored value can narrow into.
pub trait Integer:
    FromStr + TryFrom<i64> + Copy + PartialEq + fmt::Debug + IntoRawNode + 'static
{
    const NAME: &'static str;
    const MIN: Self;
    const MAX: Self;

    /// Truncate toward zero, saturating at the type's range.
    fn from_f64(value: f64) -> Self;
}

macro_rules! integer {
    ($($t:ty => $name:literal),*) => {
        $(
            impl Integer for $t {
                const NAME: &'static str = $name;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

integer!(i16 => "short integer", i32 => "integer", i64 => "long integer");

/// Floating point types.
pub trait Float: FromStr + Copy + PartialEq + fmt::Debug + IntoRawNode + 'static {
    const NAME: &'static str;

    fn from_f64(value: f64) -> Self;
}

impl Float for f32 {
    const NAME: &'static str = "float";

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Float for f64 {
    const NAME: &'static str = "double";

    fn from_f64(value: f64) -> Self {
        value
    }
}

/// Signed integer values.
///
/// Stored integers outside the type's range saturate, stored floats truncate
/// toward zero, and numeric strings parse; all three count as repairs.
pub struct IntegerKind<T>(PhantomData<fn() -> T>);

impl<T> IntegerKind<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for IntegerKind<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for IntegerKind<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for IntegerKind<T> {}

impl<T: Integer> fmt::Debug for IntegerKind<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntegerKind({})", T::NAME)
    }
}

impl<T: Integer> ValueKind for IntegerKind<T> {
    type Value = T;

    fn parse(&self, input: &str) -> Result<T, ParseError> {
        input.parse().map_err(|_| ParseError::invalid(input, T::NAME))
    }

    fn convert(&self, raw: &RawNode) -> Result<T, ConvertError<T>> {
        match raw {
            RawNode::Int(i) => T::try_from(*i).map_err(|_| {
                ConvertError::OutOfBounds(if *i < 0 { T::MIN } else { T::MAX })
            }),
            RawNode::Float(f) => Err(ConvertError::OutOfBounds(T::from_f64(*f))),
            RawNode::String(s) => match self.parse(s) {
                Ok(value) => Err(ConvertError::OutOfBounds(value)),
                Err(_) => Err(ConvertError::Unreadable),
            },
            RawNode::Bool(_) | RawNode::List(_) | RawNode::Table(_) => Err(ConvertError::Unreadable),
        }
    }
}

/// Floating point values. Stored integers and floats are read as-is; numeric strings are repairs.
pub struct FloatKind<T>(PhantomData<fn() -> T>);

impl<T> FloatKind<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for FloatKind<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FloatKind<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for FloatKind<T> {}

impl<T: Float> fmt::Debug for FloatKind<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FloatKind({})", T::NAME)
    }
}

impl<T: Float> ValueKind for FloatKind<T> {
    type Value = T;

    fn parse(&self, input: &str) -> Result<T, ParseError> {
        input.parse().map_err(|_| ParseError::invalid(input, T::NAME))
    }

    fn convert(&self, raw: &RawNode) -> Result<T, ConvertError<T>> {
        match raw {
            RawNode::Int(i) => Ok(T::from_f64(*i as f64)),
            RawNode::Float(f) => Ok(T::from_f64(*f)),
            RawNode::String(s) => match self.parse(s) {
                Ok(value) => Err(ConvertError::OutOfBounds(value)),
                Err(_) => Err(ConvertError::Unreadable),
            },
            RawNode::Bool(_) | RawNode::List(_) | RawNode::Table(_) => Err(ConvertError::Unreadable),
        }
    }
}
