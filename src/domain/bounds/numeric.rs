//! Sign bounds for numbers.

use crate::domain::Bound;

/// Numbers the sign bounds apply to.
pub trait Number: PartialOrd + Clone + Send + Sync + 'static {
    /// The additive identity.
    fn zero() -> Self;

    /// Absolute value, saturating where the negative range is wider.
    fn magnitude(&self) -> Self;

    /// Bound accepting only values above zero.
    fn positive() -> Bound<Self>;

    /// Bound accepting only values below zero.
    fn negative() -> Bound<Self>;
}

macro_rules! integer_number {
    ($($t:ty),*) => {
        $(
            impl Number for $t {
                fn zero() -> Self {
                    0
                }

                fn magnitude(&self) -> Self {
                    self.saturating_abs()
                }

                fn positive() -> Bound<Self> {
                    Bound::at_least(1).named("positive")
                }

                fn negative() -> Bound<Self> {
                    Bound::at_most(-1).named("negative")
                }
            }
        )*
    };
}

macro_rules! float_number {
    ($($t:ty),*) => {
        $(
            impl Number for $t {
                fn zero() -> Self {
                    0.0
                }

                fn magnitude(&self) -> Self {
                    self.abs()
                }

                fn positive() -> Bound<Self> {
                    Bound::greater_than(0.0).named("positive")
                }

                fn negative() -> Bound<Self> {
                    Bound::less_than(0.0).named("negative")
                }
            }
        )*
    };
}

integer_number!(i16, i32, i64);
float_number!(f32, f64);

/// Negative values are replaced by their magnitude.
pub fn absolute<T: Number>() -> Bound<T> {
    Bound::requiring(|v: &T| *v >= T::zero(), |v| v.magnitude()).named("absolute")
}

/// Values at or below zero are replaced by the smallest positive value (zero for floats).
pub fn positive<T: Number>() -> Bound<T> {
    T::positive()
}

/// Negative values are replaced by zero.
pub fn positive_or_zero<T: Number>() -> Bound<T> {
    Bound::at_least(T::zero()).named("positive_or_zero")
}

/// Positive values are replaced by zero.
pub fn negative_or_zero<T: Number>() -> Bound<T> {
    Bound::at_most(T::zero()).named("negative_or_zero")
}

/// Values at or above zero are replaced by the largest negative value (zero for floats).
pub fn negative<T: Number>() -> Bound<T> {
    T::negative()
}
