//! Three-way classification of a value threaded through conversion and validation.
//!
//! [`Accumulator`] carries a value through a sequence of steps. A step can keep
//! the value, substitute a replacement, or (during conversion only) give up.
//! Whether any substitution happened is sticky for the whole run.

use thiserror::Error;
use tracing::trace;

use super::Bound;

/// Failure signalled by a conversion step.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError<T> {
    /// Readable, but not in the expected form; use the embedded replacement.
    OutOfBounds(T),
    /// Cannot be interpreted at all.
    Unreadable,
}

impl<T> ConvertError<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ConvertError<U> {
        match self {
            ConvertError::OutOfBounds(value) => ConvertError::OutOfBounds(f(value)),
            ConvertError::Unreadable => ConvertError::Unreadable,
        }
    }
}

/// A pipeline aborted because its input could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value could not be interpreted")]
pub struct Unreadable;

/// Terminal classification of a pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// Survived every step as-is.
    Unchanged(T),
    /// At least one step substituted a value; this is the final one.
    Replaced(T),
    /// The source could not be interpreted; no replacement exists.
    Unreadable,
}

impl<T> Outcome<T> {
    /// True for `Replaced`.
    pub fn is_replaced(&self) -> bool {
        matches!(self, Outcome::Replaced(_))
    }

    /// The final value, or `None` if unreadable.
    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Unchanged(value) | Outcome::Replaced(value) => Some(value),
            Outcome::Unreadable => None,
        }
    }
}

impl<T> From<Result<Outcome<T>, Unreadable>> for Outcome<T> {
    fn from(result: Result<Outcome<T>, Unreadable>) -> Self {
        result.unwrap_or(Outcome::Unreadable)
    }
}

/// Threads a value through fallible steps, remembering whether any step repaired it.
#[derive(Debug, Clone)]
pub struct Accumulator<T> {
    value: T,
    repaired: bool,
}

impl<T> Accumulator<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            repaired: false,
        }
    }

    /// Run a conversion step.
    ///
    /// An out-of-bounds result carries its replacement forward and marks the run
    /// repaired. An unreadable result aborts the run; propagate it with `?`.
    pub fn convert<U>(
        self,
        f: impl FnOnce(T) -> Result<U, ConvertError<U>>,
    ) -> Result<Accumulator<U>, Unreadable> {
        match f(self.value) {
            Ok(value) => Ok(Accumulator {
                value,
                repaired: self.repaired,
            }),
            Err(ConvertError::OutOfBounds(value)) => Ok(Accumulator {
                value,
                repaired: true,
            }),
            Err(ConvertError::Unreadable) => Err(Unreadable),
        }
    }

    /// Run an infallible step. `Err` carries a replacement and marks the run repaired.
    pub fn repair(self, f: impl FnOnce(T) -> Result<T, T>) -> Self {
        match f(self.value) {
            Ok(value) => Self {
                value,
                repaired: self.repaired,
            },
            Err(value) => Self {
                value,
                repaired: true,
            },
        }
    }

    /// Apply each bound in order; later bounds see earlier replacements.
    pub fn validate(self, bounds: &[Bound<T>]) -> Self {
        bounds.iter().fold(self, |acc, bound| {
            acc.repair(|value| match bound.check(&value) {
                Ok(()) => Ok(value),
                Err(replacement) => {
                    trace!(bound = bound.name(), "bound replaced value");
                    Err(replacement)
                }
            })
        })
    }

    /// True once any step has substituted a value.
    pub fn is_repaired(&self) -> bool {
        self.repaired
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// `Replaced` if any step repaired the value, otherwise `Unchanged`.
    pub fn finish(self) -> Outcome<T> {
        if self.repaired {
            Outcome::Replaced(self.value)
        } else {
            Outcome::Unchanged(self.value)
        }
    }
}
