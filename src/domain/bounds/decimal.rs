//! Bounds for arbitrary-precision decimals.

use rust_decimal::{Decimal, RoundingStrategy};

use super::Number;
use crate::domain::Bound;

impl Number for Decimal {
    fn zero() -> Self {
        Decimal::ZERO
    }

    fn magnitude(&self) -> Self {
        self.abs()
    }

    fn positive() -> Bound<Self> {
        Bound::greater_than(Decimal::ZERO).named("positive")
    }

    fn negative() -> Bound<Self> {
        Bound::less_than(Decimal::ZERO).named("negative")
    }
}

/// Requires exactly `scale` digits after the decimal point.
///
/// Values with more digits are rounded half-to-even; values with fewer are padded.
pub fn scale(scale: u32) -> Bound<Decimal> {
    Bound::requiring(
        move |d: &Decimal| d.scale() == scale,
        move |d| {
            let mut rounded = d.round_dp_with_strategy(scale, RoundingStrategy::MidpointNearestEven);
            rounded.rescale(scale);
            rounded
        },
    )
    .named("scale")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bounds::numeric::{absolute, positive, positive_or_zero};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_scale_rounds_half_even() {
        let bound = scale(2);
        assert_eq!(bound.check(&dec("1.25")), Ok(()));
        assert_eq!(bound.check(&dec("1.125")).unwrap_err().to_string(), "1.12");
        assert_eq!(bound.check(&dec("1.135")).unwrap_err().to_string(), "1.14");
    }

    #[test]
    fn test_scale_uses_requested_digits() {
        let padded = scale(3).check(&dec("1.5")).unwrap_err();
        assert_eq!(padded.to_string(), "1.500");
        assert_eq!(padded.scale(), 3);

        let whole = scale(0).check(&dec("2.5")).unwrap_err();
        assert_eq!(whole.to_string(), "2");
    }

    #[test]
    fn test_sign_bounds() {
        assert_eq!(positive::<Decimal>().check(&dec("-1")), Err(Decimal::ZERO));
        assert_eq!(positive_or_zero::<Decimal>().check(&Decimal::ZERO), Ok(()));
        assert_eq!(absolute::<Decimal>().check(&dec("-3.5")), Err(dec("3.5")));
    }
}
