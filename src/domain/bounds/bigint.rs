//! Bounds for arbitrary-precision integers.

use num_bigint::{BigInt, Sign};

use super::Number;
use crate::domain::Bound;

impl Number for BigInt {
    fn zero() -> Self {
        BigInt::default()
    }

    fn magnitude(&self) -> Self {
        match self.sign() {
            Sign::Minus => -self,
            Sign::NoSign | Sign::Plus => self.clone(),
        }
    }

    fn positive() -> Bound<Self> {
        Bound::at_least(BigInt::from(1)).named("positive")
    }

    fn negative() -> Bound<Self> {
        Bound::at_most(BigInt::from(-1)).named("negative")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bounds::numeric::{absolute, negative, negative_or_zero, positive};
    use std::str::FromStr;

    fn big(s: &str) -> BigInt {
        BigInt::from_str(s).unwrap()
    }

    #[test]
    fn test_absolute_beyond_i64() {
        let huge = "-123456789012345678901234567890";
        assert_eq!(absolute::<BigInt>().check(&big(huge)), Err(big(&huge[1..])));
        assert_eq!(absolute::<BigInt>().check(&BigInt::default()), Ok(()));
    }

    #[test]
    fn test_sign_bounds() {
        assert_eq!(positive::<BigInt>().check(&BigInt::from(0)), Err(BigInt::from(1)));
        assert_eq!(positive::<BigInt>().check(&big("99999999999999999999")), Ok(()));
        assert_eq!(negative::<BigInt>().check(&BigInt::from(0)), Err(BigInt::from(-1)));
        assert_eq!(negative_or_zero::<BigInt>().check(&BigInt::from(5)), Err(BigInt::from(0)));
    }

    #[test]
    fn test_ordering_bounds() {
        let max = big("10000000000000000000");
        let bound = Bound::at_most(max.clone());
        assert_eq!(bound.check(&big("10000000000000000001")), Err(max));
        assert_eq!(Bound::at_least(BigInt::from(3)).check(&BigInt::from(2)), Err(BigInt::from(3)));
    }
}
