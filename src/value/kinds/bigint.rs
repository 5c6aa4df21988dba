//! Arbitrary-precision integer values.

use std::str::FromStr;

use num_bigint::BigInt;

use crate::domain::ParseError;
use crate::value::ValueKind;

/// Integers of any size. Values that fit `i64` are stored as integer nodes,
/// larger ones as their decimal text.
#[derive(Debug, Clone, Copy, Default)]
pub struct BigIntKind;

impl ValueKind for BigIntKind {
    type Value = BigInt;

    fn parse(&self, input: &str) -> Result<BigInt, ParseError> {
        BigInt::from_str(input).map_err(|_| ParseError::invalid(input, "big integer"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigStore, MemoryStore};
    use crate::domain::{Bound, ConvertError, RawNode};
    use crate::value::{LoadStatus, TypedValue};

    const HUGE: &str = "123456789012345678901234567890";

    #[test]
    fn test_parse() {
        assert_eq!(BigIntKind.parse("-17"), Ok(BigInt::from(-17)));
        assert_eq!(BigIntKind.parse(HUGE).unwrap().to_string(), HUGE);
        assert_eq!(
            BigIntKind.parse("1.5"),
            Err(ParseError::invalid("1.5", "big integer"))
        );
    }

    #[test]
    fn test_convert() {
        assert_eq!(BigIntKind.convert(&RawNode::Int(5)), Ok(BigInt::from(5)));
        assert_eq!(
            BigIntKind.convert(&RawNode::from(HUGE)),
            Ok(BigIntKind.parse(HUGE).unwrap())
        );
        assert_eq!(BigIntKind.convert(&RawNode::Float(2.5)), Err(ConvertError::Unreadable));
    }

    #[test]
    fn test_large_value_stays_intact_as_string() {
        let mut store = MemoryStore::new().with("supply", HUGE);
        let value = TypedValue::new(BigIntKind, "supply", BigInt::default(), &mut store).unwrap();

        assert_eq!(value.last_load(), LoadStatus::Intact);
        assert_eq!(value.to_string(), HUGE);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_set_clamps_and_narrows() {
        let mut store = MemoryStore::new();
        let kind = BigIntKind.with_bounds(vec![Bound::at_most(BigInt::from(1000))]);
        let mut value = TypedValue::new(kind, "cap", BigInt::from(10), &mut store).unwrap();

        assert_eq!(value.parse_and_set(&mut store, HUGE), Ok(true));
        assert_eq!(value.get(), &BigInt::from(1000));
        assert_eq!(store.get_raw("cap"), Some(RawNode::Int(1000)));
    }
}
