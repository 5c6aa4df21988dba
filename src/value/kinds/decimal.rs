//! Arbitrary-precision decimal values.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::ParseError;
use crate::value::ValueKind;

/// Decimal values. Accepts plain (`12.50`) and scientific (`1.25e1`) notation.
///
/// Stored as an integer or float node when that loses nothing, otherwise as a string.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalKind;

impl ValueKind for DecimalKind {
    type Value = Decimal;

    fn parse(&self, input: &str) -> Result<Decimal, ParseError> {
        Decimal::from_str(input)
            .or_else(|_| Decimal::from_scientific(input))
            .map_err(|_| ParseError::invalid(input, "decimal"))
    }

    fn format(&self, value: &Decimal) -> String {
        value.to_string()
    }
}
