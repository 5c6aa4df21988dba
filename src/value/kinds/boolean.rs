//! Boolean values.

use crate::domain::{ConvertError, ParseError, RawNode};
use crate::value::ValueKind;

/// `true`/`false`, case-insensitive. Stricter than accepting anything non-"true" as false.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolKind;

impl ValueKind for BoolKind {
    type Value = bool;

    fn parse(&self, input: &str) -> Result<bool, ParseError> {
        if input.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if input.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(ParseError::invalid(input, "boolean"))
        }
    }

    /// A stored string spelling of a boolean is readable but gets rewritten as a real boolean.
    fn convert(&self, raw: &RawNode) -> Result<bool, ConvertError<bool>> {
        if let RawNode::Bool(b) = raw {
            return Ok(*b);
        }
        match self.parse(&raw.to_string()) {
            Ok(b) => Err(ConvertError::OutOfBounds(b)),
            Err(_) => Err(ConvertError::Unreadable),
        }
    }
}
