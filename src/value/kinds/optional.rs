//! Values that may be left blank.

use crate::domain::{Accumulator, Bound, ConvertError, ParseError, RawNode};
use crate::value::ValueKind;

/// Wraps a kind so the value may be absent.
///
/// Empty input and an empty stored string both mean `None`. The inner kind's
/// bounds apply only to present values.
#[derive(Debug, Clone, Default)]
pub struct OptionalKind<K>(pub K);

impl<K: ValueKind> ValueKind for OptionalKind<K> {
    type Value = Option<K::Value>;

    fn parse(&self, input: &str) -> Result<Self::Value, ParseError> {
        if input.trim().is_empty() {
            return Ok(None);
        }
        self.0.parse(input).map(Some)
    }

    fn convert(&self, raw: &RawNode) -> Result<Self::Value, ConvertError<Self::Value>> {
        match raw {
            RawNode::String(s) if s.is_empty() => Ok(None),
            present => self.0.convert(present).map(Some).map_err(|e| e.map(Some)),
        }
    }

    fn bounds(&self) -> Vec<Bound<Self::Value>> {
        self.0.bounds().into_iter().map(Bound::for_some).collect()
    }

    fn validate(&self, acc: Accumulator<Self::Value>) -> Accumulator<Self::Value> {
        acc.repair(|value| match value {
            None => Ok(None),
            Some(inner) => {
                let checked = self.0.validate(Accumulator::new(inner));
                if checked.is_repaired() {
                    Err(Some(checked.into_value()))
                } else {
                    Ok(Some(checked.into_value()))
                }
            }
        })
    }

    fn to_file_node(&self, value: &Self::Value) -> RawNode {
        match value {
            Some(inner) => self.0.to_file_node(inner),
            None => RawNode::String(String::new()),
        }
    }

    /// An absent value formats as the empty string.
    fn format(&self, value: &Self::Value) -> String {
        match value {
            Some(inner) => self.0.format(inner),
            None => String::new(),
        }
    }

    fn is_optional(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Outcome;
    use crate::value::kinds::IntegerKind;

    fn kind() -> OptionalKind<crate::value::Bounded<IntegerKind<i32>>> {
        OptionalKind(IntegerKind::new().with_bounds(vec![Bound::at_most(10)]))
    }

    #[test]
    fn test_parse() {
        assert_eq!(kind().parse(""), Ok(None));
        assert_eq!(kind().parse("  "), Ok(None));
        assert_eq!(kind().parse("4"), Ok(Some(4)));
        assert!(kind().parse("four").is_err());
        assert!(kind().is_optional());
    }

    #[test]
    fn test_convert() {
        assert_eq!(kind().convert(&RawNode::from("")), Ok(None));
        assert_eq!(kind().convert(&RawNode::Int(3)), Ok(Some(3)));
        assert_eq!(
            kind().convert(&RawNode::Float(2.5)),
            Err(ConvertError::OutOfBounds(Some(2)))
        );
        assert_eq!(kind().convert(&RawNode::Bool(true)), Err(ConvertError::Unreadable));
    }

    #[test]
    fn test_bounds_apply_to_present_values() {
        assert_eq!(kind().validate(Accumulator::new(None)).finish(), Outcome::Unchanged(None));
        assert_eq!(
            kind().validate(Accumulator::new(Some(50))).finish(),
            Outcome::Replaced(Some(10))
        );
        assert_eq!(kind().bounds().len(), 1);
    }

    #[test]
    fn test_store_and_format() {
        assert_eq!(kind().to_file_node(&None), RawNode::from(""));
        assert_eq!(kind().to_file_node(&Some(7)), RawNode::Int(7));
        assert_eq!(kind().format(&None), "");
        assert_eq!(kind().format(&Some(7)), "7");
    }
}
