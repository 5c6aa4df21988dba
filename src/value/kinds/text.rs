//! String, character and named-choice values.

use crate::domain::{ConvertError, ParseError, RawNode};
use crate::value::ValueKind;

/// Free text. Any stored scalar is read through its string form.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringKind;

impl ValueKind for StringKind {
    type Value = String;

    fn parse(&self, input: &str) -> Result<String, ParseError> {
        Ok(input.to_string())
    }

    fn convert(&self, raw: &RawNode) -> Result<String, ConvertError<String>> {
        match raw {
            RawNode::String(s) => Ok(s.clone()),
            RawNode::List(_) | RawNode::Table(_) => Err(ConvertError::Unreadable),
            scalar => Ok(scalar.to_string()),
        }
    }
}

/// A single character.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharKind;

impl ValueKind for CharKind {
    type Value = char;

    fn parse(&self, input: &str) -> Result<char, ParseError> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(ParseError::invalid(input, "character")),
        }
    }

    /// Longer stored text is cut to its first character.
    fn convert(&self, raw: &RawNode) -> Result<char, ConvertError<char>> {
        if !raw.is_scalar() {
            return Err(ConvertError::Unreadable);
        }
        let text = raw.to_string();
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(ConvertError::Unreadable),
            (Some(c), None) => Ok(c),
            (Some(c), Some(_)) => Err(ConvertError::OutOfBounds(c)),
        }
    }
}

/// One of a fixed set of names, matched case-insensitively.
///
/// Values are always the canonical spelling; a stored variant spelling is repaired.
#[derive(Debug, Clone)]
pub struct ChoiceKind {
    choices: Vec<String>,
}

impl ChoiceKind {
    pub fn new<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    fn lookup(&self, input: &str) -> Option<&String> {
        let wanted = input.trim();
        self.choices
            .iter()
            .find(|choice| choice.eq_ignore_ascii_case(wanted))
    }
}

impl ValueKind for ChoiceKind {
    type Value = String;

    fn parse(&self, input: &str) -> Result<String, ParseError> {
        self.lookup(input)
            .cloned()
            .ok_or_else(|| ParseError::UnknownChoice {
                input: input.to_string(),
                choices: self.choices.clone(),
            })
    }

    fn convert(&self, raw: &RawNode) -> Result<String, ConvertError<String>> {
        let RawNode::String(stored) = raw else {
            return Err(ConvertError::Unreadable);
        };
        match self.lookup(stored) {
            Some(choice) if choice == stored => Ok(choice.clone()),
            Some(choice) => Err(ConvertError::OutOfBounds(choice.clone())),
            None => Err(ConvertError::Unreadable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_convert() {
        assert_eq!(StringKind.convert(&RawNode::from("hi")), Ok("hi".to_string()));
        assert_eq!(StringKind.convert(&RawNode::Int(5)), Ok("5".to_string()));
        assert_eq!(StringKind.convert(&RawNode::Bool(true)), Ok("true".to_string()));
        assert_eq!(
            StringKind.convert(&RawNode::List(Vec::new())),
            Err(ConvertError::Unreadable)
        );
    }

    #[test]
    fn test_string_round_trip() {
        let text = "Welcome, traveller!".to_string();
        assert_eq!(StringKind.parse(&StringKind.format(&text)), Ok(text));
    }

    #[test]
    fn test_char_parse() {
        assert_eq!(CharKind.parse("$"), Ok('$'));
        assert_eq!(CharKind.parse("é"), Ok('é'));
        assert!(CharKind.parse("").is_err());
        assert!(CharKind.parse("ab").is_err());
    }

    #[test]
    fn test_char_convert() {
        assert_eq!(CharKind.convert(&RawNode::from("x")), Ok('x'));
        assert_eq!(CharKind.convert(&RawNode::from("xyz")), Err(ConvertError::OutOfBounds('x')));
        assert_eq!(CharKind.convert(&RawNode::from("")), Err(ConvertError::Unreadable));
        assert_eq!(CharKind.convert(&RawNode::Int(7)), Ok('7'));
        assert_eq!(CharKind.to_file_node(&'x'), RawNode::from("x"));
    }

    #[test]
    fn test_choice() {
        let kind = ChoiceKind::new(["Survival", "Creative", "Adventure"]);
        assert_eq!(kind.parse("creative"), Ok("Creative".to_string()));
        assert!(matches!(
            kind.parse("hardcore"),
            Err(ParseError::UnknownChoice { .. })
        ));

        assert_eq!(kind.convert(&RawNode::from("Survival")), Ok("Survival".to_string()));
        assert_eq!(
            kind.convert(&RawNode::from("SURVIVAL")),
            Err(ConvertError::OutOfBounds("Survival".to_string()))
        );
        assert_eq!(kind.convert(&RawNode::from("spectator")), Err(ConvertError::Unreadable));
        assert_eq!(kind.convert(&RawNode::Int(1)), Err(ConvertError::Unreadable));
        assert_eq!(kind.choices().len(), 3);
    }
}
