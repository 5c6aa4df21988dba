//! Filesystem path values.

use std::path::PathBuf;

use crate::domain::{ConvertError, ParseError, RawNode};
use crate::value::ValueKind;

/// A filesystem path, stored as a string.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathKind;

impl ValueKind for PathKind {
    type Value = PathBuf;

    fn parse(&self, input: &str) -> Result<PathBuf, ParseError> {
        if input.contains('\0') {
            return Err(ParseError::invalid(input, "path"));
        }
        Ok(PathBuf::from(input))
    }

    fn convert(&self, raw: &RawNode) -> Result<PathBuf, ConvertError<PathBuf>> {
        if !raw.is_scalar() {
            return Err(ConvertError::Unreadable);
        }
        self.parse(&raw.to_string())
            .map_err(|_| ConvertError::Unreadable)
    }

    fn to_file_node(&self, value: &PathBuf) -> RawNode {
        RawNode::String(value.to_string_lossy().into_owned())
    }
}
