//! Dotted path validation.

use crate::domain::ConfigError;

/// Validate a dotted key path such as `server.limits.max-players`.
pub fn validate_path(path: &str) -> Result<(), ConfigError> {
    let invalid = |reason| ConfigError::InvalidPath {
        path: path.to_string(),
        reason,
    };

    if path.is_empty() {
        return Err(invalid("path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid("contains null character"));
    }

    if path.split('.').any(str::is_empty) {
        return Err(invalid("contains an empty segment"));
    }

    Ok(())
}
