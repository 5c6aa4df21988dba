//! Bounds for string values.

use regex::Regex;

use crate::domain::Bound;

/// Replaces the value with its lowercase form unless it already is one.
pub fn lowercase() -> Bound<String> {
    Bound::requiring(|s: &String| *s == s.to_lowercase(), |s| s.to_lowercase()).named("lowercase")
}

/// Replaces the value with its uppercase form unless it already is one.
pub fn uppercase() -> Bound<String> {
    Bound::requiring(|s: &String| *s == s.to_uppercase(), |s| s.to_uppercase()).named("uppercase")
}

/// Strips every whitespace character.
pub fn no_spaces() -> Bound<String> {
    Bound::disallowing(
        |s: &String| s.chars().any(char::is_whitespace),
        |s| s.chars().filter(|c| !c.is_whitespace()).collect(),
    )
    .named("no_spaces")
}

/// Truncates to `length` characters.
pub fn max_length(length: usize) -> Bound<String> {
    Bound::requiring(
        move |s: &String| s.chars().count() <= length,
        move |s| s.chars().take(length).collect(),
    )
    .named("max_length")
}

/// Requires a match of `pattern` somewhere in the value; otherwise `fallback` is used.
///
/// # Errors
///
/// Returns error if the pattern is not a valid regex.
pub fn matching(pattern: &str, fallback: impl Into<String>) -> Result<Bound<String>, regex::Error> {
    let regex = Regex::new(pattern)?;
    let fallback = fallback.into();
    Ok(Bound::requiring(move |s: &String| regex.is_match(s), move |_| fallback.clone()).named("matching"))
}
