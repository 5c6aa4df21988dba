//! Bounds for filesystem paths.

use std::env;
use std::path::{Path, PathBuf};

use crate::domain::Bound;

/// Relative paths are resolved against the current directory.
pub fn absolute() -> Bound<PathBuf> {
    Bound::requiring(
        |p: &PathBuf| p.is_absolute(),
        |p| env::current_dir().map(|dir| dir.join(p)).unwrap_or_else(|_| p.clone()),
    )
    .named("absolute")
}

/// Paths outside `base` are re-rooted under it.
pub fn starts_with(base: impl Into<PathBuf>) -> Bound<PathBuf> {
    let base = base.into();
    let root = base.clone();
    Bound::requiring(move |p: &PathBuf| p.starts_with(&base), move |p| root.join(p)).named("starts_with")
}

/// Appends `end` to paths that do not already end with it.
pub fn ends_with(end: impl Into<PathBuf>) -> Bound<PathBuf> {
    let end = end.into();
    let suffix = end.clone();
    Bound::requiring(move |p: &PathBuf| p.ends_with(&end), move |p| p.join(&suffix)).named("ends_with")
}

/// Paths that are not an existing directory are replaced by their parent.
pub fn is_directory() -> Bound<PathBuf> {
    Bound::requiring(
        |p: &PathBuf| p.is_dir(),
        |p| p.parent().map(Path::to_path_buf).unwrap_or_else(|| p.clone()),
    )
    .named("is_directory")
}

/// Requires the file name to end in `.{extension}`; otherwise the extension is appended.
pub fn has_extension(extension: &str) -> Bound<PathBuf> {
    let suffix = format!(".{extension}");
    let appended = suffix.clone();
    Bound::requiring(
        move |p: &PathBuf| p.to_string_lossy().ends_with(&suffix),
        move |p| {
            let mut name = p.file_name().map(|n| n.to_os_string()).unwrap_or_default();
            name.push(&appended);
            p.with_file_name(name)
        },
    )
    .named("has_extension")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute() {
        let bound = absolute();
        let rooted = env::temp_dir();
        assert_eq!(bound.check(&rooted), Ok(()));

        let repaired = bound.check(&PathBuf::from("data/file.db")).unwrap_err();
        assert!(repaired.is_absolute());
        assert!(repaired.ends_with("data/file.db"));
    }

    #[test]
    fn test_starts_with() {
        let bound = starts_with("plugins");
        assert_eq!(bound.check(&PathBuf::from("plugins/a.yml")), Ok(()));
        assert_eq!(
            bound.check(&PathBuf::from("a.yml")),
            Err(PathBuf::from("plugins/a.yml"))
        );
    }

    #[test]
    fn test_ends_with() {
        let bound = ends_with("backups");
        assert_eq!(bound.check(&PathBuf::from("data/backups")), Ok(()));
        assert_eq!(
            bound.check(&PathBuf::from("data")),
            Err(PathBuf::from("data/backups"))
        );
    }

    #[test]
    fn test_is_directory() {
        let dir = tempfile::tempdir().unwrap();
        let bound = is_directory();
        assert_eq!(bound.check(&dir.path().to_path_buf()), Ok(()));

        let file = dir.path().join("missing.txt");
        assert_eq!(bound.check(&file), Err(dir.path().to_path_buf()));
    }

    #[test]
    fn test_has_extension() {
        let bound = has_extension("yml");
        assert_eq!(bound.check(&PathBuf::from("conf/config.yml")), Ok(()));
        assert_eq!(
            bound.check(&PathBuf::from("conf/config")),
            Err(PathBuf::from("conf/config.yml"))
        );
        assert_eq!(
            bound.check(&PathBuf::from("conf/config.yaml")),
            Err(PathBuf::from("conf/config.yaml.yml"))
        );
    }
}
