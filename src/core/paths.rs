//! Path normalization utilities
//!
//! Ensures all emitted paths use '/' as separator and are relative to root.

use std::path::{Component, Path, PathBuf};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Display form of `path`: relative to root when possible, otherwise as given
pub fn display_relative(path: &Path, root: &Path) -> String {
    make_relative(path, root).unwrap_or_else(|| normalize_path(path))
}

/// Join a '/'-separated relative reference onto `base` and fold `.`/`..`
/// lexically, without touching the filesystem
pub fn resolve_relative(base: &Path, reference: &str) -> PathBuf {
    let joined = base.join(reference.replace('/', std::path::MAIN_SEPARATOR_STR));
    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component.as_os_str());
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Check if a reference carries a URI scheme (`https://`, `ftp://`, ...)
pub fn has_uri_scheme(reference: &str) -> bool {
    match reference.split_once("://") {
        Some((scheme, _)) => {
            !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        let path = Path::new("docs/README.md");
        assert_eq!(normalize_path(path), "docs/README.md");
    }

    #[test]
    fn test_make_relative() {
        let root = Path::new("/project");
        let path = Path::new("/project/README.md");
        assert_eq!(make_relative(path, root), Some("README.md".to_string()));
    }

    #[test]
    fn test_make_relative_not_under_root() {
        let root = Path::new("/project");
        let path = Path::new("/other/README.md");
        assert_eq!(make_relative(path, root), None);
        assert_eq!(display_relative(path, root), "/other/README.md");
    }

    #[test]
    fn test_resolve_relative_folds_dots() {
        let base = Path::new("/project/docs");
        assert_eq!(
            resolve_relative(base, "../assets/./logo.png"),
            PathBuf::from("/project/assets/logo.png")
        );
    }

    #[test]
    fn test_has_uri_scheme() {
        assert!(has_uri_scheme("https://example.com/a.png"));
        assert!(has_uri_scheme("ftp://host/file"));
        assert!(!has_uri_scheme("assets/logo.png"));
        assert!(!has_uri_scheme("./a://b"));
        assert!(!has_uri_scheme("//cdn.example.com/a.png"));
    }
}
