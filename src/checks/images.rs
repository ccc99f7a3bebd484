//! Image integrity
//!
//! Every embedded image needs alt text and a local, relative source that
//! exists on disk next to the README. Remote URLs always fail.

use crate::config::Profile;
use crate::core::model::Violation;
use crate::core::paths::{has_uri_scheme, normalize_path, resolve_relative};
use crate::document::extract::images;
use crate::document::Document;

pub fn check(doc: &Document, _profile: &Profile) -> Vec<Violation> {
    let refs = images(&doc.text);
    if refs.is_empty() {
        return vec![Violation::new("NO_IMAGES", "No images found in README")];
    }

    let mut violations = Vec::new();
    for image in refs {
        if image.alt.trim().is_empty() {
            violations.push(
                Violation::new(
                    "MISSING_ALT_TEXT",
                    format!("Image '{}' should have non-empty alt text", image.src),
                )
                .at_line(image.line),
            );
        }

        if image.src.trim().is_empty() {
            violations.push(
                Violation::new("MISSING_SRC", "Image has no source path").at_line(image.line),
            );
            continue;
        }

        if has_uri_scheme(&image.src) {
            violations.push(
                Violation::new(
                    "REMOTE_IMAGE",
                    format!("Image should use a local relative path, got URL: {}", image.src),
                )
                .at_line(image.line),
            );
            continue;
        }

        let resolved = resolve_relative(doc.base_dir(), &image.src);
        if !resolved.exists() {
            violations.push(
                Violation::new(
                    "IMAGE_NOT_FOUND",
                    format!("Referenced image file not found: {}", normalize_path(&resolved)),
                )
                .at_line(image.line),
            );
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::fixture::{doc, doc_in, GOOD_README};
    use std::fs;
    use tempfile::tempdir;

    fn with_assets() -> tempfile::TempDir {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("assets")).unwrap();
        fs::write(temp.path().join("assets/logo.png"), b"png").unwrap();
        fs::write(temp.path().join("assets/architecture.png"), b"png").unwrap();
        temp
    }

    #[test]
    fn test_good_readme_passes() {
        let temp = with_assets();
        let violations = check(&doc_in(temp.path(), GOOD_README), &Profile::default());
        assert!(violations.is_empty(), "{:?}", violations);
    }

    #[test]
    fn test_missing_file_is_reported_with_line() {
        let temp = with_assets();
        fs::remove_file(temp.path().join("assets/architecture.png")).unwrap();

        let violations = check(&doc_in(temp.path(), GOOD_README), &Profile::default());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, "IMAGE_NOT_FOUND");
        assert!(violations[0].message.contains("assets/architecture.png"));
        assert_eq!(violations[0].line, Some(33));
    }

    #[test]
    fn test_remote_image_always_fails() {
        let temp = with_assets();
        let text = GOOD_README.replace("assets/logo.png", "https://cdn.example.com/logo.png");
        let violations = check(&doc_in(temp.path(), &text), &Profile::default());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, "REMOTE_IMAGE");
        assert_eq!(violations[0].line, Some(2));
    }

    #[test]
    fn test_empty_alt_text() {
        let temp = with_assets();
        let text = GOOD_README.replace("alt=\"NeedyMeds logo\"", "alt=\"  \"");
        let violations = check(&doc_in(temp.path(), &text), &Profile::default());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, "MISSING_ALT_TEXT");
    }

    #[test]
    fn test_markdown_image_resolves_relative_to_readme() {
        let temp = with_assets();
        fs::create_dir(temp.path().join("docs")).unwrap();
        let readme_dir = temp.path().join("docs");
        let text = "![Logo](../assets/logo.png)";
        assert!(check(&doc_in(&readme_dir, text), &Profile::default()).is_empty());
    }

    #[test]
    fn test_no_images() {
        let violations = check(&doc("# plain"), &Profile::default());
        assert_eq!(violations[0].code, "NO_IMAGES");
    }
}
