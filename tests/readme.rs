//! README integrity tests
//!
//! One test per check, run against the sample app under `tests/fixtures/ddc_app`
//! and against broken copies of it. The checks cover:
//! - Section anchors, headings and the table of contents
//! - Local image assets and alt text
//! - The engineer guide link format
//! - Contact email validity
//! - Core feature items and key phrases

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("ddc_app")
}

fn fixture_readme() -> String {
    fs::read_to_string(fixture_root().join("README.md")).expect("fixture README")
}

/// Copy of the fixture app whose README has been rewritten by `edit`
fn broken_copy(edit: impl FnOnce(String) -> String) -> TempDir {
    let temp = tempdir().unwrap();
    let assets = temp.path().join("assets");
    fs::create_dir(&assets).unwrap();
    for entry in fs::read_dir(fixture_root().join("assets")).unwrap() {
        let entry = entry.unwrap();
        fs::copy(entry.path(), assets.join(entry.file_name())).unwrap();
    }
    fs::write(temp.path().join("README.md"), edit(fixture_readme())).unwrap();
    temp
}

/// Run a single check and return (exit success, result item)
fn run_check(root: &Path, id: &str) -> (bool, Value) {
    let output = Command::new(assert_cmd::cargo::cargo_bin!("readmecheck"))
        .arg("--root")
        .arg(root)
        .arg("check")
        .arg("--only")
        .arg(id)
        .output()
        .expect("failed to execute");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout
        .lines()
        .find(|l| !l.trim().is_empty())
        .expect("one result line");
    let item: Value = serde_json::from_str(line).expect("valid jsonl line");
    (output.status.success(), item)
}

fn violation_codes(item: &Value) -> Vec<String> {
    item.get("violations")
        .and_then(|v| v.as_array())
        .map(|vs| {
            vs.iter()
                .filter_map(|v| v.get("code").and_then(|c| c.as_str()))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn violation_messages(item: &Value) -> Vec<String> {
    item.get("violations")
        .and_then(|v| v.as_array())
        .map(|vs| {
            vs.iter()
                .filter_map(|v| v.get("message").and_then(|c| c.as_str()))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn assert_passes(id: &str) {
    let (ok, item) = run_check(&fixture_root(), id);
    assert!(ok, "check {} failed: {}", id, item);
    assert_eq!(item["check"], id);
    assert_eq!(item["status"], "pass");
}

#[test]
fn title_and_intro_present() {
    assert_passes("title-intro");
}

#[test]
fn sections_and_toc_anchors_consistent() {
    assert_passes("sections-toc");
}

#[test]
fn core_features_items_present_and_count() {
    assert_passes("core-features");
}

#[test]
fn images_exist_have_alt_text_and_use_relative_paths() {
    assert_passes("images");
}

#[test]
fn engineer_guide_link_is_secure_google_doc() {
    assert_passes("guide-link");
}

#[test]
fn contact_table_contains_valid_emails() {
    assert_passes("contact-emails");
}

#[test]
fn anchor_without_toc_entry_fails_naming_the_id() {
    let temp = broken_copy(|readme| {
        readme.replace(
            r##"<li><a href="#core-features">Core Features</a></li>"##,
            "",
        )
    });

    let (ok, item) = run_check(temp.path(), "sections-toc");
    assert!(!ok);
    assert_eq!(item["status"], "fail");
    assert_eq!(violation_codes(&item), vec!["MISSING_TOC_ENTRY"]);
    assert!(violation_messages(&item)[0].contains("core-features"));
}

#[test]
fn remote_image_source_fails() {
    let temp = broken_copy(|readme| {
        readme.replace("assets/logo.svg", "https://cdn.example.com/logo.svg")
    });

    let (ok, item) = run_check(temp.path(), "images");
    assert!(!ok);
    assert_eq!(violation_codes(&item), vec!["REMOTE_IMAGE"]);
}

#[test]
fn deleted_image_asset_fails() {
    let temp = broken_copy(|readme| readme);
    fs::remove_file(temp.path().join("assets/architecture.svg")).unwrap();

    let (ok, item) = run_check(temp.path(), "images");
    assert!(!ok);
    assert_eq!(violation_codes(&item), vec!["IMAGE_NOT_FOUND"]);
    assert!(violation_messages(&item)[0].contains("architecture.svg"));
}

#[test]
fn insecure_guide_link_fails() {
    let temp = broken_copy(|readme| {
        readme.replace(
            "https://docs.google.com/document/d/",
            "http://docs.google.com/document/d/",
        )
    });

    let (ok, item) = run_check(temp.path(), "guide-link");
    assert!(!ok);
    assert_eq!(violation_codes(&item), vec!["INSECURE_GUIDE_LINK"]);
}

#[test]
fn email_with_non_alphabetic_tld_fails() {
    let temp =
        broken_copy(|readme| readme.replace("sam.roe@needymeds.org", "sam.roe@needymeds.o_"));

    let (ok, item) = run_check(temp.path(), "contact-emails");
    assert!(!ok);
    assert_eq!(violation_codes(&item), vec!["INVALID_EMAIL"]);
    assert!(violation_messages(&item)[0].contains("sam.roe@needymeds.o_"));
}

#[test]
fn email_without_top_level_segment_fails() {
    let temp = broken_copy(|readme| readme.replace("sam.roe@needymeds.org", "foo@bar"));

    let (ok, item) = run_check(temp.path(), "contact-emails");
    assert!(!ok);
    assert_eq!(violation_codes(&item), vec!["INVALID_EMAIL"]);
    assert_eq!(
        violation_messages(&item),
        vec!["Invalid email format detected: foo@bar"]
    );
}

#[test]
fn missing_readme_is_skipped_not_failed() {
    let temp = tempdir().unwrap();

    let (ok, item) = run_check(temp.path(), "title-intro");
    assert!(ok);
    assert_eq!(item["kind"], "skip");
    assert_eq!(item["status"], "skip");
}
