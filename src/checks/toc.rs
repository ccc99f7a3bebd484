//! Section anchors, table of contents and headings
//!
//! Each required id needs an `<a id>` anchor in the body and an `href="#id"`
//! inside the `<details>` TOC block. Section labels need `##` headings.

use crate::config::Profile;
use crate::core::model::Violation;
use crate::document::extract::{anchor_ids, has_details_wrapper, has_heading, summary_regex, toc_ids};
use crate::document::Document;

pub fn check(doc: &Document, profile: &Profile) -> Vec<Violation> {
    let mut violations = Vec::new();

    let summary = match summary_regex(&profile.toc_summary) {
        Ok(re) => Some(re),
        Err(err) => {
            violations.push(Violation::new(
                "INVALID_PATTERN",
                format!("Cannot build TOC summary pattern: {}", err),
            ));
            None
        }
    };

    let anchors = anchor_ids(&doc.text);
    let toc = summary
        .as_ref()
        .map(|re| toc_ids(&doc.text, re))
        .unwrap_or_default();

    for id in &profile.required_ids {
        if !toc.contains(id) {
            violations.push(Violation::new(
                "MISSING_TOC_ENTRY",
                format!("TOC is missing anchor: {}", id),
            ));
        }
    }
    for id in &profile.required_ids {
        if !anchors.contains(id) {
            violations.push(Violation::new(
                "MISSING_ANCHOR",
                format!("Section anchor missing: {}", id),
            ));
        }
    }

    for label in &profile.section_labels {
        if !has_heading(&doc.text, label) {
            violations.push(Violation::new(
                "MISSING_HEADING",
                format!("Missing expected section heading: {}", label),
            ));
        }
    }

    if !has_details_wrapper(&doc.text) {
        violations.push(Violation::new(
            "MISSING_DETAILS",
            "Missing <details> wrapper around the table of contents",
        ));
    }
    if let Some(re) = &summary {
        if !re.is_match(&doc.text) {
            violations.push(Violation::new(
                "MISSING_TOC_SUMMARY",
                format!("Missing or malformed <summary>{}</summary>", profile.toc_summary),
            ));
        }
    }

    violations
}
