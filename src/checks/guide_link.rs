//! External engineer guide link
//!
//! The first markdown link whose label contains the guide label must look like
//! `https://<host>/document/d/<id>/edit...`. Only the URL shape is checked;
//! nothing is fetched.

use crate::config::Profile;
use crate::core::model::Violation;
use crate::document::extract::links;
use crate::document::Document;

pub fn check(doc: &Document, profile: &Profile) -> Vec<Violation> {
    let Some(link) = links(&doc.text)
        .into_iter()
        .find(|link| link.label.contains(&profile.guide_label))
    else {
        return vec![Violation::new(
            "GUIDE_LINK_NOT_FOUND",
            format!("{} link not found", profile.guide_label),
        )];
    };

    let url = link.url.as_str();
    let mut violations = Vec::new();

    if !url.starts_with("https://") {
        violations.push(
            Violation::new(
                "INSECURE_GUIDE_LINK",
                format!("{} link must use HTTPS: {}", profile.guide_label, url),
            )
            .at_line(link.line),
        );
    }

    let document_root = format!("{}/document", profile.guide_host);
    if !url.contains(&document_root) {
        violations.push(
            Violation::new(
                "GUIDE_LINK_WRONG_HOST",
                format!(
                    "{} link should be a document on {}: {}",
                    profile.guide_label, profile.guide_host, url
                ),
            )
            .at_line(link.line),
        );
    }

    if !(url.contains("/document/d/") && url.contains("/edit")) {
        violations.push(
            Violation::new(
                "GUIDE_LINK_NOT_CANONICAL",
                format!(
                    "{} link does not look like a canonical document URL (/document/d/<id>/edit): {}",
                    profile.guide_label, url
                ),
            )
            .at_line(link.line),
        );
    }

    violations
}
