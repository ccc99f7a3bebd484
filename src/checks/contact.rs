//! Contact section emails
//!
//! Only the text after the first `## ... Contact ...` heading is scanned, so
//! addresses elsewhere in the README do not count.

use crate::config::Profile;
use crate::core::model::Violation;
use crate::document::extract::{email_tokens, is_valid_email, section_after_heading};
use crate::document::Document;

pub fn check(doc: &Document, profile: &Profile) -> Vec<Violation> {
    let Some((offset, body)) = section_after_heading(&doc.text, &profile.contact_label) else {
        return vec![Violation::new(
            "CONTACT_SECTION_NOT_FOUND",
            format!("{} section not found", profile.contact_label),
        )];
    };

    let tokens = email_tokens(&doc.text, offset, body);
    if tokens.is_empty() {
        return vec![Violation::new(
            "NO_CONTACT_EMAILS",
            format!("No email addresses found in {} section", profile.contact_label),
        )
        .at_line(doc.line_at(offset))];
    }

    tokens
        .into_iter()
        .filter(|token| !is_valid_email(&token.address))
        .map(|token| {
            Violation::new(
                "INVALID_EMAIL",
                format!("Invalid email format detected: {}", token.address),
            )
            .at_line(token.line)
        })
        .collect()
}
