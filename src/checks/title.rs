//! Title and intro presence

use crate::config::Profile;
use crate::core::model::Violation;
use crate::document::Document;

pub fn check(doc: &Document, profile: &Profile) -> Vec<Violation> {
    let mut violations = Vec::new();

    let title_found = doc
        .text
        .lines()
        .take(profile.title_window)
        .any(|line| line.trim().contains(&profile.title));
    if !title_found {
        violations.push(Violation::new(
            "MISSING_TITLE",
            format!(
                "Missing or incorrect title: expected '{}' within the first {} lines",
                profile.title, profile.title_window
            ),
        ));
    }

    for fact in &profile.intro_facts {
        if !doc.text.contains(fact.as_str()) {
            violations.push(Violation::new(
                "MISSING_INTRO_FACT",
                format!("Intro should mention '{}'", fact),
            ));
        }
    }

    violations
}
