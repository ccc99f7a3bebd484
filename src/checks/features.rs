//! Core feature list

use crate::config::Profile;
use crate::core::model::Violation;
use crate::document::extract::{feature_item_count, phrase_regex};
use crate::document::Document;

pub fn check(doc: &Document, profile: &Profile) -> Vec<Violation> {
    let mut violations = Vec::new();

    for item in &profile.feature_items {
        if !doc.text.contains(item.as_str()) {
            violations.push(Violation::new(
                "MISSING_FEATURE",
                format!("Missing core feature item: {}", item),
            ));
        }
    }

    let count = feature_item_count(&doc.text);
    if count < profile.min_feature_items {
        violations.push(Violation::new(
            "TOO_FEW_FEATURE_ITEMS",
            format!(
                "Expected at least {} core feature items, found {}",
                profile.min_feature_items, count
            ),
        ));
    }

    match phrase_regex(&profile.feature_phrase) {
        Ok(re) => {
            if !re.is_match(&doc.text) {
                violations.push(Violation::new(
                    "MISSING_PHRASE",
                    format!("Feature list should mention '{}'", profile.feature_phrase),
                ));
            }
        }
        Err(err) => violations.push(Violation::new(
            "INVALID_PATTERN",
            format!("Cannot build phrase pattern: {}", err),
        )),
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::fixture::{doc, GOOD_README};

    #[test]
    fn test_good_readme_passes() {
        assert!(check(&doc(GOOD_README), &Profile::default()).is_empty());
    }

    #[test]
    fn test_missing_feature_is_named() {
        let text = GOOD_README.replace("Digital DDC Card", "Digital Card");
        let violations = check(&doc(&text), &Profile::default());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, "MISSING_FEATURE");
        assert!(violations[0].message.ends_with("Digital DDC Card"));
    }

    #[test]
    fn test_plain_list_items_are_too_few() {
        let text = GOOD_README.replace("<li><b>", "<li>");
        let violations = check(&doc(&text), &Profile::default());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, "TOO_FEW_FEATURE_ITEMS");
        assert!(violations[0].message.contains("found 0"));
    }

    #[test]
    fn test_phrase_spacing_and_case_are_flexible() {
        let text = GOOD_README.replace("updated weekly", "Updated\n    Weekly");
        assert!(check(&doc(&text), &Profile::default()).is_empty());
    }

    #[test]
    fn test_missing_phrase() {
        let text = GOOD_README.replace("updated weekly", "updated monthly");
        let violations = check(&doc(&text), &Profile::default());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, "MISSING_PHRASE");
    }

    #[test]
    fn test_custom_minimum() {
        let profile = Profile {
            min_feature_items: 5,
            ..Profile::default()
        };
        let violations = check(&doc(GOOD_README), &profile);
        assert_eq!(violations[0].code, "TOO_FEW_FEATURE_ITEMS");
    }
}
