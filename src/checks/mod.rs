//! Checks module - Independent predicates over the loaded README
//!
//! Every check receives the same immutable `Document` and `Profile` and
//! returns the list of violated expectations. An empty list means pass.
//! Checks never depend on each other; all of them run on every invocation.

pub mod contact;
pub mod features;
pub mod guide_link;
pub mod images;
pub mod title;
pub mod toc;

use crate::config::Profile;
use crate::core::model::{ResultItem, Violation};
use crate::document::Document;

/// Signature shared by all checks
pub type CheckFn = fn(&Document, &Profile) -> Vec<Violation>;

/// A registered check
#[derive(Clone, Copy)]
pub struct CheckSpec {
    pub id: &'static str,
    pub description: &'static str,
    pub run: CheckFn,
}

/// All checks, in reporting order
pub const CHECKS: &[CheckSpec] = &[
    CheckSpec {
        id: "title-intro",
        description: "Title near the top and key intro facts",
        run: title::check,
    },
    CheckSpec {
        id: "sections-toc",
        description: "Section anchors, TOC entries and headings agree",
        run: toc::check,
    },
    CheckSpec {
        id: "core-features",
        description: "Core feature items and phrasing",
        run: features::check,
    },
    CheckSpec {
        id: "images",
        description: "Images have alt text and resolve to local files",
        run: images::check,
    },
    CheckSpec {
        id: "guide-link",
        description: "Engineer guide link is a secure canonical document URL",
        run: guide_link::check,
    },
    CheckSpec {
        id: "contact-emails",
        description: "Contact section emails are well formed",
        run: contact::check,
    },
];

/// Outcome of one check
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub id: &'static str,
    pub description: &'static str,
    pub violations: Vec<Violation>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn to_result_item(&self, doc: &Document) -> ResultItem {
        ResultItem::check(
            self.id,
            doc.rel_path.clone(),
            self.description,
            self.violations.clone(),
        )
    }
}

/// Look up a check by id
pub fn find(id: &str) -> Option<&'static CheckSpec> {
    CHECKS.iter().find(|spec| spec.id == id)
}

/// Ids of every registered check
pub fn ids() -> Vec<&'static str> {
    CHECKS.iter().map(|spec| spec.id).collect()
}

/// Run one check
pub fn run_one(spec: &CheckSpec, doc: &Document, profile: &Profile) -> CheckReport {
    let violations = (spec.run)(doc, profile);
    tracing::debug!(
        check = spec.id,
        violations = violations.len(),
        "check finished"
    );
    CheckReport {
        id: spec.id,
        description: spec.description,
        violations,
    }
}

/// Run the selected checks (all of them when `only` is empty)
pub fn run_checks(doc: &Document, profile: &Profile, only: &[&CheckSpec]) -> Vec<CheckReport> {
    if only.is_empty() {
        CHECKS
            .iter()
            .map(|spec| run_one(spec, doc, profile))
            .collect()
    } else {
        only.iter()
            .map(|spec| run_one(spec, doc, profile))
            .collect()
    }
}
