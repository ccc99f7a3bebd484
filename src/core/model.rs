//! Unified Result Model
//!
//! Every command maps its outcome to this model before rendering output.

use serde::{Deserialize, Serialize};

/// The kind of result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Check,
    Document,
    Skip,
    Info,
}

/// Outcome of a result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Fail,
    Skip,
}

/// Metadata for a result item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    /// File size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Content hash (XXH3)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    /// Whether invalid UTF-8 was replaced while decoding
    #[serde(default)]
    pub lossy: bool,
}

/// A single violated expectation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub code: String,
    pub message: String,

    /// 1-indexed line of the offending markup, when it has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl Violation {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            line: None,
        }
    }

    pub fn at_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }
}

/// The unified result item that all commands must produce
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    /// The kind of this result
    pub kind: Kind,

    /// Check identifier (for check results)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<String>,

    pub status: Status,

    /// Path relative to root, using '/' as separator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Human-readable summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Structured data payload (used by `inspect` and `list`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    pub meta: Meta,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

impl ResultItem {
    /// Create a check result; the status follows from the violations
    pub fn check(
        id: impl Into<String>,
        path: impl Into<String>,
        description: impl Into<String>,
        violations: Vec<Violation>,
    ) -> Self {
        let status = if violations.is_empty() {
            Status::Pass
        } else {
            Status::Fail
        };
        Self {
            kind: Kind::Check,
            check: Some(id.into()),
            status,
            path: Some(path.into()),
            excerpt: Some(description.into()),
            data: None,
            meta: Meta::default(),
            violations,
        }
    }

    /// Create a located-document result
    pub fn document(path: impl Into<String>, meta: Meta) -> Self {
        Self {
            kind: Kind::Document,
            check: None,
            status: Status::Pass,
            path: Some(path.into()),
            excerpt: None,
            data: None,
            meta,
            violations: Vec::new(),
        }
    }

    /// Create a skipped result
    pub fn skip(reason: impl Into<String>) -> Self {
        Self {
            kind: Kind::Skip,
            check: None,
            status: Status::Skip,
            path: None,
            excerpt: Some(reason.into()),
            data: None,
            meta: Meta::default(),
            violations: Vec::new(),
        }
    }

    /// Create an informational result
    pub fn info(excerpt: impl Into<String>) -> Self {
        Self {
            kind: Kind::Info,
            check: None,
            status: Status::Pass,
            path: None,
            excerpt: Some(excerpt.into()),
            data: None,
            meta: Meta::default(),
            violations: Vec::new(),
        }
    }

    /// Set structured data payload
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Set the check identifier
    pub fn with_check(mut self, id: impl Into<String>) -> Self {
        self.check = Some(id.into());
        self
    }

    pub fn is_failure(&self) -> bool {
        self.status == Status::Fail
    }
}

/// Result set containing multiple result items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    /// Whether any item failed
    pub fn has_failures(&self) -> bool {
        self.items.iter().any(ResultItem::is_failure)
    }

    /// Count of items with the given status
    pub fn count(&self, status: Status) -> usize {
        self.items.iter().filter(|i| i.status == status).count()
    }
}

impl IntoIterator for ResultSet {
    type Item = ResultItem;
    type IntoIter = std::vec::IntoIter<ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<ResultItem> for ResultSet {
    fn from_iter<T: IntoIterator<Item = ResultItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_item_passes_without_violations() {
        let item = ResultItem::check("images", "README.md", "Images resolve", Vec::new());
        assert_eq!(item.kind, Kind::Check);
        assert_eq!(item.status, Status::Pass);
        assert_eq!(item.check.as_deref(), Some("images"));
        assert!(!item.is_failure());
    }

    #[test]
    fn test_check_item_fails_with_violations() {
        let item = ResultItem::check(
            "sections-toc",
            "README.md",
            "TOC consistent",
            vec![Violation::new("MISSING_ANCHOR", "Section anchor missing: contact")],
        );
        assert_eq!(item.status, Status::Fail);
        assert_eq!(item.violations[0].code, "MISSING_ANCHOR");
    }

    #[test]
    fn test_violation_at_line() {
        let v = Violation::new("INVALID_EMAIL", "bad").at_line(42);
        assert_eq!(v.line, Some(42));
    }

    #[test]
    fn test_skip_item() {
        let item = ResultItem::skip("README not found");
        assert_eq!(item.kind, Kind::Skip);
        assert_eq!(item.status, Status::Skip);
        assert_eq!(item.excerpt.as_deref(), Some("README not found"));
    }

    #[test]
    fn test_result_set_counts() {
        let set: ResultSet = [
            ResultItem::check("a", "README.md", "a", Vec::new()),
            ResultItem::check("b", "README.md", "b", vec![Violation::new("X", "x")]),
        ]
        .into_iter()
        .collect();
        assert!(set.has_failures());
        assert_eq!(set.count(Status::Pass), 1);
        assert_eq!(set.count(Status::Fail), 1);
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let item = ResultItem::skip("nothing here");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"], "skip");
        assert_eq!(json["status"], "skip");
        assert!(json.get("violations").is_none());
        assert!(json.get("path").is_none());
    }
}
