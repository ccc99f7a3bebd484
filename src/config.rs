//! Check profile
//!
//! A `Profile` holds every fixed expectation the checks enforce: the product
//! title, required section ids, feature names, guide link shape, and so on.
//! The defaults describe the NeedyMeds DDC Mobile App README. Any subset of
//! fields can be overridden from a JSON file:
//!
//! ```json
//! {
//!   "title": "My Project",
//!   "intro_facts": ["99.9%"],
//!   "required_ids": ["install", "usage"]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up at the root when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = ".readmecheck.json";

/// Errors that can occur when loading a profile.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Expectations enforced by the checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// README file names tried at the root, in priority order
    pub candidates: Vec<String>,

    /// Product title expected near the top of the document
    pub title: String,

    /// How many leading lines may carry the title
    pub title_window: usize,

    /// Substrings the intro must mention
    pub intro_facts: Vec<String>,

    /// Section ids that need both an anchor and a TOC entry
    pub required_ids: Vec<String>,

    /// Labels that must appear in `##` headings
    pub section_labels: Vec<String>,

    /// `<summary>` caption of the TOC disclosure block
    pub toc_summary: String,

    pub feature_items: Vec<String>,
    pub min_feature_items: usize,

    /// Words of a phrase matched case-insensitively with flexible spacing
    pub feature_phrase: String,

    /// Label fragment identifying the external guide link
    pub guide_label: String,
    pub guide_host: String,

    /// Heading label opening the contact section
    pub contact_label: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            candidates: strings(&["README.md", "Readme.md", "README.MD", "README"]),
            title: "NeedyMeds DDC Mobile App".to_string(),
            title_window: 10,
            intro_facts: strings(&["80%", "65,000"]),
            required_ids: strings(&["core-features", "system-design", "engineer-guide", "contact"]),
            section_labels: strings(&["Core Features", "System Design", "Engineer Guide", "Contact"]),
            toc_summary: "Table of Contents".to_string(),
            feature_items: strings(&[
                "Medication Lookup",
                "Digital DDC Card",
                "Pharmacy Locator",
                "Educational Resources",
            ]),
            min_feature_items: 4,
            feature_phrase: "updated weekly".to_string(),
            guide_label: "Engineer Guide".to_string(),
            guide_host: "docs.google.com".to_string(),
            contact_label: "Contact".to_string(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Profile {
    /// Parse a profile from JSON; missing fields keep their defaults
    pub fn from_json(json: &str, origin: &str) -> Result<Self, ConfigError> {
        let profile: Profile = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load a profile from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json, &path.display().to_string())
    }

    /// Resolve the profile for a run: explicit path, then the root config
    /// file, then the defaults
    pub fn resolve(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let candidate: Option<PathBuf> = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let implicit = root.join(DEFAULT_CONFIG_FILE);
                implicit.is_file().then_some(implicit)
            }
        };

        match candidate {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading profile");
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Reject profiles whose checks could never be meaningful
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.candidates.is_empty() || self.candidates.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "candidates must list at least one non-empty file name".to_string(),
            ));
        }
        if self.title_window == 0 {
            return Err(ConfigError::Validation(
                "title_window must be at least 1".to_string(),
            ));
        }

        let required = [
            ("title", &self.title),
            ("toc_summary", &self.toc_summary),
            ("feature_phrase", &self.feature_phrase),
            ("guide_label", &self.guide_label),
            ("guide_host", &self.guide_host),
            ("contact_label", &self.contact_label),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{} must not be empty", name)));
            }
        }

        Ok(())
    }
}
