//! Document module - Locate and load the README under validation
//!
//! The README is looked up at the repository root from a prioritized list of
//! candidate names. A missing README is not an error: `load` returns `None`
//! and the caller treats the run as skipped.

pub mod extract;

use std::path::{Path, PathBuf};

use crate::core::file_reader::{read_file_lossy, ReadError};
use crate::core::model::Meta;
use crate::core::paths::display_relative;
use xxhash_rust::xxh3::xxh3_64;

/// The loaded README, immutable for the whole run
#[derive(Debug, Clone)]
pub struct Document {
    /// Location on disk
    pub path: PathBuf,

    /// Path relative to root, using '/' as separator
    pub rel_path: String,

    pub text: String,

    /// Size on disk in bytes
    pub size: u64,

    /// Whether invalid UTF-8 was replaced while decoding
    pub lossy: bool,

    /// XXH3 of the decoded text
    pub hash: String,
}

impl Document {
    /// Build a document from text already in memory
    pub fn from_text(path: impl Into<PathBuf>, rel_path: impl Into<String>, text: String) -> Self {
        let hash = format!("{:016x}", xxh3_64(text.as_bytes()));
        Self {
            path: path.into(),
            rel_path: rel_path.into(),
            size: text.len() as u64,
            lossy: false,
            hash,
            text,
        }
    }

    /// Directory relative image paths are resolved against
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// 1-indexed line number of a byte offset into the text
    pub fn line_at(&self, offset: usize) -> u32 {
        extract::line_of(&self.text, offset)
    }

    pub fn meta(&self) -> Meta {
        Meta {
            size: Some(self.size),
            hash: Some(self.hash.clone()),
            lossy: self.lossy,
        }
    }
}

/// Find the first candidate that exists under `root`
pub fn locate(root: &Path, candidates: &[String]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

/// Locate and read the README; `Ok(None)` means no candidate exists
pub fn load(root: &Path, candidates: &[String]) -> Result<Option<Document>, ReadError> {
    let Some(path) = locate(root, candidates) else {
        tracing::info!(root = %root.display(), "no README candidate found");
        return Ok(None);
    };

    tracing::debug!(path = %path.display(), "located README");
    let read = read_file_lossy(&path)?;
    if read.lossy_conversion {
        tracing::warn!(path = %path.display(), "README contains invalid UTF-8; decoded lossily");
    }

    let rel_path = display_relative(&path, root);
    let mut doc = Document::from_text(path, rel_path, read.content);
    doc.size = read.size;
    doc.lossy = read.lossy_conversion;
    Ok(Some(doc))
}
