//! Markup extractors
//!
//! Pulls the pieces the checks reason about out of raw README text:
//! `<a id="..."></a>` anchors, TOC fragment links, images, markdown links,
//! `##` headings and email addresses.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;

/// Inline anchor marker
/// Format: <a id="core-features"></a>
static ANCHOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<a\s+id="([^"]+)">\s*</a>"#).expect("Invalid ANCHOR_RE regex")
});

/// Fragment reference
/// Format: href="#core-features"
static FRAGMENT_HREF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r##"(?i)href="#([^"]+)""##).expect("Invalid FRAGMENT_HREF_RE regex")
});

/// `<details>` block body. Blocks do not nest: the body ends at the first
/// closing tag.
static DETAILS_BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<details\b[^>]*>(.*?)</details\s*>").expect("Invalid DETAILS_BLOCK_RE regex")
});

static DETAILS_OPEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<details\b[^>]*>").expect("Invalid DETAILS_OPEN_RE regex"));

static DETAILS_CLOSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</details\s*>").expect("Invalid DETAILS_CLOSE_RE regex"));

static IMG_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<img\b[^>]*>").expect("Invalid IMG_TAG_RE regex"));

static SRC_ATTR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)\ssrc\s*=\s*"([^"]*)""#).expect("Invalid SRC_ATTR_RE regex"));

static ALT_ATTR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)\salt\s*=\s*"([^"]*)""#).expect("Invalid ALT_ATTR_RE regex"));

/// Markdown image
/// Format: ![alt](path "optional title")
static MD_IMAGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"!\[([^\]]*)\]\(\s*([^)\s]+)(?:\s+"[^"]*")?\s*\)"#)
        .expect("Invalid MD_IMAGE_RE regex")
});

/// Markdown link
/// Format: [label](url)
static MD_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid MD_LINK_RE regex"));

/// Feature list entry rendered in HTML
/// Format: <li><b>Name</b> ...
static FEATURE_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<li>\s*<b>").expect("Invalid FEATURE_ITEM_RE regex"));

/// Email-like candidate: anything shaped `local@domain`, with or without a
/// top-level segment
static LOOSE_EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.%+-]+@[\w.-]+").expect("Invalid LOOSE_EMAIL_RE regex"));

/// Strict email format: local part, domain, alphabetic TLD of 2+ letters
static STRICT_EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
        .expect("Invalid STRICT_EMAIL_RE regex")
});

/// An embedded image reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
    pub line: u32,
}

/// A markdown hyperlink
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub url: String,
    pub line: u32,
}

/// An email-like token and where it was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailToken {
    pub address: String,
    pub line: u32,
}

/// 1-indexed line number of a byte offset
pub fn line_of(text: &str, offset: usize) -> u32 {
    let end = offset.min(text.len());
    text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() as u32 + 1
}

/// Ids of all inline anchor markers
pub fn anchor_ids(text: &str) -> BTreeSet<String> {
    ANCHOR_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Ids of all fragment references in `text`
pub fn fragment_ids(text: &str) -> BTreeSet<String> {
    FRAGMENT_HREF_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Regex matching the `<summary>` caption of the TOC block
pub fn summary_regex(caption: &str) -> Result<Regex, regex::Error> {
    let words: Vec<String> = caption.split_whitespace().map(regex::escape).collect();
    Regex::new(&format!(r"(?i)<summary>\s*{}\s*</summary>", words.join(r"\s+")))
}

/// Whether both an opening and a closing `<details>` tag are present
pub fn has_details_wrapper(text: &str) -> bool {
    DETAILS_OPEN_RE.is_match(text) && DETAILS_CLOSE_RE.is_match(text)
}

/// Body of the first `<details>` block captioned by `summary`
pub fn toc_block<'a>(text: &'a str, summary: &Regex) -> Option<&'a str> {
    DETAILS_BLOCK_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .find(|body| summary.is_match(body))
}

/// Fragment ids referenced from inside the TOC block
pub fn toc_ids(text: &str, summary: &Regex) -> BTreeSet<String> {
    toc_block(text, summary)
        .map(fragment_ids)
        .unwrap_or_default()
}

/// All embedded images, HTML `<img>` tags first, then markdown images
pub fn images(text: &str) -> Vec<ImageRef> {
    let mut out = Vec::new();

    for tag in IMG_TAG_RE.find_iter(text) {
        let attr = |re: &Regex| {
            re.captures(tag.as_str())
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };
        out.push(ImageRef {
            src: attr(&SRC_ATTR_RE),
            alt: attr(&ALT_ATTR_RE),
            line: line_of(text, tag.start()),
        });
    }

    for caps in MD_IMAGE_RE.captures_iter(text) {
        let (Some(whole), Some(alt), Some(src)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        out.push(ImageRef {
            src: src.as_str().to_string(),
            alt: alt.as_str().to_string(),
            line: line_of(text, whole.start()),
        });
    }

    out
}

/// All markdown `[label](url)` links in document order
pub fn links(text: &str) -> Vec<Link> {
    MD_LINK_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(Link {
                label: caps.get(1)?.as_str().to_string(),
                url: caps.get(2)?.as_str().trim().to_string(),
                line: line_of(text, whole.start()),
            })
        })
        .collect()
}

/// Number of `<li><b>` feature entries
pub fn feature_item_count(text: &str) -> usize {
    FEATURE_ITEM_RE.find_iter(text).count()
}

/// Regex matching `phrase` case-insensitively with any whitespace between words
pub fn phrase_regex(phrase: &str) -> Result<Regex, regex::Error> {
    let words: Vec<String> = phrase.split_whitespace().map(regex::escape).collect();
    Regex::new(&format!("(?i){}", words.join(r"\s+")))
}

/// Whether `line` is a level-two heading mentioning `label`
fn is_heading_with(line: &str, label: &str) -> bool {
    let Some(rest) = line.trim_start().strip_prefix("##") else {
        return false;
    };
    rest.starts_with(char::is_whitespace) && rest.contains(label)
}

/// Whether any `##` heading mentions `label`
pub fn has_heading(text: &str, label: &str) -> bool {
    text.lines().any(|line| is_heading_with(line, label))
}

/// Text following the first `##` heading mentioning `label`, with the byte
/// offset at which it starts
pub fn section_after_heading<'a>(text: &'a str, label: &str) -> Option<(usize, &'a str)> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let next = offset + line.len();
        if is_heading_with(line.trim_end_matches(['\r', '\n']), label) {
            let body_start = offset + line.trim_end_matches(['\r', '\n']).len();
            return Some((body_start, &text[body_start..]));
        }
        offset = next;
    }
    None
}

/// Email-like tokens in `section`; `base` is the section's offset in `text`.
/// Trailing sentence punctuation is not part of the token.
pub fn email_tokens(text: &str, base: usize, section: &str) -> Vec<EmailToken> {
    LOOSE_EMAIL_RE
        .find_iter(section)
        .map(|m| EmailToken {
            address: m.as_str().trim_end_matches(['.', '-']).to_string(),
            line: line_of(text, base + m.start()),
        })
        .collect()
}

/// Strict email validation
pub fn is_valid_email(address: &str) -> bool {
    STRICT_EMAIL_RE.is_match(address)
}
