//! Version text normalization.
//!
//! Vendor pages and local config files both report versions with noise
//! around the numbers: a `Version` prefix, the Chinese word for "version",
//! or a parenthetical patch annotation such as `(Patch 3)`. This module
//! strips that noise for display and reduces the text to a numeric tuple
//! for ordering.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Literal prefixes removed from version text before display.
const VERSION_WORDS: &[&str] = &["Version", "版本"];

/// Non-greedy parenthetical annotation, e.g. `(Patch 1)`.
static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*?\)").expect("parenthetical pattern is valid"));

/// A version reduced to its numeric `.`-separated segments.
///
/// Ordering is plain sequence ordering, without zero padding, so
/// `1.2 < 1.2.0`. The empty sequence sorts below every non-empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NormalizedVersion(Vec<u64>);

impl NormalizedVersion {
    /// Build from explicit segments.
    pub fn new(segments: Vec<u64>) -> Self {
        Self(segments)
    }

    /// The numeric segments.
    pub fn segments(&self) -> &[u64] {
        &self.0
    }

    /// Whether no numeric segment survived normalization.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u64>> for NormalizedVersion {
    fn from(segments: Vec<u64>) -> Self {
        Self(segments)
    }
}

impl fmt::Display for NormalizedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(u64::to_string).collect();
        write!(f, "{}", parts.join("."))
    }
}

impl FromStr for NormalizedVersion {
    type Err = std::convert::Infallible;

    /// Parse with the same rules as [`version_tuple`]. Never fails.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(version_tuple(s))
    }
}

/// Clean version text for display.
///
/// Removes every occurrence of `Version` and `版本` (case-sensitive) and
/// trims surrounding whitespace.
pub fn normalize_for_display(text: &str) -> String {
    let mut cleaned = text.to_string();
    for word in VERSION_WORDS {
        cleaned = cleaned.replace(word, "");
    }
    cleaned.trim().to_string()
}

/// Clean version text, optionally dropping parenthetical annotations.
pub fn clean_version(text: &str, strip_parenthetical: bool) -> String {
    let cleaned = normalize_for_display(text);
    if strip_parenthetical {
        PARENTHETICAL.replace_all(&cleaned, "").trim().to_string()
    } else {
        cleaned
    }
}

/// Normalize version text into a comparable tuple.
pub fn normalize_for_compare(text: &str, strip_parenthetical: bool) -> NormalizedVersion {
    version_tuple(&clean_version(text, strip_parenthetical))
}

/// Split on `.` and keep the segments made only of ASCII digits.
///
/// Segments that are empty, contain anything else, or overflow `u64` are
/// dropped rather than reported.
pub fn version_tuple(text: &str) -> NormalizedVersion {
    let segments = text
        .trim()
        .split('.')
        .filter(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|s| s.parse::<u64>().ok())
        .collect();
    NormalizedVersion(segments)
}
