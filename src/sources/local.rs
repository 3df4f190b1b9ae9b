//! Installed version lookup.
//!
//! The installed version is read either from an XML file shipped with the
//! application or from a string value in the Windows registry. Both report
//! one of four outcomes so callers never have to tell a version number from
//! an error sentence.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::config::LocalSourceSpec;

use super::registry::read_registry_value;

/// Element searched for, at any depth, in XML version files.
const VERSION_ELEMENT: &str = "version";

/// Outcome of reading the installed version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum LocalVersion {
    /// The installed version, trimmed.
    Found(String),
    /// Nothing installed: file or value missing, or present but empty.
    Absent,
    /// The source exists but could not be read.
    Unreadable(String),
    /// The source kind is not available on this platform.
    Unsupported(String),
}

impl LocalVersion {
    /// Wrap a raw value, treating blank text as absence.
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Self::Absent
        } else {
            Self::Found(trimmed.to_string())
        }
    }

    /// The version, when one was found.
    pub fn version(&self) -> Option<&str> {
        match self {
            Self::Found(v) => Some(v),
            _ => None,
        }
    }

    /// Whether a version was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl fmt::Display for LocalVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(v) => f.write_str(v),
            Self::Absent => f.write_str("Unknown"),
            Self::Unreadable(reason) => write!(f, "Unreadable: {}", reason),
            Self::Unsupported(reason) => write!(f, "Unsupported: {}", reason),
        }
    }
}

/// Read the installed version described by `spec`.
pub fn resolve_local(spec: &LocalSourceSpec) -> LocalVersion {
    let version = match spec {
        LocalSourceSpec::XmlFile { path } => read_xml_version(path),
        LocalSourceSpec::RegistryValue {
            key_path,
            value_name,
        } => read_registry_value(key_path, value_name),
    };

    tracing::debug!(source = %spec, result = ?version, "Resolved local version");
    version
}

/// Text of the first `<version>` element below the document root.
pub fn read_xml_version(path: &Path) -> LocalVersion {
    if !path.exists() {
        return LocalVersion::Absent;
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => return LocalVersion::Unreadable(format!("{}: {}", path.display(), e)),
    };

    let content = match decode_xml_bytes(&bytes) {
        Some(content) => content,
        None => {
            return LocalVersion::Unreadable(format!("{}: not valid UTF-8 or UTF-16", path.display()))
        }
    };

    match parse_xml_version(&content) {
        Some(LocalVersion::Unreadable(reason)) => {
            LocalVersion::Unreadable(format!("{}: {}", path.display(), reason))
        }
        Some(version) => version,
        None => LocalVersion::Unreadable(format!("no <version> element in {}", path.display())),
    }
}

/// Parse XML text and locate the version element.
///
/// Returns `None` when the document parses but holds no `<version>`
/// element below the root. An element without a text node is unreadable;
/// one holding only whitespace is absent.
pub fn parse_xml_version(content: &str) -> Option<LocalVersion> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };

    let document = match roxmltree::Document::parse_with_options(content, options) {
        Ok(document) => document,
        Err(e) => return Some(LocalVersion::Unreadable(e.to_string())),
    };

    let root = document.root_element();
    root.descendants()
        .filter(|node| node.is_element() && *node != root)
        .find(|node| node.has_tag_name(VERSION_ELEMENT))
        .map(|node| match node.text() {
            Some(text) => LocalVersion::from_text(text),
            None => LocalVersion::Unreadable(format!("<{}> element has no text", VERSION_ELEMENT)),
        })
}

/// Decode UTF-8 (with or without BOM) or BOM-marked UTF-16 text.
fn decode_xml_bytes(bytes: &[u8]) -> Option<String> {
    let utf16 = |chunks: std::slice::ChunksExact<'_, u8>, le: bool| {
        let units: Vec<u16> = chunks
            .map(|c| {
                if le {
                    u16::from_le_bytes([c[0], c[1]])
                } else {
                    u16::from_be_bytes([c[0], c[1]])
                }
            })
            .collect();
        String::from_utf16(&units).ok()
    };

    match bytes {
        [0xEF, 0xBB, 0xBF, rest @ ..] => String::from_utf8(rest.to_vec()).ok(),
        [0xFF, 0xFE, rest @ ..] => utf16(rest.chunks_exact(2), true),
        [0xFE, 0xFF, rest @ ..] => utf16(rest.chunks_exact(2), false),
        _ => String::from_utf8(bytes.to_vec()).ok(),
    }
}
