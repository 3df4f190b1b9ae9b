//! Manually supplied installed versions.

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::{Result, VercheckError};

/// Installed versions entered by the user, keyed by application key.
///
/// Blank values are ignored so that an empty entry falls back to local
/// detection. Overrides only live for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    versions: HashMap<String, String>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the version for `key`. A blank version clears it.
    pub fn set(&mut self, key: impl Into<String>, version: &str) {
        let key = key.into();
        let version = version.trim();
        if version.is_empty() {
            self.versions.remove(&key);
        } else {
            self.versions.insert(key, version.to_string());
        }
    }

    /// Version entered for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.versions.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Keys with an override, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.versions.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Parse `KEY=VERSION` assignments.
    pub fn parse_assignments<S: AsRef<str>>(assignments: &[S]) -> Result<Self> {
        let mut overrides = Self::new();
        for assignment in assignments {
            let Assignment { key, version } = assignment.as_ref().parse()?;
            overrides.set(key, &version);
        }
        Ok(overrides)
    }
}

/// One `KEY=VERSION` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub key: String,
    pub version: String,
}

impl FromStr for Assignment {
    type Err = VercheckError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || VercheckError::InvalidOverride {
            value: s.to_string(),
        };

        let (key, version) = s.split_once('=').ok_or_else(invalid)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            key: key.to_string(),
            version: version.trim().to_string(),
        })
    }
}
