//! Local against remote version comparison.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::normalize::normalize_for_compare;

/// Outcome of comparing an installed version with the advertised one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Installed version equals the advertised one.
    UpToDate,
    /// The vendor advertises a newer version.
    UpdateAvailable,
    /// Installed version is newer than the advertised one (beta or
    /// unreleased build).
    LocalNewer,
    /// The comparison could not be made.
    #[serde(rename = "error")]
    Unknown,
}

impl Verdict {
    /// Status text shown next to a result.
    pub fn status_text(self) -> &'static str {
        match self {
            Self::UpToDate => "Up to date",
            Self::UpdateAvailable => "Update available",
            Self::LocalNewer => "Local version is newer than the vendor's",
            Self::Unknown => "Unknown",
        }
    }

    /// Whether the verdict needs no action from the user.
    pub fn is_current(self) -> bool {
        matches!(self, Self::UpToDate | Self::LocalNewer)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::UpToDate => "up_to_date",
            Self::UpdateAvailable => "update_available",
            Self::LocalNewer => "local_newer",
            Self::Unknown => "error",
        };
        f.write_str(kind)
    }
}

/// Compare display versions after dropping patch annotations.
///
/// A missing or blank local version yields [`Verdict::Unknown`].
pub fn compare(local: Option<&str>, remote: &str) -> Verdict {
    let Some(local) = local.filter(|l| !l.trim().is_empty()) else {
        return Verdict::Unknown;
    };

    let local = normalize_for_compare(local, true);
    let remote = normalize_for_compare(remote, true);

    match local.cmp(&remote) {
        Ordering::Equal => Verdict::UpToDate,
        Ordering::Less => Verdict::UpdateAvailable,
        Ordering::Greater => Verdict::LocalNewer,
    }
}
