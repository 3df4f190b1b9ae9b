//! Status vocabulary for check results.
//!
//! `StatusKind` maps each result onto one icon and one color so the
//! live result lines and the summary table agree.

use crate::check::{CheckIssue, CheckResult};
use crate::version::Verdict;

/// Canonical status kinds used across vercheck output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Installed version matches the published one.
    Current,
    /// Installed version is ahead of the published one.
    Newer,
    /// A newer version is published.
    Update,
    /// The check could not decide.
    Failed,
    /// The check did not run.
    Skipped,
}

impl StatusKind {
    /// Status kind of a check result.
    pub fn of(result: &CheckResult) -> Self {
        if result.issue == Some(CheckIssue::Cancelled) {
            return Self::Skipped;
        }
        result.verdict.into()
    }

    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Current => "✓",
            Self::Newer => "◆",
            Self::Update => "↑",
            Self::Failed => "✗",
            Self::Skipped => "○",
        }
    }
}

impl From<Verdict> for StatusKind {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::UpToDate => Self::Current,
            Verdict::LocalNewer => Self::Newer,
            Verdict::UpdateAvailable => Self::Update,
            Verdict::Unknown => Self::Failed,
        }
    }
}
