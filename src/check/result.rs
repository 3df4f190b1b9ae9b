//! Per-application check results and run summaries.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::ApplicationDescriptor;
use crate::sources::{LocalVersion, RemoteError, RemoteVersion};
use crate::version::{compare, Verdict};

/// Characters of an error message kept in status texts.
pub const EXCERPT_CHARS: usize = 30;

/// Remote display when the page could not be fetched.
pub const REMOTE_FETCH_FAILED: &str = "Fetch failed";

/// Remote display when the page held no version.
pub const REMOTE_NOT_FOUND: &str = "Not found";

/// Remote display when the page was never consulted.
pub const REMOTE_UNKNOWN: &str = "Unknown";

/// Why a result carries [`Verdict::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckIssue {
    /// No installed version was found.
    LocalAbsent,
    /// The installed version source could not be read.
    LocalUnreadable,
    /// The installed version source is not available on this platform.
    LocalUnsupported,
    /// The vendor page could not be fetched.
    RemoteFetchFailed,
    /// The vendor page held no version element.
    RemoteElementNotFound,
    /// The run was cancelled before this application was checked.
    Cancelled,
    /// The check itself failed unexpectedly.
    Internal,
}

/// Outcome of checking one application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    /// Application key
    pub key: String,
    /// Human-readable name
    pub display_name: String,
    /// Installed version as resolved (or as overridden)
    pub local_version: LocalVersion,
    /// Installed version column text
    pub local_display: String,
    /// Published version column text
    pub remote_display: String,
    /// Comparison outcome
    #[serde(rename = "status_kind")]
    pub verdict: Verdict,
    /// Human-readable status
    pub status_text: String,
    /// Why the verdict is unknown, if it is
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<CheckIssue>,
    /// Vendor page to visit for updates
    pub reference_url: String,
    /// Whether the installed version came from a manual override
    pub overridden: bool,
    /// When the check finished
    pub checked_at: DateTime<Utc>,
}

impl CheckResult {
    /// Build the result from resolved local and remote versions.
    ///
    /// Remote failures take precedence over local ones. A usable remote
    /// version is still reported when the installed one is unknown.
    pub fn evaluate(
        app: &ApplicationDescriptor,
        local: LocalVersion,
        overridden: bool,
        remote: Result<RemoteVersion, RemoteError>,
    ) -> Self {
        let local_display = local_display(&local);

        let (remote_display, verdict, status_text, issue) = match remote {
            Err(RemoteError::Fetch { message }) => (
                REMOTE_FETCH_FAILED.to_string(),
                Verdict::Unknown,
                failure_text(&message),
                Some(CheckIssue::RemoteFetchFailed),
            ),
            Err(RemoteError::ElementNotFound { .. }) => (
                REMOTE_NOT_FOUND.to_string(),
                Verdict::Unknown,
                "Online version not found".to_string(),
                Some(CheckIssue::RemoteElementNotFound),
            ),
            Ok(remote) => {
                let (verdict, status_text, issue) = match &local {
                    LocalVersion::Found(version) => {
                        let verdict = compare(Some(version), &remote.display);
                        (verdict, verdict.status_text().to_string(), None)
                    }
                    LocalVersion::Absent => (
                        Verdict::Unknown,
                        "Local version not found".to_string(),
                        Some(CheckIssue::LocalAbsent),
                    ),
                    LocalVersion::Unreadable(detail) => (
                        Verdict::Unknown,
                        format!("Local version unreadable: {}", detail),
                        Some(CheckIssue::LocalUnreadable),
                    ),
                    LocalVersion::Unsupported(detail) => (
                        Verdict::Unknown,
                        format!("Local version unavailable: {}", detail),
                        Some(CheckIssue::LocalUnsupported),
                    ),
                };
                (remote.display, verdict, status_text, issue)
            }
        };

        Self {
            key: app.key.clone(),
            display_name: app.display_name.clone(),
            local_version: local,
            local_display,
            remote_display,
            verdict,
            status_text,
            issue,
            reference_url: app.remote.url.clone(),
            overridden,
            checked_at: Utc::now(),
        }
    }

    /// Result for an application whose check failed unexpectedly.
    pub fn failed(app: &ApplicationDescriptor, message: &str) -> Self {
        Self::unknown(app, failure_text(message), CheckIssue::Internal)
    }

    /// Result for an application skipped by cancellation.
    pub fn cancelled(app: &ApplicationDescriptor) -> Self {
        Self::unknown(app, "Check cancelled".to_string(), CheckIssue::Cancelled)
    }

    fn unknown(app: &ApplicationDescriptor, status_text: String, issue: CheckIssue) -> Self {
        Self {
            key: app.key.clone(),
            display_name: app.display_name.clone(),
            local_version: LocalVersion::Absent,
            local_display: "Unknown".to_string(),
            remote_display: REMOTE_UNKNOWN.to_string(),
            verdict: Verdict::Unknown,
            status_text,
            issue: Some(issue),
            reference_url: app.remote.url.clone(),
            overridden: false,
            checked_at: Utc::now(),
        }
    }
}

/// Installed version column text.
pub fn local_display(local: &LocalVersion) -> String {
    match local {
        LocalVersion::Found(version) => version.clone(),
        LocalVersion::Absent => "Unknown".to_string(),
        LocalVersion::Unreadable(detail) | LocalVersion::Unsupported(detail) => detail.clone(),
    }
}

/// `Check failed: <excerpt>...` status text.
pub fn failure_text(message: &str) -> String {
    format!("Check failed: {}...", excerpt(message))
}

/// First [`EXCERPT_CHARS`] characters of `message`.
pub fn excerpt(message: &str) -> String {
    message.chars().take(EXCERPT_CHARS).collect()
}

/// Totals over one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckSummary {
    /// Results produced
    pub total: usize,
    /// Applications up to date
    pub up_to_date: usize,
    /// Applications with an update available
    pub update_available: usize,
    /// Applications newer than the published version
    pub local_newer: usize,
    /// Applications whose status is unknown
    pub unknown: usize,
    /// Whether the run was cancelled
    pub cancelled: bool,
    /// Wall-clock duration of the run
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
}

impl CheckSummary {
    /// Count one result.
    pub fn record(&mut self, result: &CheckResult) {
        self.total += 1;
        match result.verdict {
            Verdict::UpToDate => self.up_to_date += 1,
            Verdict::UpdateAvailable => self.update_available += 1,
            Verdict::LocalNewer => self.local_newer += 1,
            Verdict::Unknown => self.unknown += 1,
        }
    }

    /// Whether every application needs no action.
    pub fn all_current(&self) -> bool {
        self.up_to_date + self.local_newer == self.total
    }
}

fn serialize_millis<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}
