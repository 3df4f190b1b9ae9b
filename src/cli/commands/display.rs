//! Shared rendering of check results.
//!
//! Used by `check` for live result lines and the summary table, and by
//! `local` for the installed-version listing.

use serde::Serialize;

use crate::check::{CheckResult, CheckSummary};
use crate::error::{Result, VercheckError};
use crate::ui::{format_duration, SpinnerHandle, StatusKind, Table, UserInterface};

/// One-line description of a result.
pub fn result_line(result: &CheckResult) -> String {
    let manual = if result.overridden { " (manual)" } else { "" };
    format!(
        "{}: {}{} → {} · {}",
        result.display_name, result.local_display, manual, result.remote_display, result.status_text
    )
}

/// Replace an application's spinner with its result line.
pub fn finish_spinner(spinner: &mut dyn SpinnerHandle, result: &CheckResult) {
    let line = result_line(result);
    match StatusKind::of(result) {
        StatusKind::Current | StatusKind::Newer => spinner.finish_success(&line),
        StatusKind::Update | StatusKind::Skipped => spinner.finish_warning(&line),
        StatusKind::Failed => spinner.finish_error(&line),
    }
}

/// Print a result that had no spinner.
pub fn show_result(ui: &mut dyn UserInterface, result: &CheckResult) {
    let line = result_line(result);
    match StatusKind::of(result) {
        StatusKind::Current | StatusKind::Newer => ui.success(&line),
        StatusKind::Update | StatusKind::Skipped => ui.warning(&line),
        StatusKind::Failed => ui.error(&line),
    }
}

/// Summary table, one row per result.
pub fn summary_table(results: &[CheckResult]) -> Table {
    let mut table = Table::new(vec!["Application", "Installed", "Published", "Status"]);
    for result in results {
        let status = format!("{} {}", StatusKind::of(result).icon(), result.status_text);
        table.add_row(&[
            result.display_name.as_str(),
            result.local_display.as_str(),
            result.remote_display.as_str(),
            status.as_str(),
        ]);
    }
    table
}

/// Totals line shown under the table.
pub fn summary_line(summary: &CheckSummary) -> String {
    let mut line = format!(
        "{} checked · {} up to date · {} update{} available · {} newer · {} unknown · {}",
        summary.total,
        summary.up_to_date,
        summary.update_available,
        if summary.update_available == 1 { "" } else { "s" },
        summary.local_newer,
        summary.unknown,
        format_duration(summary.duration),
    );
    if summary.cancelled {
        line.push_str(" · cancelled");
    }
    line
}

/// Pretty JSON for `--json` output.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| VercheckError::Other(e.into()))
}
