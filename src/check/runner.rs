//! Sequential check orchestration.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, error, warn};

use crate::config::{ApplicationDescriptor, Settings};
use crate::error::Result;
use crate::sources::{resolve_local, resolve_remote, HttpFetcher, LocalVersion};

use super::cancel::CancelToken;
use super::event::{CheckEvent, EventSink};
use super::overrides::Overrides;
use super::result::{CheckResult, CheckSummary};

/// Share of the progress bar covered by the per-application updates.
const PROGRESS_SPAN: usize = 70;

/// Message of the final progress update.
pub const COMPLETE_MESSAGE: &str = "Check complete";

/// Checks applications one after another.
#[derive(Debug, Clone)]
pub struct CheckRunner {
    fetcher: HttpFetcher,
    delay: Duration,
}

impl CheckRunner {
    /// Create a runner from the configured timeout, delay, and User-Agent.
    pub fn new(settings: &Settings) -> Result<Self> {
        let fetcher = HttpFetcher::with_timeout(settings.timeout(), settings.user_agent.as_deref())?;
        Ok(Self::with_fetcher(fetcher, settings.delay()))
    }

    /// Create a runner around an existing fetcher.
    pub fn with_fetcher(fetcher: HttpFetcher, delay: Duration) -> Self {
        Self { fetcher, delay }
    }

    /// Courtesy delay between applications.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Check every application in order.
    ///
    /// Emits a progress event before each application, exactly one result
    /// per application, then a final progress event and the summary.
    /// Nothing escapes: failures become `Unknown` results.
    pub fn run(
        &self,
        applications: &[ApplicationDescriptor],
        overrides: &Overrides,
        sink: &mut dyn EventSink,
        cancel: &CancelToken,
    ) -> CheckSummary {
        let start = Instant::now();
        let total = applications.len();
        let mut summary = CheckSummary::default();

        debug!(total, overrides = overrides.len(), "Starting check run");

        for (index, app) in applications.iter().enumerate() {
            let result = if cancel.is_cancelled() {
                summary.cancelled = true;
                CheckResult::cancelled(app)
            } else {
                sink.emit(CheckEvent::progress(
                    progress_percent(index, total),
                    format!("Checking {}...", app.display_name),
                ));
                self.check_isolated(app, overrides)
            };

            summary.record(&result);
            sink.emit(CheckEvent::Result(result));

            let more_to_check = index + 1 < total;
            if more_to_check && !cancel.is_cancelled() && !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }

        summary.duration = start.elapsed();
        debug!(?summary, "Check run finished");

        sink.emit(CheckEvent::progress(100, COMPLETE_MESSAGE));
        sink.emit(CheckEvent::Complete(summary.clone()));
        summary
    }

    /// Check one application, converting panics into a failed result.
    fn check_isolated(&self, app: &ApplicationDescriptor, overrides: &Overrides) -> CheckResult {
        match panic::catch_unwind(AssertUnwindSafe(|| self.check_one(app, overrides))) {
            Ok(result) => result,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!(app = %app.key, error = %message, "Check failed unexpectedly");
                CheckResult::failed(app, &message)
            }
        }
    }

    /// Check one application.
    pub fn check_one(&self, app: &ApplicationDescriptor, overrides: &Overrides) -> CheckResult {
        let (local, overridden) = match overrides.get(&app.key) {
            Some(version) => {
                debug!(app = %app.key, version, "Using manual version");
                (LocalVersion::Found(version.to_string()), true)
            }
            None => (resolve_local(&app.local), false),
        };

        let remote = resolve_remote(&app.remote, &self.fetcher);
        if let Err(e) = &remote {
            warn!(app = %app.key, url = %app.remote.url, error = %e, "Published version unavailable");
        }

        let result = CheckResult::evaluate(app, local, overridden, remote);
        debug!(
            app = %app.key,
            local = %result.local_display,
            remote = %result.remote_display,
            verdict = %result.verdict,
            "Checked application"
        );
        result
    }
}

/// Progress shown before checking application `index` of `total`.
pub fn progress_percent(index: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (index * PROGRESS_SPAN / total) as u8
}

/// Report panics through `tracing` instead of the default stderr hook.
/// The runner still catches application panics after this is installed.
pub fn log_panics() {
    panic::set_hook(Box::new(|info| {
        let location = info.location().map(|l| l.to_string());
        error!("{}", describe_panic(info.payload(), location.as_deref()));
    }));
}

/// One-line description of a panic for the log.
fn describe_panic(payload: &(dyn Any + Send), location: Option<&str>) -> String {
    match location {
        Some(location) => format!("panic at {}: {}", location, panic_message(payload)),
        None => format!("panic: {}", panic_message(payload)),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
