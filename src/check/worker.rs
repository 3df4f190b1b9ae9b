//! Background check execution.
//!
//! The runner blocks on network I/O, so front-ends run it on a worker
//! thread and consume its events through a channel.

use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use anyhow::anyhow;

use crate::config::{ApplicationDescriptor, Settings};
use crate::error::{Result, VercheckError};

use super::cancel::CancelToken;
use super::event::CheckEvent;
use super::overrides::Overrides;
use super::result::CheckSummary;
use super::runner::CheckRunner;

/// A check running on a worker thread.
#[derive(Debug)]
pub struct CheckHandle {
    events: Receiver<CheckEvent>,
    cancel: CancelToken,
    thread: JoinHandle<CheckSummary>,
}

impl CheckHandle {
    /// Events in emission order. Iteration ends when the worker finishes.
    pub fn events(&self) -> &Receiver<CheckEvent> {
        &self.events
    }

    /// Token that stops the run before the next application.
    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait for the worker and return its summary.
    pub fn join(self) -> Result<CheckSummary> {
        self.thread
            .join()
            .map_err(|_| VercheckError::Other(anyhow!("check worker panicked")))
    }
}

/// Start checking `applications` on a new thread.
///
/// The HTTP client is built before the thread starts, so configuration
/// problems surface here rather than as per-application failures.
pub fn spawn_check(
    applications: Vec<ApplicationDescriptor>,
    settings: &Settings,
    overrides: Overrides,
) -> Result<CheckHandle> {
    let runner = CheckRunner::new(settings)?;
    Ok(spawn_with_runner(runner, applications, overrides))
}

/// Start checking with a prepared runner.
pub fn spawn_with_runner(
    runner: CheckRunner,
    applications: Vec<ApplicationDescriptor>,
    overrides: Overrides,
) -> CheckHandle {
    let (mut tx, rx) = mpsc::channel();
    let cancel = CancelToken::new();
    let worker_cancel = cancel.clone();

    let thread = thread::spawn(move || runner.run(&applications, &overrides, &mut tx, &worker_cancel));

    CheckHandle {
        events: rx,
        cancel,
        thread,
    }
}
