//! Events emitted while a check runs.

use std::sync::mpsc::Sender;

use serde::Serialize;

use super::result::{CheckResult, CheckSummary};

/// Progress report preceding each application, and the final one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Percentage in `0..=100`
    pub percent: u8,
    /// What is being checked
    pub message: String,
}

/// Engine-to-presentation message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CheckEvent {
    /// Progress update.
    Progress(Progress),
    /// One application's result.
    Result(CheckResult),
    /// The run finished.
    Complete(CheckSummary),
}

impl CheckEvent {
    /// Progress event.
    pub fn progress(percent: u8, message: impl Into<String>) -> Self {
        Self::Progress(Progress {
            percent,
            message: message.into(),
        })
    }
}

/// Receiver side of the engine's events.
///
/// Delivery is best-effort: a sink whose consumer has gone away simply
/// drops events and the run continues.
pub trait EventSink {
    /// Deliver one event.
    fn emit(&mut self, event: CheckEvent);
}

impl EventSink for Sender<CheckEvent> {
    fn emit(&mut self, event: CheckEvent) {
        if self.send(event).is_err() {
            tracing::debug!("Event receiver dropped");
        }
    }
}

impl EventSink for Vec<CheckEvent> {
    fn emit(&mut self, event: CheckEvent) {
        self.push(event);
    }
}
