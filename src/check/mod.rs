//! Check orchestration.
//!
//! Drives local and remote resolution and comparison over the configured
//! applications, reporting through [`CheckEvent`]s.
//!
//! # Example
//!
//! ```
//! use vercheck::check::{CancelToken, CheckEvent, CheckRunner, Overrides};
//! use vercheck::config::Settings;
//!
//! let runner = CheckRunner::new(&Settings::default()).unwrap();
//! let mut events: Vec<CheckEvent> = Vec::new();
//! let summary = runner.run(&[], &Overrides::new(), &mut events, &CancelToken::new());
//!
//! assert_eq!(summary.total, 0);
//! assert!(matches!(events.last(), Some(CheckEvent::Complete(_))));
//! ```

pub mod cancel;
pub mod event;
pub mod overrides;
pub mod result;
pub mod runner;
pub mod worker;

pub use cancel::CancelToken;
pub use event::{CheckEvent, EventSink, Progress};
pub use overrides::{Assignment, Overrides};
pub use result::{
    excerpt, failure_text, local_display, CheckIssue, CheckResult, CheckSummary, EXCERPT_CHARS,
};
pub use runner::{log_panics, progress_percent, CheckRunner, COMPLETE_MESSAGE};
pub use worker::{spawn_check, spawn_with_runner, CheckHandle};
