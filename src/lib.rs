//! vercheck - Check installed vendor applications for updates.
//!
//! vercheck reads the installed version of each configured application
//! from an XML file or a registry value, scrapes the published version from
//! the vendor's web page, and reports whether an update is available.
//!
//! # Modules
//!
//! - [`check`] - Check orchestration, results, and progress events
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`sources`] - Local and remote version resolution
//! - [`ui`] - Spinners, prompts, tables, and terminal output
//! - [`version`] - Version normalization and comparison
//!
//! # Example
//!
//! ```
//! use vercheck::version::{compare, Verdict};
//!
//! assert_eq!(compare(Some("17.0.1.25"), "Version 17.0.2.10"), Verdict::UpdateAvailable);
//! assert_eq!(compare(Some("17.0.2.10"), "17.0.2.10 (Beta)"), Verdict::UpToDate);
//! ```

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod sources;
pub mod ui;
pub mod version;

pub use error::{Result, VercheckError};
