//! Error types for vercheck operations.
//!
//! This module defines [`VercheckError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `VercheckError` for errors that stop a command before a check starts
//!   (configuration, arguments, I/O)
//! - Failures inside a single application's check are never errors at this
//!   level: they become an `Unknown` [`CheckResult`](crate::check::CheckResult)
//! - Use `anyhow::Error` (via `VercheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for vercheck operations.
#[derive(Debug, Error)]
pub enum VercheckError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// An application key that is not in the configuration.
    #[error("Unknown application: {key}")]
    UnknownApplication { key: String },

    /// A manual override that is not of the form `KEY=VERSION`.
    #[error("Invalid version override '{value}': expected KEY=VERSION")]
    InvalidOverride { value: String },

    /// HTTP client could not be created or used.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for vercheck operations.
pub type Result<T> = std::result::Result<T, VercheckError>;
