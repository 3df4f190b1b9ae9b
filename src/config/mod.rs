//! Configuration loading, parsing, and validation for vercheck.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use vercheck::config::{load_config, ConfigSource};
//! use tempfile::TempDir;
//!
//! // Without a vercheck.yml the built-in application set is used
//! let temp = TempDir::new().unwrap();
//! let loaded = load_config(None, temp.path()).unwrap();
//! assert_eq!(loaded.source, ConfigSource::BuiltIn);
//! assert!(loaded.config.application("pc_manager").is_some());
//! ```
//!
//! # Configuration File Locations
//!
//! vercheck uses the first of:
//! 1. The path given with `--config` (or `VERCHECK_CONFIG`)
//! 2. `vercheck.yml` in the working directory
//! 3. The built-in default application set

pub mod loader;
pub mod schema;
pub mod validator;

// Schema re-exports
pub use schema::{
    ApplicationDescriptor, LocalSourceSpec, RemoteSourceSpec, Settings, VercheckConfig,
};

// Loader re-exports
pub use loader::{
    default_config, load_config, load_config_file, parse_config, ConfigSource, LoadedConfig,
    CONFIG_FILE_NAME, DEFAULT_CONFIG,
};

// Validator re-exports
pub use validator::{validate, validate_config, ValidationError};

/// JSON Schema of the configuration file.
pub fn json_schema() -> serde_json::Value {
    let schema = schemars::schema_for!(VercheckConfig);
    serde_json::to_value(schema).unwrap_or_default()
}
