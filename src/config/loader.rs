//! Configuration file discovery and loading.
//!
//! This module handles finding the configuration file and falling back
//! to the built-in application set when none exists.

use crate::config::schema::VercheckConfig;
use crate::config::validator::validate;
use crate::error::{Result, VercheckError};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "vercheck.yml";

/// The built-in application set, also written by `vercheck init`.
pub const DEFAULT_CONFIG: &str = include_str!("default_applications.yml");

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path given with `--config` or `VERCHECK_CONFIG`.
    Explicit(PathBuf),
    /// `vercheck.yml` in the working directory.
    Project(PathBuf),
    /// Embedded default application set.
    BuiltIn,
}

impl ConfigSource {
    /// Decide which configuration to load.
    ///
    /// An explicit path always wins, even if it does not exist (loading
    /// it then fails with `ConfigNotFound`).
    pub fn discover(explicit: Option<&Path>, working_dir: &Path) -> Self {
        if let Some(path) = explicit {
            return Self::Explicit(path.to_path_buf());
        }

        let project = working_dir.join(CONFIG_FILE_NAME);
        if project.is_file() {
            Self::Project(project)
        } else {
            Self::BuiltIn
        }
    }

    /// Path of the configuration file, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) => Some(p),
            Self::BuiltIn => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path() {
            Some(path) => write!(f, "{}", path.display()),
            None => f.write_str("built-in defaults"),
        }
    }
}

/// A validated configuration together with its origin.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed configuration.
    pub config: VercheckConfig,
    /// Where it was loaded from.
    pub source: ConfigSource,
}

/// Load a single config file and parse it into VercheckConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<VercheckConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            VercheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            VercheckError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into VercheckConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<VercheckConfig> {
    serde_yaml::from_str(content).map_err(|e| VercheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// The embedded default configuration.
pub fn default_config() -> Result<VercheckConfig> {
    parse_config(DEFAULT_CONFIG, Path::new("<built-in>"))
}

/// Discover, parse, and validate the configuration.
pub fn load_config(explicit: Option<&Path>, working_dir: &Path) -> Result<LoadedConfig> {
    let source = ConfigSource::discover(explicit, working_dir);
    let config = match source.path() {
        Some(path) => load_config_file(path)?,
        None => default_config()?,
    };
    validate(&config)?;

    tracing::debug!(
        source = %source,
        applications = config.applications.len(),
        "Loaded configuration"
    );

    Ok(LoadedConfig { config, source })
}
