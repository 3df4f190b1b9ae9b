//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - Application keys must be present and unique
//! - Remote sources must point at an http(s) URL with a usable tag and class
//! - Local sources must name a file or a registry value
//! - The request timeout must be positive

use crate::config::schema::{ApplicationDescriptor, LocalSourceSpec, VercheckConfig};
use crate::error::{Result, VercheckError};
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Application key if error is application-specific
    pub application: Option<String>,
}

impl ValidationError {
    fn for_app(rule: &str, app: &ApplicationDescriptor, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            application: Some(app.key.clone()),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &VercheckConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_settings(config));
    errors.extend(validate_keys(config));
    for app in &config.applications {
        errors.extend(validate_remote(app));
        errors.extend(validate_local(app));
    }

    errors
}

fn validate_settings(config: &VercheckConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.settings.timeout_secs == 0 {
        errors.push(ValidationError {
            rule: "zero-timeout".to_string(),
            message: "settings.timeout_secs must be greater than zero".to_string(),
            application: None,
        });
    }

    errors
}

fn validate_keys(config: &VercheckConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, app) in config.applications.iter().enumerate() {
        if app.key.trim().is_empty() {
            errors.push(ValidationError {
                rule: "missing-key".to_string(),
                message: format!("Application #{} has an empty key", index + 1),
                application: None,
            });
            continue;
        }

        if !seen.insert(app.key.as_str()) {
            errors.push(ValidationError::for_app(
                "duplicate-key",
                app,
                format!("Application key '{}' is defined more than once", app.key),
            ));
        }

        if app.display_name.trim().is_empty() {
            errors.push(ValidationError::for_app(
                "missing-display-name",
                app,
                format!("Application '{}' has an empty display_name", app.key),
            ));
        }
    }

    errors
}

fn validate_remote(app: &ApplicationDescriptor) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let remote = &app.remote;

    if !(remote.url.starts_with("http://") || remote.url.starts_with("https://")) {
        errors.push(ValidationError::for_app(
            "invalid-url",
            app,
            format!(
                "Application '{}' has URL '{}' which is not http(s)",
                app.key, remote.url
            ),
        ));
    }

    if !is_element_name(&remote.tag) {
        errors.push(ValidationError::for_app(
            "invalid-tag",
            app,
            format!(
                "Application '{}' has tag '{}' which is not an element name",
                app.key, remote.tag
            ),
        ));
    }

    if remote.class.is_empty() || remote.class.chars().any(char::is_whitespace) {
        errors.push(ValidationError::for_app(
            "invalid-class",
            app,
            format!(
                "Application '{}' must name exactly one CSS class, got '{}'",
                app.key, remote.class
            ),
        ));
    }

    errors
}

fn validate_local(app: &ApplicationDescriptor) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    match &app.local {
        LocalSourceSpec::XmlFile { path } => {
            if path.as_os_str().is_empty() {
                errors.push(ValidationError::for_app(
                    "missing-xml-path",
                    app,
                    format!("Application '{}' has an empty XML path", app.key),
                ));
            }
        }
        LocalSourceSpec::RegistryValue {
            key_path,
            value_name,
        } => {
            if key_path.trim().is_empty() || value_name.trim().is_empty() {
                errors.push(ValidationError::for_app(
                    "incomplete-registry-value",
                    app,
                    format!(
                        "Application '{}' needs both key_path and value_name",
                        app.key
                    ),
                ));
            }
        }
    }

    errors
}

/// `[A-Za-z][A-Za-z0-9-]*`
fn is_element_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
        }
        _ => false,
    }
}

/// Validate configuration, failing on the first batch of errors.
pub fn validate(config: &VercheckConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(VercheckError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{RemoteSourceSpec, Settings};
    use std::path::PathBuf;

    fn app(key: &str) -> ApplicationDescriptor {
        ApplicationDescriptor {
            key: key.to_string(),
            display_name: format!("App {}", key),
            local: LocalSourceSpec::XmlFile {
                path: PathBuf::from("/opt/app/version.xml"),
            },
            remote: RemoteSourceSpec {
                url: "https://example.com/app".to_string(),
                tag: "p".to_string(),
                class: "path".to_string(),
            },
        }
    }

    fn config(apps: Vec<ApplicationDescriptor>) -> VercheckConfig {
        VercheckConfig {
            settings: Settings::default(),
            applications: apps,
        }
    }

    fn rules(config: &VercheckConfig) -> Vec<String> {
        validate_config(config).into_iter().map(|e| e.rule).collect()
    }

    #[test]
    fn valid_config_passes() {
        assert!(validate(&config(vec![app("a"), app("b")])).is_ok());
    }

    #[test]
    fn empty_application_list_is_valid() {
        assert!(validate(&config(vec![])).is_ok());
    }

    #[test]
    fn detects_duplicate_keys() {
        let errors = validate_config(&config(vec![app("a"), app("a")]));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "duplicate-key");
        assert_eq!(errors[0].application.as_deref(), Some("a"));
    }

    #[test]
    fn detects_empty_key() {
        assert_eq!(rules(&config(vec![app(" ")])), vec!["missing-key"]);
    }

    #[test]
    fn detects_empty_display_name() {
        let mut a = app("a");
        a.display_name = String::new();
        assert_eq!(rules(&config(vec![a])), vec!["missing-display-name"]);
    }

    #[test]
    fn detects_non_http_url() {
        let mut a = app("a");
        a.remote.url = "ftp://example.com".to_string();
        assert_eq!(rules(&config(vec![a])), vec!["invalid-url"]);
    }

    #[test]
    fn detects_bad_tag() {
        let mut a = app("a");
        a.remote.tag = "div.path".to_string();
        assert_eq!(rules(&config(vec![a])), vec!["invalid-tag"]);
    }

    #[test]
    fn accepts_custom_element_tag() {
        let mut a = app("a");
        a.remote.tag = "app-version".to_string();
        assert!(rules(&config(vec![a])).is_empty());
    }

    #[test]
    fn detects_multi_class_locator() {
        let mut a = app("a");
        a.remote.class = "btn text".to_string();
        assert_eq!(rules(&config(vec![a])), vec!["invalid-class"]);
    }

    #[test]
    fn detects_incomplete_registry_value() {
        let mut a = app("a");
        a.local = LocalSourceSpec::RegistryValue {
            key_path: r"SOFTWARE\Vendor".to_string(),
            value_name: String::new(),
        };
        assert_eq!(rules(&config(vec![a])), vec!["incomplete-registry-value"]);
    }

    #[test]
    fn detects_empty_xml_path() {
        let mut a = app("a");
        a.local = LocalSourceSpec::XmlFile {
            path: PathBuf::new(),
        };
        assert_eq!(rules(&config(vec![a])), vec!["missing-xml-path"]);
    }

    #[test]
    fn detects_zero_timeout() {
        let mut c = config(vec![app("a")]);
        c.settings.timeout_secs = 0;
        assert_eq!(rules(&c), vec!["zero-timeout"]);
    }

    #[test]
    fn collects_all_errors() {
        let mut a = app("a");
        a.remote.url = "nope".to_string();
        a.remote.class = String::new();
        let err = validate(&config(vec![a])).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("not http(s)"));
        assert!(msg.contains("exactly one CSS class"));
    }
}
