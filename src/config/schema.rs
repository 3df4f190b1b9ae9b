//! Configuration schema definitions for vercheck.
//!
//! This module contains all the struct definitions that map to
//! the YAML configuration file format.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, VercheckError};

/// Root configuration structure for vercheck.yml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct VercheckConfig {
    /// Global settings
    pub settings: Settings,

    /// Applications to check, in check order
    pub applications: Vec<ApplicationDescriptor>,
}

impl VercheckConfig {
    /// Look up an application by key.
    pub fn application(&self, key: &str) -> Option<&ApplicationDescriptor> {
        self.applications.iter().find(|a| a.key == key)
    }

    /// Application keys in configured order.
    pub fn keys(&self) -> Vec<&str> {
        self.applications.iter().map(|a| a.key.as_str()).collect()
    }

    /// Applications named in `only`, in configured order.
    ///
    /// An empty `only` selects every application. Unknown keys are an
    /// error.
    pub fn select<S: AsRef<str>>(&self, only: &[S]) -> Result<Vec<ApplicationDescriptor>> {
        if let Some(unknown) = only
            .iter()
            .map(AsRef::as_ref)
            .find(|key| self.application(key).is_none())
        {
            return Err(VercheckError::UnknownApplication {
                key: unknown.to_string(),
            });
        }

        Ok(self
            .applications
            .iter()
            .filter(|app| only.is_empty() || only.iter().any(|k| k.as_ref() == app.key))
            .cloned()
            .collect())
    }
}

/// Global settings that apply to every check run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Settings {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Delay between applications in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// User-Agent header sent to vendor pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Settings {
    /// Request timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Courtesy delay as a duration.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            delay_ms: default_delay_ms(),
            user_agent: None,
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_delay_ms() -> u64 {
    500
}

/// A vendor application whose installed version is checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ApplicationDescriptor {
    /// Unique identifier
    pub key: String,

    /// Human-readable name
    pub display_name: String,

    /// Where the installed version is read from
    pub local: LocalSourceSpec,

    /// Where the published version is scraped from
    pub remote: RemoteSourceSpec,
}

/// How to obtain the installed version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LocalSourceSpec {
    /// First `<version>` element anywhere in an XML file
    XmlFile {
        /// Path to the XML file
        path: PathBuf,
    },

    /// String value under HKEY_LOCAL_MACHINE
    RegistryValue {
        /// Key path below HKEY_LOCAL_MACHINE, e.g. `SOFTWARE\Vendor\App`
        key_path: String,
        /// Name of the string value
        value_name: String,
    },
}

impl fmt::Display for LocalSourceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XmlFile { path } => write!(f, "xml: {}", path.display()),
            Self::RegistryValue {
                key_path,
                value_name,
            } => write!(f, "registry: HKLM\\{} [{}]", key_path, value_name),
        }
    }
}

/// Where the published version lives in a vendor page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RemoteSourceSpec {
    /// Page URL
    pub url: String,

    /// Element name holding the version, e.g. `p`
    pub tag: String,

    /// CSS class the element must carry
    pub class: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.timeout(), Duration::from_secs(10));
        assert_eq!(settings.delay(), Duration::from_millis(500));
        assert!(settings.user_agent.is_none());
    }

    #[test]
    fn parses_xml_source() {
        let yaml = "type: xml_file\npath: /opt/app/version.xml";
        let spec: LocalSourceSpec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            spec,
            LocalSourceSpec::XmlFile {
                path: PathBuf::from("/opt/app/version.xml")
            }
        );
    }

    #[test]
    fn parses_registry_source() {
        let yaml = "type: registry_value\nkey_path: SOFTWARE\\Vendor\nvalue_name: Version";
        let spec: LocalSourceSpec = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(spec, LocalSourceSpec::RegistryValue { .. }));
    }

    #[test]
    fn rejects_unknown_source_type() {
        let yaml = "type: plist\npath: /x";
        assert!(serde_yaml::from_str::<LocalSourceSpec>(yaml).is_err());
    }

    #[test]
    fn partial_settings_use_defaults() {
        let yaml = "settings:\n  timeout_secs: 3\napplications: []";
        let config: VercheckConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.settings.timeout_secs, 3);
        assert_eq!(config.settings.delay_ms, 500);
    }

    #[test]
    fn local_source_display() {
        let reg = LocalSourceSpec::RegistryValue {
            key_path: r"SOFTWARE\HONOR\Hihonornote".to_string(),
            value_name: "HonorWorkStationVersion".to_string(),
        };
        assert_eq!(
            reg.to_string(),
            r"registry: HKLM\SOFTWARE\HONOR\Hihonornote [HonorWorkStationVersion]"
        );
    }

    fn config_with(keys: &[&str]) -> VercheckConfig {
        VercheckConfig {
            settings: Settings::default(),
            applications: keys
                .iter()
                .map(|key| ApplicationDescriptor {
                    key: key.to_string(),
                    display_name: key.to_uppercase(),
                    local: LocalSourceSpec::XmlFile {
                        path: PathBuf::from("v.xml"),
                    },
                    remote: RemoteSourceSpec {
                        url: "https://example.com".to_string(),
                        tag: "p".to_string(),
                        class: "path".to_string(),
                    },
                })
                .collect(),
        }
    }

    #[test]
    fn select_keeps_configured_order() {
        let config = config_with(&["a", "b", "c"]);
        let selected = config.select(&["c", "a"]).unwrap();
        let keys: Vec<_> = selected.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn empty_selection_is_everything() {
        let config = config_with(&["a", "b"]);
        let none: [&str; 0] = [];
        assert_eq!(config.select(&none).unwrap().len(), 2);
    }

    #[test]
    fn unknown_key_is_error() {
        let config = config_with(&["a"]);
        let err = config.select(&["zz"]).unwrap_err();
        assert!(matches!(err, VercheckError::UnknownApplication { ref key } if key == "zz"));
    }

    #[test]
    fn application_lookup() {
        let config = VercheckConfig {
            settings: Settings::default(),
            applications: vec![ApplicationDescriptor {
                key: "app".to_string(),
                display_name: "App".to_string(),
                local: LocalSourceSpec::XmlFile {
                    path: PathBuf::from("v.xml"),
                },
                remote: RemoteSourceSpec {
                    url: "https://example.com".to_string(),
                    tag: "p".to_string(),
                    class: "path".to_string(),
                },
            }],
        };
        assert!(config.application("app").is_some());
        assert!(config.application("other").is_none());
        assert_eq!(config.keys(), vec!["app"]);
    }
}
