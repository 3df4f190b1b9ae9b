//! Integration tests for config module public API.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use vercheck::config::{
    default_config, json_schema, load_config, parse_config, validate, ConfigSource,
    LocalSourceSpec, VercheckConfig, CONFIG_FILE_NAME,
};
use vercheck::VercheckError;

#[test]
fn public_api_is_accessible() {
    let config = VercheckConfig::default();
    assert!(config.applications.is_empty());
    assert_eq!(config.settings.timeout_secs, 10);
}

#[test]
fn built_in_set_is_valid() {
    let config = default_config().unwrap();
    validate(&config).unwrap();
    assert_eq!(
        config.keys(),
        ["pc_manager", "honor_workstation", "yoyo_assistant"]
    );
    assert!(matches!(
        config.application("honor_workstation").unwrap().local,
        LocalSourceSpec::RegistryValue { .. }
    ));
}

#[test]
fn project_file_replaces_built_in_set() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(CONFIG_FILE_NAME),
        r#"
settings:
  timeout_secs: 3
applications:
  - key: tool
    display_name: Tool
    local:
      type: registry_value
      key_path: SOFTWARE\Vendor\Tool
      value_name: Version
    remote:
      url: https://vendor.example/tool
      tag: span
      class: ver
"#,
    )
    .unwrap();

    let loaded = load_config(None, temp.path()).unwrap();
    assert!(matches!(loaded.source, ConfigSource::Project(_)));
    assert_eq!(loaded.config.settings.timeout_secs, 3);
    assert_eq!(loaded.config.settings.delay_ms, 500);
    assert_eq!(loaded.config.keys(), ["tool"]);
}

#[test]
fn explicit_path_wins() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(CONFIG_FILE_NAME), "applications: []\n").unwrap();
    let other = temp.path().join("other.yml");
    fs::write(&other, vercheck::config::DEFAULT_CONFIG).unwrap();

    let loaded = load_config(Some(&other), temp.path()).unwrap();
    assert_eq!(loaded.source.path(), Some(other.as_path()));
    assert_eq!(loaded.config.applications.len(), 3);
}

#[test]
fn invalid_config_is_rejected() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(CONFIG_FILE_NAME),
        r#"
applications:
  - key: dup
    display_name: One
    local: { type: xml_file, path: a.xml }
    remote: { url: https://a.example, tag: p, class: path }
  - key: dup
    display_name: Two
    local: { type: xml_file, path: b.xml }
    remote: { url: https://b.example, tag: p, class: path }
"#,
    )
    .unwrap();

    let err = load_config(None, temp.path()).unwrap_err();
    assert!(matches!(err, VercheckError::ConfigValidationError { .. }));
}

#[test]
fn malformed_yaml_is_parse_error() {
    let err = parse_config("applications: [", Path::new("broken.yml")).unwrap_err();
    assert!(matches!(err, VercheckError::ConfigParseError { .. }));
}

#[test]
fn schema_is_exported() {
    let schema = json_schema();
    assert!(schema["properties"]["settings"].is_object());
}
