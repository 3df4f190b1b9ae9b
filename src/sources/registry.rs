//! Windows registry version lookup.
//!
//! Values are read from `HKEY_LOCAL_MACHINE`. On other platforms every
//! lookup reports [`LocalVersion::Unsupported`].

use super::local::LocalVersion;

/// Reason reported for registry sources outside Windows.
pub const UNSUPPORTED_REASON: &str = "registry lookups are only available on Windows";

/// Read a string value below `HKEY_LOCAL_MACHINE`.
#[cfg(windows)]
pub fn read_registry_value(key_path: &str, value_name: &str) -> LocalVersion {
    use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_READ};
    use winreg::RegKey;

    let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
    let key = match hklm.open_subkey_with_flags(key_path, KEY_READ) {
        Ok(key) => key,
        Err(e) => {
            tracing::debug!(key_path, error = %e, "Registry key not readable");
            return LocalVersion::Unreadable(format!("HKLM\\{}: {}", key_path, e));
        }
    };

    match key.get_value::<String, _>(value_name) {
        Ok(value) => LocalVersion::from_text(&value),
        Err(e) => {
            tracing::debug!(key_path, value_name, error = %e, "Registry value not readable");
            LocalVersion::Unreadable(format!("HKLM\\{} [{}]: {}", key_path, value_name, e))
        }
    }
}

/// Read a string value below `HKEY_LOCAL_MACHINE`.
#[cfg(not(windows))]
pub fn read_registry_value(key_path: &str, value_name: &str) -> LocalVersion {
    tracing::debug!(key_path, value_name, "Registry lookup skipped on this platform");
    LocalVersion::Unsupported(UNSUPPORTED_REASON.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(windows))]
    #[test]
    fn unsupported_off_windows() {
        let version = read_registry_value(r"SOFTWARE\HONOR\Hihonornote", "HonorWorkStationVersion");
        assert_eq!(version, LocalVersion::Unsupported(UNSUPPORTED_REASON.to_string()));
    }

    #[cfg(windows)]
    #[test]
    fn missing_key_is_unreadable() {
        let version = read_registry_value(r"SOFTWARE\vercheck-test\does-not-exist", "Version");
        assert!(matches!(version, LocalVersion::Unreadable(_)));
    }

    #[cfg(windows)]
    #[test]
    fn existing_string_value_is_found() {
        let version = read_registry_value(
            r"SOFTWARE\Microsoft\Windows NT\CurrentVersion",
            "ProductName",
        );
        assert!(version.is_found());
    }
}
