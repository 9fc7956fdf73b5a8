//! Locating helper binaries by name.
//!
//! A utility can come from three places, checked in order: an explicit
//! environment override (`BUNDLEKIT_<NAME>`), the workflow's bundled
//! utilities directory, and finally `$PATH`.

use std::env;
use std::path::{Path, PathBuf};

use crate::exec::{Result, UtilityError};

/// Subdirectory of the data directory where bundled utilities live.
const UTILITIES_SUBDIR: &str = "utilities";

/// Resolve a utility binary by name.
///
/// Priority: `BUNDLEKIT_<NAME>` env var (name uppercased, `-` as `_`), then
/// `<data>/utilities/<name>/<name>`, then a `$PATH` lookup.
///
/// # Errors
///
/// Returns [`UtilityError::NotFound`] when no candidate exists.
pub fn locate(name: &str, data_dir: &Path) -> Result<PathBuf> {
    // 1. Explicit override, mainly for tests and unusual installs.
    if let Ok(value) = env::var(env_var_for(name)) {
        let path = PathBuf::from(&value);
        if path.is_file() {
            return Ok(path);
        }
        tracing::warn!(name, override_path = %value, "utility override set but not a file");
    }

    // 2. Bundled copy under the workflow data directory.
    let bundled = data_dir.join(UTILITIES_SUBDIR).join(name).join(name);
    if bundled.is_file() {
        return Ok(bundled);
    }

    // 3. PATH lookup.
    if let Ok(path) = which::which(name) {
        return Ok(path);
    }

    Err(UtilityError::NotFound(name.to_string()))
}

/// The environment variable that overrides a utility's location.
///
/// `terminal-notifier` becomes `BUNDLEKIT_TERMINAL_NOTIFIER`.
pub fn env_var_for(name: &str) -> String {
    let upper: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("BUNDLEKIT_{upper}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::os::unix::fs::PermissionsExt;

    /// Drop a tiny executable script into `dir` and return its path.
    fn fake_binary(dir: &Path, rel: &str) -> PathBuf {
        let path = dir.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[test]
    fn env_var_names() {
        assert_eq!(env_var_for("Pashua"), "BUNDLEKIT_PASHUA");
        assert_eq!(
            env_var_for("terminal-notifier"),
            "BUNDLEKIT_TERMINAL_NOTIFIER"
        );
    }

    #[test]
    fn env_override_wins() {
        let tmp = tempfile::tempdir().unwrap();
        let fake = fake_binary(tmp.path(), "my-tool");
        unsafe {
            env::set_var("BUNDLEKIT_TEST_TOOL_A", &fake);
        }
        let found = locate("test-tool-a", tmp.path()).unwrap();
        unsafe {
            env::remove_var("BUNDLEKIT_TEST_TOOL_A");
        }
        assert_eq!(found, fake);
    }

    #[test]
    fn bundled_copy_is_found() {
        let tmp = tempfile::tempdir().unwrap();
        let bundled = fake_binary(tmp.path(), "utilities/test-tool-b/test-tool-b");
        let found = locate("test-tool-b", tmp.path()).unwrap();
        assert_eq!(found, bundled);
    }

    #[test]
    fn path_lookup_finds_common_binaries() {
        let tmp = tempfile::tempdir().unwrap();
        // `sh` exists on any Unix test machine.
        let found = locate("sh", tmp.path()).unwrap();
        assert!(found.is_file());
    }

    #[test]
    fn missing_utility_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let err = locate("definitely-not-installed-xyz", tmp.path()).unwrap_err();
        assert!(matches!(err, UtilityError::NotFound(_)));
        assert!(err.to_string().contains("definitely-not-installed-xyz"));
    }
}
