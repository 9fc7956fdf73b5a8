//! Resolution of the workflow's data and cache directories.
//!
//! When the launcher runs a workflow it exports per-workflow directories in
//! `alfred_workflow_data` and `alfred_workflow_cache`. Outside the launcher
//! (tests, manual runs) we fall back to home-relative defaults.

use std::env;
use std::path::PathBuf;

use crate::settings::ConfigError;

/// Environment variable the launcher sets for the workflow data directory.
const DATA_DIR_ENV: &str = "alfred_workflow_data";

/// Environment variable the launcher sets for the workflow cache directory.
const CACHE_DIR_ENV: &str = "alfred_workflow_cache";

/// Directory name used in the home-relative fallbacks.
const FALLBACK_NAME: &str = "bundlekit";

/// Resolve the workflow data directory.
///
/// Priority: `alfred_workflow_data` env var, then
/// `~/.local/share/bundlekit`. The directory is not created here.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDir`] when neither the env var nor a home
/// directory is available.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = env_dir(DATA_DIR_ENV) {
        return Ok(dir);
    }
    let home = home::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".local").join("share").join(FALLBACK_NAME))
}

/// Resolve the workflow cache directory.
///
/// Priority: `alfred_workflow_cache` env var, then `~/.cache/bundlekit`.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDir`] when neither the env var nor a home
/// directory is available.
pub fn cache_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = env_dir(CACHE_DIR_ENV) {
        return Ok(dir);
    }
    let home = home::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".cache").join(FALLBACK_NAME))
}

/// Read an env var as a path, treating unset and empty the same.
fn env_dir(var: &str) -> Option<PathBuf> {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var tests mutate process state; keep each one self-contained and
    // restore what it touched.

    #[test]
    fn env_dir_ignores_empty() {
        unsafe {
            env::set_var("BUNDLEKIT_TEST_EMPTY_DIR", "  ");
        }
        assert_eq!(env_dir("BUNDLEKIT_TEST_EMPTY_DIR"), None);
        unsafe {
            env::remove_var("BUNDLEKIT_TEST_EMPTY_DIR");
        }
    }

    #[test]
    fn env_dir_reads_value() {
        unsafe {
            env::set_var("BUNDLEKIT_TEST_SOME_DIR", "/tmp/wf-data");
        }
        assert_eq!(
            env_dir("BUNDLEKIT_TEST_SOME_DIR"),
            Some(PathBuf::from("/tmp/wf-data"))
        );
        unsafe {
            env::remove_var("BUNDLEKIT_TEST_SOME_DIR");
        }
    }

    #[test]
    fn fallback_is_home_relative() {
        // Only meaningful when the launcher env var is absent in the test
        // environment, which is the normal case for `cargo test`.
        if env::var(DATA_DIR_ENV).is_ok() {
            return;
        }
        let dir = data_dir().unwrap();
        assert!(dir.ends_with(".local/share/bundlekit"), "{}", dir.display());
    }
}
