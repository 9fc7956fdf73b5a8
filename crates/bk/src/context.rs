//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds everything a command handler needs: resolved
//! data and cache directories, loaded settings, and the global flags.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bundlekit_config::{load_settings, Settings};

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Workflow data directory (settings, bundled utilities).
    pub data_dir: PathBuf,

    /// Workflow cache directory (downloaded icons).
    pub cache_dir: PathBuf,

    /// Loaded workflow settings.
    pub settings: Settings,

    /// Verbose output.
    pub verbose: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// Directory priority is flag > launcher env var > home-relative
    /// fallback; settings are loaded from the resolved data directory.
    pub fn from_global_args(global: &GlobalArgs) -> Result<Self> {
        let data_dir = match &global.data_dir {
            Some(dir) => PathBuf::from(dir),
            None => bundlekit_config::data_dir().context("could not resolve data directory")?,
        };
        let cache_dir = match &global.cache_dir {
            Some(dir) => PathBuf::from(dir),
            None => bundlekit_config::cache_dir().context("could not resolve cache directory")?,
        };

        let settings = load_settings(&data_dir)
            .with_context(|| format!("could not load settings from {}", data_dir.display()))?;

        Ok(Self {
            data_dir,
            cache_dir,
            settings,
            verbose: global.verbose,
            quiet: global.quiet,
        })
    }
}
