//! Settings and directory resolution for the bundlekit workflow.
//!
//! The launcher hands workflows their data and cache directories through
//! environment variables; this crate resolves those (with sane fallbacks for
//! running outside the launcher) and persists workflow settings as YAML.

pub mod dirs;
pub mod settings;

pub use dirs::{cache_dir, data_dir};
pub use settings::{load_settings, save_settings, Settings};
