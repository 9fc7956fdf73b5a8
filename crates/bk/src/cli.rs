//! Clap CLI definitions for the `bk` command.
//!
//! The launcher maps each keyword to one subcommand; the optional query text
//! the user typed after the keyword arrives as a positional argument.

use clap::{Args, Parser, Subcommand};

/// bk -- launcher workflow backend with bundled utilities.
///
/// Prints script-filter feedback on stdout for the launcher to render, and
/// calls external OS utilities for dialogs and notifications.
#[derive(Parser, Debug)]
#[command(
    name = "bk",
    about = "Launcher workflow backend with bundled utilities",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Workflow data directory (default: $alfred_workflow_data, then
    /// ~/.local/share/bundlekit).
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Workflow cache directory (default: $alfred_workflow_cache, then
    /// ~/.cache/bundlekit).
    #[arg(long, global = true)]
    pub cache_dir: Option<String>,

    /// Enable verbose/debug output on stderr.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the icon catalog (keyword: bundleicons).
    Icons(IconsArgs),

    /// Show a notification for an actioned icon result.
    Notify(NotifyArgs),

    /// Pick and save a new icon colour via a dialog (keyword: bundlecolour).
    Colour,

    /// Show the current time in a handful of timezones (keyword: bundletime).
    Times(TimesArgs),

    /// Inspect or clear the icon cache.
    Cache(CacheArgs),

    /// Print version information.
    Version,
}

/// Arguments for `bk icons`.
#[derive(Args, Debug)]
pub struct IconsArgs {
    /// Query text; empty shows a random selection.
    pub query: Option<String>,
}

/// Arguments for `bk notify`.
#[derive(Args, Debug)]
pub struct NotifyArgs {
    /// Selection argument from the icons feedback: `name|font|colour`.
    pub arg: String,
}

/// Arguments for `bk times`.
#[derive(Args, Debug)]
pub struct TimesArgs {
    /// Number of random timezones to show (plus local time and UTC).
    #[arg(long, default_value_t = 10)]
    pub zones: usize,
}

/// Arguments for `bk cache`.
#[derive(Args, Debug)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheCommands,
}

/// Subcommands of `bk cache`.
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show the number and total size of cached icons.
    Info,

    /// Delete all cached icons.
    Clear,
}
