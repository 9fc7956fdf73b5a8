//! Desktop notifications.
//!
//! Tries the notifiers a user is likely to have, in order: the dedicated
//! `terminal-notifier` tool, `osascript` (macOS built-in), then `notify-send`
//! (Linux desktops). The first one found is used; if none exists the call
//! fails and nothing is shown.

use std::path::Path;

use crate::exec::{self, Result, UtilityError};
use crate::locate::locate;

/// Show a desktop notification with a title and message.
///
/// # Errors
///
/// Returns [`UtilityError::NotFound`] if no notifier is installed, or the
/// underlying execution error if the chosen notifier fails.
pub fn notify(data_dir: &Path, title: &str, message: &str) -> Result<()> {
    tracing::debug!(title, message, "notify");

    if let Ok(tool) = locate("terminal-notifier", data_dir) {
        exec::run(&tool, &["-title", title, "-message", message])?;
        return Ok(());
    }

    if let Ok(tool) = locate("osascript", data_dir) {
        let script = format!(
            "display notification \"{}\" with title \"{}\"",
            applescript_escape(message),
            applescript_escape(title),
        );
        exec::run(&tool, &["-e", script.as_str()])?;
        return Ok(());
    }

    if let Ok(tool) = locate("notify-send", data_dir) {
        exec::run(&tool, &[title, message])?;
        return Ok(());
    }

    Err(UtilityError::NotFound("notifier".to_string()))
}

/// Escape a string for embedding in a double-quoted AppleScript literal.
fn applescript_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
