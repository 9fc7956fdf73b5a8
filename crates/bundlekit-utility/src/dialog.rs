//! Dialog boxes via external dialog tools.
//!
//! Two conventions are supported: Pashua-style form dialogs (configuration
//! text on stdin, `key=value` lines on stdout) for input, and simple message
//! boxes (cocoaDialog `ok-msgbox`, with `osascript`/`zenity` fallbacks) for
//! errors.

use std::collections::BTreeMap;
use std::path::Path;

use crate::exec::{self, Result, UtilityError};
use crate::locate::locate;

/// Name of the preferred form dialog tool.
pub const FORM_TOOL: &str = "Pashua";

/// Name of the preferred message box tool.
pub const MSGBOX_TOOL: &str = "cocoaDialog";

/// Show a form dialog and return its fields.
///
/// The configuration text is passed on the tool's stdin (with `-e utf8`, so
/// non-ASCII labels survive) and the tool's `key=value` output lines are
/// collected into a map. Lines without `=` are ignored.
///
/// # Errors
///
/// Returns [`UtilityError::NotFound`] if no form dialog tool is installed,
/// or the execution error if it fails.
pub fn form_dialog(data_dir: &Path, config: &str) -> Result<BTreeMap<String, String>> {
    let tool = locate(FORM_TOOL, data_dir)?;
    let output = exec::run_with_stdin(&tool, &["-e", "utf8", "-"], config)?;
    Ok(parse_fields(&output))
}

/// Show a modal error/message box with an OK button.
///
/// Tries `cocoaDialog`, then `osascript`, then `zenity`.
///
/// # Errors
///
/// Returns [`UtilityError::NotFound`] if none of the tools is installed.
pub fn message_box(data_dir: &Path, title: &str, text: &str) -> Result<()> {
    if let Ok(tool) = locate(MSGBOX_TOOL, data_dir) {
        exec::run(
            &tool,
            &[
                "ok-msgbox",
                "--title",
                "Error",
                "--text",
                title,
                "--informative-text",
                text,
                "--button1",
                "OK",
            ],
        )?;
        return Ok(());
    }

    if let Ok(tool) = locate("osascript", data_dir) {
        let script = format!(
            "display dialog \"{}\" with title \"{}\" buttons {{\"OK\"}} default button 1",
            escape(text),
            escape(title),
        );
        exec::run(&tool, &["-e", script.as_str()])?;
        return Ok(());
    }

    if let Ok(tool) = locate("zenity", data_dir) {
        let title_arg = format!("--title={title}");
        let text_arg = format!("--text={text}");
        exec::run(&tool, &["--error", title_arg.as_str(), text_arg.as_str()])?;
        return Ok(());
    }

    Err(UtilityError::NotFound("message box tool".to_string()))
}

/// Parse `key=value` output lines into a map.
///
/// Values may contain `=`; only the first one splits. Keys and values are
/// trimmed.
fn parse_fields(output: &str) -> BTreeMap<String, String> {
    output
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            (!key.is_empty()).then(|| (key.to_string(), value.trim().to_string()))
        })
        .collect()
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
