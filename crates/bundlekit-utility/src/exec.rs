//! Subprocess execution shared by the utility wrappers.
//!
//! Thin wrapper around `std::process::Command` so the rest of the codebase
//! deals with one error taxonomy instead of raw exit statuses.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};
use thiserror::Error;

/// Errors that can occur when resolving or running an external utility.
#[derive(Debug, Error)]
pub enum UtilityError {
    /// No usable binary was found for the requested utility.
    #[error("utility `{0}` not found (not bundled, not overridden, not on PATH)")]
    NotFound(String),

    /// The utility binary could not be spawned.
    #[error("failed to execute utility: {0}")]
    Spawn(#[from] std::io::Error),

    /// The utility exited with a non-zero status.
    #[error("utility failed (exit code {code:?}): {stderr}")]
    Failed {
        /// The exit code, or `None` if the process was killed by a signal.
        code: Option<i32>,
        /// The content of stderr.
        stderr: String,
    },
}

/// A specialized `Result` type for utility operations.
pub type Result<T> = std::result::Result<T, UtilityError>;

/// Run a utility with the given arguments and return its trimmed stdout.
///
/// # Errors
///
/// Returns [`UtilityError::Spawn`] if the binary cannot be started, or
/// [`UtilityError::Failed`] if it exits non-zero.
pub fn run<S: AsRef<OsStr>>(program: &Path, args: &[S]) -> Result<String> {
    tracing::debug!(program = %program.display(), "running utility");
    let output = Command::new(program).args(args).output()?;
    check(output)
}

/// Run a utility feeding `input` to its stdin, returning its trimmed stdout.
///
/// # Errors
///
/// Same as [`run`].
pub fn run_with_stdin<S: AsRef<OsStr>>(program: &Path, args: &[S], input: &str) -> Result<String> {
    use std::io::Write;

    tracing::debug!(program = %program.display(), "running utility with stdin");
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // The child may exit without draining stdin; a write error then is fine.
    if let Some(mut stdin) = child.stdin.take() {
        let _ = stdin.write_all(input.as_bytes());
    }

    let output = child.wait_with_output()?;
    check(output)
}

fn check(output: std::process::Output) -> Result<String> {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(UtilityError::Failed {
            code: output.status.code(),
            stderr,
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn run_captures_stdout() {
        let output = run(&PathBuf::from("/bin/echo"), &["hello", "wörld"]).unwrap();
        assert_eq!(output, "hello wörld");
    }

    #[test]
    fn run_missing_binary_is_spawn_error() {
        let result = run::<&str>(&PathBuf::from("/nonexistent/utility"), &[]);
        assert!(matches!(result, Err(UtilityError::Spawn(_))));
    }

    #[test]
    fn run_nonzero_exit_is_failed() {
        let result = run(&PathBuf::from("/bin/sh"), &["-c", "echo oops >&2; exit 3"]);
        match result.unwrap_err() {
            UtilityError::Failed { code, stderr } => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "oops");
            }
            other => panic!("expected Failed, got: {other:?}"),
        }
    }

    #[test]
    fn run_with_stdin_pipes_input() {
        let output = run_with_stdin(&PathBuf::from("/bin/cat"), &[] as &[&str], "a=1\nb=2\n").unwrap();
        assert_eq!(output, "a=1\nb=2");
    }
}
