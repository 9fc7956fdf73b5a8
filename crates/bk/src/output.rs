//! Output helpers for the `bk` CLI.
//!
//! Filter commands speak the launcher's feedback contract: exactly one JSON
//! document on stdout. Everything human-readable (logs, errors) goes to
//! stderr so it never corrupts the feedback stream.

use std::io::{self, Write};

use anyhow::Result;
use bundlekit_core::feedback::Feedback;

/// Print a feedback document to stdout.
///
/// Broken pipes (launcher gone away) are ignored.
pub fn emit_feedback(feedback: &Feedback) -> Result<()> {
    let json = feedback.to_json()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = writeln!(handle, "{json}");
    Ok(())
}

/// Format a byte count for humans.
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;
    if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KiB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MiB");
    }
}
