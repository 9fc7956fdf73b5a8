//! `bk version` -- print version information.

use anyhow::Result;

/// Execute the `bk version` command.
pub fn run() -> Result<()> {
    println!("bk {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
