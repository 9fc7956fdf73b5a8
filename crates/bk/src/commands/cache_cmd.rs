//! `bk cache` -- icon cache maintenance.

use anyhow::{Context, Result};

use bundlekit_icons::{IconCache, IconClient};

use crate::cli::{CacheArgs, CacheCommands};
use crate::context::RuntimeContext;
use crate::output::format_size;

/// Execute the `bk cache` command.
pub fn run(ctx: &RuntimeContext, args: &CacheArgs) -> Result<()> {
    let cache = IconCache::new(&ctx.cache_dir, IconClient::from_env());

    match args.command {
        CacheCommands::Info => {
            let stats = cache.stats().context("could not inspect icon cache")?;
            println!(
                "{} cached icons, {}",
                stats.entries,
                format_size(stats.total_bytes)
            );
        }
        CacheCommands::Clear => {
            cache.clear().context("could not clear icon cache")?;
            if !ctx.quiet {
                println!("Icon cache cleared");
            }
        }
    }

    Ok(())
}
