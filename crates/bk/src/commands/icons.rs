//! `bk icons` -- search the icon catalog.
//!
//! With a query, fuzzy-filters the embedded catalog; without one, shows a
//! random selection. Each result carries a locally cached image from the icon
//! service; a failed download degrades to a row without an image rather than
//! aborting the listing.

use anyhow::Result;

use bundlekit_core::catalog;
use bundlekit_core::feedback::{Feedback, Item};
use bundlekit_core::filter::filter;
use bundlekit_icons::{IconCache, IconClient};

use crate::cli::IconsArgs;
use crate::context::RuntimeContext;
use crate::output::emit_feedback;

/// Result cap for the launcher's result list.
const MAX_RESULTS: usize = 5;

/// Matches scoring below this are noise, not results.
const MIN_SCORE: u32 = 30;

/// Execute the `bk icons` command.
pub fn run(ctx: &RuntimeContext, args: &IconsArgs) -> Result<()> {
    let colour = &ctx.settings.colour;
    let font = &ctx.settings.font;
    let query = args.query.as_deref().unwrap_or("").trim();

    let names: Vec<&str> = if query.is_empty() {
        catalog::random_sample(MAX_RESULTS)
    } else {
        filter(query, catalog::ICONS, MAX_RESULTS, MIN_SCORE)
            .into_iter()
            .map(|m| m.name)
            .collect()
    };
    tracing::debug!(query, results = names.len(), "icon search");

    let mut feedback = Feedback::new();

    if names.is_empty() {
        // A warning row beats the launcher falling back to web searches.
        feedback.push(Item::warning("No matching icons"));
        return emit_feedback(&feedback);
    }

    let cache = IconCache::new(&ctx.cache_dir, IconClient::from_env());
    for name in names {
        let mut item = Item::new(name)
            .subtitle(format!("Font Awesome // #{colour}"))
            .arg(format!("{name}|{font}|{colour}"));

        match cache.icon_path(font, name, colour) {
            Ok(path) => item = item.icon(path),
            Err(e) => {
                tracing::warn!(icon = name, error = %e, "icon unavailable, listing without image");
            }
        }
        feedback.push(item);
    }

    emit_feedback(&feedback)
}
