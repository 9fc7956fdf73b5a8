//! `bk notify` -- notification for an actioned icon result.
//!
//! The launcher passes back the `arg` of the selected row, which `bk icons`
//! formats as `name|font|colour`.

use anyhow::{bail, Context, Result};

use bundlekit_utility::notify;

use crate::cli::NotifyArgs;
use crate::context::RuntimeContext;

/// Execute the `bk notify` command.
pub fn run(ctx: &RuntimeContext, args: &NotifyArgs) -> Result<()> {
    let mut parts = args.arg.splitn(3, '|');
    let (Some(name), Some(font), Some(_colour)) = (parts.next(), parts.next(), parts.next())
    else {
        bail!("malformed selection argument `{}` (expected name|font|colour)", args.arg);
    };

    let message = format!("`{name}` from `{font}`");
    notify(&ctx.data_dir, "Bundler Icon", &message).context("could not show notification")
}
