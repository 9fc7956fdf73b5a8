//! `bk colour` -- pick and save a new icon colour.
//!
//! Shows a form dialog prefilled with the current colour. Invalid input gets
//! an error dialog and another go at the form; cancel leaves the settings
//! untouched. A valid colour is saved and announced with a notification.

use anyhow::{Context, Result};

use bundlekit_config::save_settings;
use bundlekit_core::colour::Colour;
use bundlekit_utility::{dialog, notify};

use crate::context::RuntimeContext;

/// Execute the `bk colour` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let mut settings = ctx.settings.clone();

    loop {
        let config = form_config(settings.colour.as_str());
        let fields = dialog::form_dialog(&ctx.data_dir, &config)
            .context("could not show colour dialog")?;

        if fields.get("cancel").is_some_and(|v| v == "1") {
            tracing::debug!("colour dialog cancelled");
            return Ok(());
        }

        let raw = fields.get("colour").map(String::as_str).unwrap_or("");
        match Colour::parse(raw) {
            Ok(colour) => {
                settings.colour = colour;
                save_settings(&ctx.data_dir, &settings).context("could not save settings")?;

                // The colour is saved either way; a missing notifier should
                // not turn success into failure.
                let announcement = format!("#{}", settings.colour);
                if let Err(e) = notify(&ctx.data_dir, "New colour", &announcement) {
                    tracing::warn!(error = %e, "could not show notification");
                }
                return Ok(());
            }
            Err(_) => {
                tracing::debug!(input = raw, "invalid colour, re-prompting");
                dialog::message_box(&ctx.data_dir, "Invalid CSS colour", raw)
                    .context("could not show error dialog")?;
            }
        }
    }
}

/// Pashua-convention form: the current colour (read-only), a field for the
/// new one, save and cancel buttons.
fn form_config(current: &str) -> String {
    format!(
        "current.type = textfield\n\
         current.label = Current CSS colour\n\
         current.disabled = 1\n\
         current.default = {current}\n\
         \n\
         default.type = defaultbutton\n\
         default.label = Save colour\n\
         \n\
         cancel.type = cancelbutton\n\
         \n\
         colour.type = textfield\n\
         colour.label = New CSS colour\n\
         colour.tooltip = Enter a CSS colour (without #)\n"
    )
}
