//! List command implementation.
//!
//! The `vercheck list` command shows the configured applications and where
//! their versions are read from.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::config::ApplicationDescriptor;
use crate::error::Result;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};
use super::display::to_json;

/// JSON shape of `list --json`.
#[derive(Debug, Serialize)]
struct ListOutput<'a> {
    source: String,
    applications: &'a [ApplicationDescriptor],
}

/// The list command implementation.
pub struct ListCommand {
    context: CommandContext,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(context: CommandContext, args: ListArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let loaded = self.context.load_config()?;
        let apps = &loaded.config.applications;

        if self.args.json {
            let output = ListOutput {
                source: loaded.source.to_string(),
                applications: apps,
            };
            ui.message(&to_json(&output)?);
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("Applications ({})", loaded.source));
        if apps.is_empty() {
            ui.message("No applications configured.");
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(vec!["Key", "Application", "Installed from", "Published at"]);
        for app in apps {
            let local = app.local.to_string();
            table.add_row(&[
                app.key.as_str(),
                app.display_name.as_str(),
                local.as_str(),
                app.remote.url.as_str(),
            ]);
        }
        ui.message(&table.render());

        if ui.output_mode().shows_details() {
            for app in apps {
                ui.show_hint(&format!(
                    "{}: <{} class=\"{}\">",
                    app.key, app.remote.tag, app.remote.class
                ));
            }
        }

        Ok(CommandResult::success())
    }
}
