//! Init command implementation.
//!
//! The `vercheck init` command writes the built-in application set to
//! `vercheck.yml` so it can be edited.

use std::fs;
use std::path::PathBuf;

use crate::cli::args::InitArgs;
use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    context: CommandContext,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(context: CommandContext, args: InitArgs) -> Self {
        Self { context, args }
    }

    /// Path the configuration is written to.
    pub fn target(&self) -> PathBuf {
        self.context.working_dir.join(CONFIG_FILE_NAME)
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let target = self.target();

        if target.exists() && !self.args.force {
            ui.error(&format!("{} already exists", target.display()));
            ui.show_hint("Use --force to overwrite it");
            return Ok(CommandResult::failure(1));
        }

        fs::write(&target, DEFAULT_CONFIG)?;
        tracing::debug!(path = %target.display(), "Wrote default configuration");

        ui.success(&format!("Created {}", target.display()));
        ui.show_hint("Edit the file, then run `vercheck check`");
        Ok(CommandResult::success())
    }
}
