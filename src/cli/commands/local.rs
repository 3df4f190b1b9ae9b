//! Local command implementation.
//!
//! The `vercheck local` command reports installed versions without
//! contacting any vendor page.

use serde::Serialize;

use crate::cli::args::LocalArgs;
use crate::error::Result;
use crate::sources::{resolve_local, LocalVersion};
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};
use super::display::to_json;

/// Installed version of one application.
#[derive(Debug, Serialize)]
pub struct LocalEntry {
    pub key: String,
    pub display_name: String,
    pub source: String,
    pub local_version: LocalVersion,
}

/// The local command implementation.
pub struct LocalCommand {
    context: CommandContext,
    args: LocalArgs,
}

impl LocalCommand {
    /// Create a new local command.
    pub fn new(context: CommandContext, args: LocalArgs) -> Self {
        Self { context, args }
    }

    fn collect(&self) -> Result<Vec<LocalEntry>> {
        let loaded = self.context.load_config()?;
        let entries = loaded
            .config
            .select(&self.args.only)?
            .into_iter()
            .map(|app| LocalEntry {
                local_version: resolve_local(&app.local),
                source: app.local.to_string(),
                key: app.key,
                display_name: app.display_name,
            })
            .collect();
        Ok(entries)
    }
}

impl Command for LocalCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let entries = self.collect()?;

        if self.args.json {
            ui.message(&to_json(&entries)?);
            return Ok(CommandResult::success());
        }

        if entries.is_empty() {
            ui.message("No applications configured.");
            return Ok(CommandResult::success());
        }

        ui.show_header("Installed versions");
        let mut table = Table::new(vec!["Application", "Installed", "Source"]);
        for entry in &entries {
            let version = entry.local_version.to_string();
            table.add_row(&[
                entry.display_name.as_str(),
                version.as_str(),
                entry.source.as_str(),
            ]);
        }
        ui.message(&table.render());

        let missing = entries
            .iter()
            .filter(|e| !e.local_version.is_found())
            .count();
        if missing > 0 {
            ui.warning(&format!(
                "{} of {} installed versions could not be detected",
                missing,
                entries.len()
            ));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup(dir: &TempDir) {
        let xml = dir.path().join("version.xml");
        fs::write(&xml, "<app><version>3.1.4</version></app>").unwrap();
        let config = format!(
            r#"
applications:
  - key: demo
    display_name: Demo App
    local:
      type: xml_file
      path: "{}"
    remote:
      url: https://example.com/demo
      tag: p
      class: version
  - key: gone
    display_name: Gone App
    local:
      type: xml_file
      path: "{}"
    remote:
      url: https://example.com/gone
      tag: p
      class: version
"#,
            xml.display(),
            dir.path().join("missing.xml").display()
        );
        fs::write(dir.path().join("vercheck.yml"), config).unwrap();
    }

    fn command(dir: &TempDir, args: LocalArgs) -> LocalCommand {
        LocalCommand::new(CommandContext::new(dir.path().to_path_buf(), None), args)
    }

    #[test]
    fn shows_detected_versions() {
        let temp = TempDir::new().unwrap();
        setup(&temp);
        let mut ui = MockUI::new();

        let result = command(&temp, LocalArgs::default()).execute(&mut ui).unwrap();
        assert!(result.success);
        assert!(ui.has_message("3.1.4"));
        assert!(ui.has_message("Gone App"));
        assert!(ui.has_warning("1 of 2"));
    }

    #[test]
    fn json_lists_states() {
        let temp = TempDir::new().unwrap();
        setup(&temp);
        let mut ui = MockUI::new();
        let args = LocalArgs {
            json: true,
            ..Default::default()
        };

        command(&temp, args).execute(&mut ui).unwrap();
        let json: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(json[0]["local_version"]["state"], "found");
        assert_eq!(json[0]["local_version"]["detail"], "3.1.4");
        assert_eq!(json[1]["local_version"]["state"], "absent");
    }

    #[test]
    fn only_filters_entries() {
        let temp = TempDir::new().unwrap();
        setup(&temp);
        let cmd = command(
            &temp,
            LocalArgs {
                only: vec!["demo".to_string()],
                json: false,
            },
        );
        let entries = cmd.collect().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key, "demo");
    }
}
