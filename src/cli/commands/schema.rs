//! Schema command implementation.
//!
//! Prints the JSON Schema of `vercheck.yml` for editor integration.

use crate::config::json_schema;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::to_json;

/// The schema command implementation.
#[derive(Debug, Default)]
pub struct SchemaCommand;

impl SchemaCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(&to_json(&json_schema())?);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn prints_schema() {
        let mut ui = MockUI::new();
        let result = SchemaCommand::new().execute(&mut ui).unwrap();
        assert!(result.success);

        let schema: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert!(schema["properties"]["applications"].is_object());
    }
}
