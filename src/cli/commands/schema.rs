//! Schema command implementation.
//!
//! The `malla schema` command prints the JSON Schema of the curriculum file,
//! for editor integration.

use crate::config::curriculum_schema;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
pub struct SchemaCommand;

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema =
            serde_json::to_string_pretty(&curriculum_schema()).map_err(anyhow::Error::from)?;
        ui.output(&schema);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn prints_json_schema() {
        let mut ui = MockUI::new();

        let result = SchemaCommand.execute(&mut ui).unwrap();

        assert!(result.success);
        let value: serde_json::Value = serde_json::from_str(&ui.output_text()).unwrap();
        assert!(value["$schema"].is_string());
        assert!(value["properties"]["semesters"].is_object());
    }
}
