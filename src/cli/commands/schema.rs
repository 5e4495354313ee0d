//! The `schema` command.

use crate::check::CheckResult;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Prints the JSON Schema of the check result document.
pub struct SchemaCommand;

/// JSON Schema of [`CheckResult`], pretty-printed.
pub fn check_result_schema() -> Result<String> {
    let schema = schemars::schema_for!(CheckResult);
    Ok(serde_json::to_string_pretty(&schema)?)
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.output(&check_result_schema()?);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_names_document_fields() {
        let schema: serde_json::Value = serde_json::from_str(&check_result_schema().unwrap()).unwrap();
        let properties = &schema["properties"];
        assert!(properties.get("checkedScope").is_some());
        assert!(properties.get("optionalSystemDependencies").is_some());
        assert_eq!(schema["title"], "CheckResult");
    }
}
