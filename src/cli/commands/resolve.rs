//! The `resolve` command.

use crate::cli::args::InputArgs;
use crate::error::Result;
use crate::report::{format_steps, generate_steps, has_required_issues, read_document};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Prints remediation steps for a check result.
pub struct ResolveCommand {
    args: InputArgs,
}

impl ResolveCommand {
    pub fn new(args: InputArgs) -> Self {
        Self { args }
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let result = read_document(self.args.file.as_deref())?;
        let steps = generate_steps(&result);
        ui.output(&format_steps(&steps));

        if has_required_issues(&steps) {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
