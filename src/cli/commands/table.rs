//! The `table` command.

use crate::cli::args::InputArgs;
use crate::error::Result;
use crate::report::{read_document, render_check_result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Renders a check result as box-drawn tables.
pub struct TableCommand {
    args: InputArgs,
}

impl TableCommand {
    pub fn new(args: InputArgs) -> Self {
        Self { args }
    }
}

impl Command for TableCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let result = read_document(self.args.file.as_deref())?;
        ui.output(&render_check_result(&result));
        Ok(CommandResult::success())
    }
}
