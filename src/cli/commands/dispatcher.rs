//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::config::ProbeSettings;
use crate::error::{DepcheckError, Result};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    claude_dir: Option<PathBuf>,
    probe_settings: ProbeSettings,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    ///
    /// `claude_dir` overrides configuration directory discovery.
    pub fn new(claude_dir: Option<PathBuf>, probe_settings: ProbeSettings) -> Self {
        Self {
            claude_dir,
            probe_settings,
        }
    }

    /// The explicit configuration directory, if any.
    pub fn claude_dir(&self) -> Option<&Path> {
        self.claude_dir.as_deref()
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => self.check(&args.merged_with(&cli.check)?).execute(ui),
            Some(_) if cli.check.is_set() => Err(DepcheckError::ConflictingArguments {
                message: "--installed, --all, --plugin and --pretty only apply to check"
                    .to_string(),
            }),
            Some(Commands::Resolve(args)) => {
                let cmd = super::resolve::ResolveCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Table(args)) => {
                let cmd = super::table::TableCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Schema) => super::schema::SchemaCommand.execute(ui),
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => self.check(&cli.check).execute(ui),
        }
    }

    fn check(&self, args: &CheckArgs) -> super::check::CheckCommand {
        super::check::CheckCommand::new(
            args.clone(),
            self.claude_dir.clone(),
            self.probe_settings.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher =
            CommandDispatcher::new(Some(PathBuf::from("/test")), ProbeSettings::default());
        assert_eq!(dispatcher.claude_dir(), Some(Path::new("/test")));
    }

    #[test]
    fn dispatches_schema() {
        use clap::Parser;
        let cli = Cli::parse_from(["plugin-depcheck", "schema"]);
        let mut ui = crate::ui::MockUI::new();
        let dispatcher = CommandDispatcher::new(None, ProbeSettings::default());

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert!(result.success);
        assert!(ui.outputs()[0].contains("checkedScope"));
    }

    #[test]
    fn check_flags_rejected_for_other_subcommands() {
        use clap::Parser;
        let cli = Cli::parse_from(["plugin-depcheck", "--all", "schema"]);
        let mut ui = crate::ui::MockUI::new();
        let dispatcher = CommandDispatcher::new(None, ProbeSettings::default());

        let err = dispatcher.dispatch(&cli, &mut ui).unwrap_err();
        assert!(matches!(err, DepcheckError::ConflictingArguments { .. }));
        assert!(ui.outputs().is_empty());
    }

    #[test]
    fn flags_before_check_select_scope() {
        use clap::Parser;
        let temp = tempfile::TempDir::new().unwrap();
        let cli = Cli::parse_from(["plugin-depcheck", "--installed", "check"]);
        let mut ui = crate::ui::MockUI::new();
        let dispatcher =
            CommandDispatcher::new(Some(temp.path().to_path_buf()), ProbeSettings::default());

        dispatcher.dispatch(&cli, &mut ui).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&ui.outputs()[0]).unwrap();
        assert_eq!(doc["checkedScope"], "installed");
    }

    #[test]
    fn bare_invocation_checks_enabled_plugins() {
        use clap::Parser;
        let temp = tempfile::TempDir::new().unwrap();
        let cli = Cli::parse_from(["plugin-depcheck"]);
        let mut ui = crate::ui::MockUI::new();
        let dispatcher =
            CommandDispatcher::new(Some(temp.path().to_path_buf()), ProbeSettings::default());

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert!(result.success);
        let doc: serde_json::Value = serde_json::from_str(&ui.outputs()[0]).unwrap();
        assert_eq!(doc["checkedScope"], "enabled");
        assert_eq!(doc["dependencies"], serde_json::json!([]));
    }
}
