//! The `check` command.

use std::path::PathBuf;

use anyhow::anyhow;

use crate::check::{CheckResult, DependencyChecker};
use crate::cli::args::CheckArgs;
use crate::config::{ConfigPaths, ProbeSettings};
use crate::error::Result;
use crate::probe::{CommandProbe, SystemProbe};
use crate::registry::Registries;
use crate::scope::Scope;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
    claude_dir: Option<PathBuf>,
    probe_settings: ProbeSettings,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs, claude_dir: Option<PathBuf>, probe_settings: ProbeSettings) -> Self {
        Self {
            args,
            claude_dir,
            probe_settings,
        }
    }

    /// Run the check against explicit registries and probe.
    pub fn run_with(
        &self,
        scope: &Scope,
        registries: &Registries,
        probe: &dyn SystemProbe,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let result = DependencyChecker::new(registries, probe).check(scope);
        ui.output(&self.render(&result)?);

        if result.passed() {
            ui.success(&format!(
                "All required dependencies satisfied ({} checked)",
                result.len()
            ));
            return Ok(CommandResult::success());
        }

        let failures = result.required_failures().count();
        ui.warning(&format!(
            "{} required {} not satisfied",
            failures,
            if failures == 1 {
                "dependency"
            } else {
                "dependencies"
            }
        ));
        Ok(CommandResult::failure(1))
    }

    fn render(&self, result: &CheckResult) -> Result<String> {
        let json = if self.args.pretty {
            serde_json::to_string_pretty(result)?
        } else {
            serde_json::to_string(result)?
        };
        Ok(json)
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let scope = self.args.scope()?;
        let paths = ConfigPaths::discover(self.claude_dir.as_deref())
            .ok_or_else(|| anyhow!("Could not locate the Claude configuration directory"))?;
        tracing::debug!("Reading plugin state from {}", paths.root.display());

        let registries = Registries::load(&paths);
        let probe = CommandProbe::new(self.probe_settings.clone());
        self.run_with(&scope, &registries, &probe, ui)
    }
}
