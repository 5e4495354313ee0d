//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::CONFIG_DIR_ENV;
use crate::error::{DepcheckError, Result};
use crate::registry::PluginKey;
use crate::scope::Scope;

/// Check that the dependencies declared by installed plugins are satisfied.
#[derive(Debug, Parser)]
#[command(name = "plugin-depcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Claude configuration directory (defaults to ~/.claude)
    #[arg(long, global = true, env = CONFIG_DIR_ENV, value_name = "DIR")]
    pub claude_dir: Option<PathBuf>,

    /// Timeout for each version probe, in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub probe_timeout: Option<u64>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Check options used when no subcommand is given
    #[command(flatten)]
    pub check: CheckArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check plugin dependencies and print the result as JSON (default)
    Check(CheckArgs),

    /// Print remediation steps for a check result
    Resolve(InputArgs),

    /// Render a check result as tables
    Table(InputArgs),

    /// Print the JSON Schema of the check result document
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Check all installed plugins
    #[arg(long, conflicts_with_all = ["all", "plugin"])]
    pub installed: bool,

    /// Check installed plugins and every plugin in known marketplaces
    #[arg(long, conflicts_with = "plugin")]
    pub all: bool,

    /// Check one plugin (name or name@marketplace)
    #[arg(long, value_name = "NAME")]
    pub plugin: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl CheckArgs {
    /// Whether any check flag was given.
    pub fn is_set(&self) -> bool {
        self.installed || self.all || self.plugin.is_some() || self.pretty
    }

    /// Combine flags of the `check` subcommand with those given before it.
    ///
    /// Scope flags from both positions must still select a single scope.
    pub fn merged_with(&self, outer: &CheckArgs) -> Result<CheckArgs> {
        if self.plugin.is_some() && outer.plugin.is_some() && self.plugin != outer.plugin {
            return Err(DepcheckError::ConflictingArguments {
                message: "--plugin given twice with different values".to_string(),
            });
        }
        let merged = CheckArgs {
            installed: self.installed || outer.installed,
            all: self.all || outer.all,
            plugin: self.plugin.clone().or_else(|| outer.plugin.clone()),
            pretty: self.pretty || outer.pretty,
        };
        let scopes = [merged.installed, merged.all, merged.plugin.is_some()]
            .into_iter()
            .filter(|set| *set)
            .count();
        if scopes > 1 {
            return Err(DepcheckError::ConflictingArguments {
                message: "--installed, --all and --plugin are mutually exclusive".to_string(),
            });
        }
        Ok(merged)
    }

    /// The scope selected by the flags; enabled plugins by default.
    pub fn scope(&self) -> Result<Scope> {
        if let Some(plugin) = &self.plugin {
            return Ok(Scope::Plugin(plugin.parse::<PluginKey>()?));
        }
        Ok(if self.installed {
            Scope::Installed
        } else if self.all {
            Scope::All
        } else {
            Scope::Enabled
        })
    }
}

/// Arguments for commands that read a check result.
#[derive(Debug, Clone, clap::Args)]
pub struct InputArgs {
    /// Check result JSON file (reads stdin when omitted)
    pub file: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
