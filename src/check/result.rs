//! The check result document.
//!
//! Serialized field names are camelCase:
//!
//! ```json
//! {
//!   "checkedScope": "enabled",
//!   "checkedPlugin": null,
//!   "dependencies": [
//!     {
//!       "plugin": "bar",
//!       "marketplace": "market-a",
//!       "dependent": "foo@market-a",
//!       "requiredVersion": ">=2.0.0",
//!       "installed": true,
//!       "enabled": true,
//!       "installedVersion": "1.5.0",
//!       "valid": false,
//!       "help": "Installed version 1.5.0 does not satisfy required version >=2.0.0"
//!     }
//!   ],
//!   "optionalDependencies": [],
//!   "systemDependencies": [],
//!   "optionalSystemDependencies": []
//! }
//! ```
//!
//! Documents read back by the `resolve` and `table` commands may omit fields;
//! missing entries default to a valid, uninstalled dependency on any version.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_required_version() -> String {
    "*".to_string()
}

fn default_scope() -> String {
    "enabled".to_string()
}

/// Outcome of checking one dependency edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DependencyResult {
    /// Required plugin name (plugin dependencies only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin: Option<String>,

    /// Required command (system dependencies only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Marketplace named by the declaration, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketplace: Option<String>,

    /// Key of the plugin that declared the dependency.
    #[serde(default)]
    pub dependent: String,

    /// The declared constraint string.
    #[serde(default = "default_required_version")]
    pub required_version: String,

    #[serde(default)]
    pub installed: bool,

    /// For commands this mirrors `installed`.
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub installed_version: Option<String>,

    #[serde(default = "default_true")]
    pub valid: bool,

    /// Remediation hint; empty when nothing needs doing.
    #[serde(default)]
    pub help: String,
}

impl DependencyResult {
    /// A not-yet-evaluated plugin dependency.
    pub fn plugin(name: &str, marketplace: Option<&str>, dependent: &str, required: &str) -> Self {
        Self {
            plugin: Some(name.to_string()),
            marketplace: marketplace.map(String::from),
            ..Self::blank(dependent, required)
        }
    }

    /// A not-yet-evaluated system dependency.
    pub fn command(command: &str, dependent: &str, required: &str) -> Self {
        Self {
            command: Some(command.to_string()),
            ..Self::blank(dependent, required)
        }
    }

    fn blank(dependent: &str, required: &str) -> Self {
        Self {
            plugin: None,
            command: None,
            marketplace: None,
            dependent: dependent.to_string(),
            required_version: required.to_string(),
            installed: false,
            enabled: false,
            installed_version: None,
            valid: false,
            help: String::new(),
        }
    }

    /// The plugin or command name, `unknown` when neither is set.
    pub fn name(&self) -> &str {
        self.plugin
            .as_deref()
            .or(self.command.as_deref())
            .unwrap_or("unknown")
    }

    /// `name@marketplace`, or the bare name.
    pub fn qualified_name(&self) -> String {
        match &self.marketplace {
            Some(marketplace) => format!("{}@{}", self.name(), marketplace),
            None => self.name().to_string(),
        }
    }
}

/// Results of one check run, bucketed by dependency kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    /// `enabled`, `installed` or `all`.
    #[serde(default = "default_scope")]
    pub checked_scope: String,

    /// The plugin named with `--plugin`, if any.
    #[serde(default)]
    pub checked_plugin: Option<String>,

    #[serde(default)]
    pub dependencies: Vec<DependencyResult>,

    #[serde(default)]
    pub optional_dependencies: Vec<DependencyResult>,

    #[serde(default)]
    pub system_dependencies: Vec<DependencyResult>,

    #[serde(default)]
    pub optional_system_dependencies: Vec<DependencyResult>,
}

impl CheckResult {
    /// An empty result for a scope.
    pub fn new(checked_scope: &str, checked_plugin: Option<String>) -> Self {
        Self {
            checked_scope: checked_scope.to_string(),
            checked_plugin,
            ..Self::default()
        }
    }

    /// Required dependencies that are not satisfied.
    pub fn required_failures(&self) -> impl Iterator<Item = &DependencyResult> {
        self.dependencies
            .iter()
            .chain(&self.system_dependencies)
            .filter(|dep| !dep.valid)
    }

    /// Whether every required plugin and system dependency is valid.
    ///
    /// Optional buckets never affect the outcome.
    pub fn passed(&self) -> bool {
        self.required_failures().next().is_none()
    }

    /// Total number of results across all buckets.
    pub fn len(&self) -> usize {
        self.dependencies.len()
            + self.optional_dependencies.len()
            + self.system_dependencies.len()
            + self.optional_system_dependencies.len()
    }

    /// Check if no dependency was evaluated.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
