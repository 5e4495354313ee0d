//! Evaluation of declared dependencies against the local state.

use std::collections::BTreeMap;

use super::result::{CheckResult, DependencyResult};
use crate::probe::{ProbeOutcome, SystemProbe};
use crate::registry::{DependencyManifest, PluginKey, Registries};
use crate::scope::{enumerate, Scope};
use crate::version::satisfies;

/// Checks plugin manifests against the registries and the host system.
///
/// Probe outcomes are cached per command for the lifetime of the checker.
pub struct DependencyChecker<'a> {
    registries: &'a Registries,
    probe: &'a dyn SystemProbe,
    probe_cache: BTreeMap<String, ProbeOutcome>,
}

impl<'a> DependencyChecker<'a> {
    pub fn new(registries: &'a Registries, probe: &'a dyn SystemProbe) -> Self {
        Self {
            registries,
            probe,
            probe_cache: BTreeMap::new(),
        }
    }

    /// Check every plugin selected by `scope`.
    pub fn check(&mut self, scope: &Scope) -> CheckResult {
        let mut result = CheckResult::new(scope.label(), scope.plugin().map(|k| k.to_string()));

        for target in enumerate(scope, self.registries) {
            let Some(manifest) = self
                .registries
                .load_manifest(&target.install_path)
                .filter(|manifest| !manifest.is_empty())
            else {
                tracing::debug!("{} declares no dependencies", target.plugin_key);
                continue;
            };
            self.check_manifest(&manifest, &target.plugin_key, &mut result);
        }

        tracing::debug!(
            "Evaluated {} dependencies, {} required failures",
            result.len(),
            result.required_failures().count()
        );
        result
    }

    /// Evaluate one manifest into the four buckets of `result`.
    pub fn check_manifest(
        &mut self,
        manifest: &DependencyManifest,
        dependent: &str,
        result: &mut CheckResult,
    ) {
        for (name, required) in &manifest.dependencies {
            result
                .dependencies
                .push(self.check_plugin_dependency(name, required, dependent));
        }
        for (name, required) in &manifest.optional_dependencies {
            result
                .optional_dependencies
                .push(self.check_plugin_dependency(name, required, dependent));
        }
        for (command, required) in &manifest.system_dependencies {
            result
                .system_dependencies
                .push(self.check_system_dependency(command, required, dependent));
        }
        for (command, required) in &manifest.optional_system_dependencies {
            result
                .optional_system_dependencies
                .push(self.check_system_dependency(command, required, dependent));
        }
    }

    /// Evaluate a dependency on another plugin (`name` or `name@marketplace`).
    pub fn check_plugin_dependency(
        &self,
        declared: &str,
        required: &str,
        dependent: &str,
    ) -> DependencyResult {
        let key = PluginKey::split(declared);
        let marketplace = key.marketplace();
        let mut dep = DependencyResult::plugin(&key.name, marketplace, dependent, required);

        let Some(info) = self.registries.installed_info(&key.name, marketplace) else {
            dep.valid = false;
            dep.help = match marketplace {
                Some(marketplace) => format!(
                    "Plugin {} from {} is not installed. Install with: claude plugin install {}",
                    key.name, marketplace, key.name
                ),
                None => format!(
                    "Plugin {} is not installed. Install with: claude plugin install {}",
                    key.name, key.name
                ),
            };
            return dep;
        };

        dep.installed = true;
        dep.installed_version = info.version;
        dep.enabled = self.registries.is_enabled(&key.name, marketplace);
        dep.valid = match dep.installed_version.as_deref() {
            Some(version) if !version.is_empty() => satisfies(version, required),
            _ => true,
        };

        if !dep.valid {
            dep.help = mismatch_help(dep.installed_version.as_deref(), required);
        } else if !dep.enabled {
            dep.help = format!("Plugin {} is installed but not enabled", key.name);
        }
        dep
    }

    /// Evaluate a dependency on a system command.
    pub fn check_system_dependency(
        &mut self,
        command: &str,
        required: &str,
        dependent: &str,
    ) -> DependencyResult {
        let mut dep = DependencyResult::command(command, dependent, required);
        let outcome = self.probe_cached(command);

        dep.installed = outcome.exists;
        dep.enabled = outcome.exists;
        dep.installed_version = outcome.version;

        if !outcome.exists {
            dep.valid = false;
            dep.help = format!(
                "Command '{}' is not installed or not in PATH. Please install {} to use this plugin.",
                command, command
            );
            return dep;
        }

        dep.valid = match dep.installed_version.as_deref() {
            Some(version) if !version.is_empty() && !required.is_empty() && required != "*" => {
                satisfies(version, required)
            }
            _ => true,
        };
        if !dep.valid {
            dep.help = mismatch_help(dep.installed_version.as_deref(), required);
        }
        dep
    }

    fn probe_cached(&mut self, command: &str) -> ProbeOutcome {
        if let Some(outcome) = self.probe_cache.get(command) {
            return outcome.clone();
        }
        let outcome = self.probe.probe(command);
        self.probe_cache
            .insert(command.to_string(), outcome.clone());
        outcome
    }
}

fn mismatch_help(installed: Option<&str>, required: &str) -> String {
    format!(
        "Installed version {} does not satisfy required version {}",
        installed.unwrap_or_default(),
        required
    )
}
