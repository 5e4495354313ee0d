//! Selection of the plugins whose manifests are evaluated.
//!
//! | Scope | Targets |
//! |-------|---------|
//! | `enabled` | every enabled key that has an install record |
//! | `installed` | every key in the installed registry |
//! | `all` | installed keys plus plugins found in known marketplaces |
//! | plugin | one named plugin, if installed |
//!
//! A plugin key is never produced twice, and targets without an install
//! path are dropped.

pub mod discovery;

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use crate::registry::{InstalledPluginRecord, PluginKey, Registries};

pub use discovery::marketplace_plugins;

/// Which plugins to check.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Scope {
    #[default]
    Enabled,
    Installed,
    All,
    Plugin(PluginKey),
}

impl Scope {
    /// The scope label written to `checkedScope`.
    ///
    /// A single-plugin check reports the default `enabled` label; the plugin
    /// itself goes to `checkedPlugin`.
    pub fn label(&self) -> &'static str {
        match self {
            Scope::Enabled | Scope::Plugin(_) => "enabled",
            Scope::Installed => "installed",
            Scope::All => "all",
        }
    }

    /// The requested plugin for a single-plugin check.
    pub fn plugin(&self) -> Option<&PluginKey> {
        match self {
            Scope::Plugin(key) => Some(key),
            _ => None,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Plugin(key) => write!(f, "plugin {}", key),
            other => f.write_str(other.label()),
        }
    }
}

/// A plugin whose manifest will be evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginTarget {
    /// Key used as `dependent` on every result from this plugin.
    pub plugin_key: String,
    pub install_path: PathBuf,
    pub marketplace: Option<String>,
}

impl PluginTarget {
    fn from_record(record: InstalledPluginRecord) -> Self {
        let marketplace = PluginKey::split(&record.plugin_key).marketplace;
        Self {
            plugin_key: record.plugin_key,
            install_path: record.install_path,
            marketplace,
        }
    }
}

/// Produce the targets for a scope.
pub fn enumerate(scope: &Scope, registries: &Registries) -> Vec<PluginTarget> {
    let candidates = match scope {
        Scope::Enabled => enabled_targets(registries),
        Scope::Installed => installed_targets(registries),
        Scope::All => all_targets(registries),
        Scope::Plugin(key) => single_target(key, registries).into_iter().collect(),
    };

    let mut seen = BTreeSet::new();
    let targets: Vec<PluginTarget> = candidates
        .into_iter()
        .filter(|target| {
            if target.install_path.as_os_str().is_empty() {
                tracing::debug!("Skipping {}: no install path", target.plugin_key);
                return false;
            }
            seen.insert(target.plugin_key.clone())
        })
        .collect();

    tracing::debug!("Scope {} selected {} plugins", scope, targets.len());
    targets
}

fn enabled_targets(registries: &Registries) -> Vec<PluginTarget> {
    registries
        .enabled
        .enabled_keys()
        .filter_map(|key| {
            let parsed = PluginKey::split(key);
            let Some(record) = registries.installed_info(&parsed.name, parsed.marketplace())
            else {
                tracing::debug!("Enabled plugin {} has no install record", key);
                return None;
            };
            Some(PluginTarget {
                plugin_key: key.to_string(),
                install_path: record.install_path,
                marketplace: parsed.marketplace,
            })
        })
        .collect()
}

fn installed_targets(registries: &Registries) -> Vec<PluginTarget> {
    registries
        .installed
        .iter_first()
        .map(PluginTarget::from_record)
        .collect()
}

fn all_targets(registries: &Registries) -> Vec<PluginTarget> {
    let mut targets = installed_targets(registries);
    for marketplace in registries.marketplaces.located() {
        targets.extend(marketplace_plugins(&marketplace));
    }
    targets
}

fn single_target(key: &PluginKey, registries: &Registries) -> Option<PluginTarget> {
    let record = match key.marketplace() {
        Some(_) => registries.installed.get_exact(&key.to_string()),
        None => registries.installed.first_by_name(&key.name),
    };
    if record.is_none() {
        tracing::warn!("Plugin {} is not installed", key);
    }
    record.map(PluginTarget::from_record)
}
