//! Loading the registries that describe the local plugin state.
//!
//! Each source is loaded on its own. A missing file means "nothing recorded"
//! and is not reported. A file that exists but cannot be read or parsed is
//! reported with a warning and treated as empty, so one broken registry never
//! stops the check.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;

use super::installed::{InstalledPluginRecord, InstalledPlugins};
use super::manifest::DependencyManifest;
use super::marketplaces::KnownMarketplaces;
use super::settings::EnabledPlugins;
use crate::config::ConfigPaths;
use crate::error::{DepcheckError, Result};

/// Read and parse a JSON registry file.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| DepcheckError::RegistryParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Load a registry file, falling back to an empty registry on any failure.
pub fn load_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match read_json(path) {
        Ok(Some(value)) => value,
        Ok(None) => {
            tracing::debug!("No registry at {}", path.display());
            T::default()
        }
        Err(e) => {
            tracing::warn!("Could not load {}: {}", path.display(), e);
            T::default()
        }
    }
}

/// The three registries, loaded once per run.
#[derive(Debug, Clone, Default)]
pub struct Registries {
    pub installed: InstalledPlugins,
    pub enabled: EnabledPlugins,
    pub marketplaces: KnownMarketplaces,
}

impl Registries {
    /// Load every registry named by `paths`.
    pub fn load(paths: &ConfigPaths) -> Self {
        let registries = Self {
            installed: load_json_or_default(&paths.installed_plugins),
            enabled: load_json_or_default(&paths.settings),
            marketplaces: load_json_or_default(&paths.known_marketplaces),
        };
        tracing::debug!(
            "Loaded {} installed plugin keys, {} enabled flags, {} marketplaces",
            registries.installed.len(),
            registries.enabled.flags.len(),
            registries.marketplaces.len()
        );
        registries
    }

    /// Installation record of a plugin; see [`InstalledPlugins::lookup`].
    pub fn installed_info(
        &self,
        name: &str,
        marketplace: Option<&str>,
    ) -> Option<InstalledPluginRecord> {
        self.installed.lookup(name, marketplace)
    }

    /// Whether a plugin is enabled; see [`EnabledPlugins::is_enabled`].
    pub fn is_enabled(&self, name: &str, marketplace: Option<&str>) -> bool {
        self.enabled.is_enabled(name, marketplace)
    }

    /// The dependency manifest of a plugin; see [`DependencyManifest::load`].
    pub fn load_manifest(&self, install_path: &Path) -> Option<DependencyManifest> {
        DependencyManifest::load(install_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn missing_files_load_empty() {
        let temp = TempDir::new().unwrap();
        let registries = Registries::load(&ConfigPaths::from_root(temp.path()));
        assert!(registries.installed.is_empty());
        assert_eq!(registries.enabled.enabled_keys().count(), 0);
        assert!(registries.marketplaces.is_empty());
    }

    #[test]
    fn corrupt_file_does_not_affect_others() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::from_root(temp.path());
        write(&paths.installed_plugins, "{ this is not json");
        write(&paths.settings, r#"{"enabledPlugins": {"foo@m": true}}"#);

        let registries = Registries::load(&paths);
        assert!(registries.installed.is_empty());
        assert!(registries.is_enabled("foo", Some("m")));
    }

    #[test]
    fn read_json_reports_parse_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(&path, "[1, 2").unwrap();

        let err = read_json::<InstalledPlugins>(&path).unwrap_err();
        assert!(matches!(err, DepcheckError::RegistryParseError { .. }));
    }

    #[test]
    fn read_json_missing_is_none() {
        let temp = TempDir::new().unwrap();
        let result = read_json::<InstalledPlugins>(&temp.path().join("nope.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn wrong_shape_loads_empty() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::from_root(temp.path());
        write(&paths.installed_plugins, r#"{"plugins": ["not", "a", "map"]}"#);

        let registries = Registries::load(&paths);
        assert!(registries.installed.is_empty());
    }

    #[test]
    fn installed_info_uses_registry_lookup() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::from_root(temp.path());
        write(
            &paths.installed_plugins,
            r#"{"plugins": {"bar@m": [{"installPath": "/p/bar", "version": "1.5.0"}]}}"#,
        );

        let registries = Registries::load(&paths);
        let info = registries.installed_info("bar", None).unwrap();
        assert_eq!(info.version.as_deref(), Some("1.5.0"));
        assert!(registries.installed_info("bar", Some("m")).is_some());
    }
}
