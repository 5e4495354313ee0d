//! Installed-plugin registry (`plugins/installed_plugins.json`).
//!
//! The file maps each plugin key to a list of install records:
//!
//! ```json
//! {
//!   "version": 2,
//!   "plugins": {
//!     "devs@my-market": [
//!       { "scope": "user", "installPath": "/home/u/.claude/plugins/cache/devs", "version": "1.4.0" }
//!     ]
//!   }
//! }
//! ```
//!
//! Only `installPath` and `version` are read; other fields are ignored.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use super::key::PluginKey;

/// One install record as stored on disk.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct InstallRecord {
    #[serde(default, rename = "installPath")]
    pub install_path: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// The installed-plugin registry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstalledPlugins {
    #[serde(default)]
    pub plugins: BTreeMap<String, Vec<InstallRecord>>,
}

/// A resolved installation of a plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPluginRecord {
    /// The registry key the record was found under.
    pub plugin_key: String,
    pub install_path: PathBuf,
    pub version: Option<String>,
}

impl InstalledPluginRecord {
    fn from_entry(key: &str, record: &InstallRecord) -> Self {
        Self {
            plugin_key: key.to_string(),
            install_path: PathBuf::from(&record.install_path),
            version: record.version.clone(),
        }
    }
}

impl InstalledPlugins {
    /// Build a registry from `(key, records)` pairs.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<InstallRecord>)>,
    {
        Self {
            plugins: entries.into_iter().collect(),
        }
    }

    /// The first install record for an exact plugin key.
    pub fn get_exact(&self, key: &str) -> Option<InstalledPluginRecord> {
        self.plugins
            .get(key)
            .and_then(|records| records.first())
            .map(|record| InstalledPluginRecord::from_entry(key, record))
    }

    /// The first install record of the first key whose name part matches.
    ///
    /// Keys are visited in lexicographic order, so when several marketplaces
    /// ship a plugin with the same name the alphabetically first marketplace
    /// wins.
    pub fn first_by_name(&self, name: &str) -> Option<InstalledPluginRecord> {
        self.plugins.iter().find_map(|(key, records)| {
            if PluginKey::split(key).name != name {
                return None;
            }
            records
                .first()
                .map(|record| InstalledPluginRecord::from_entry(key, record))
        })
    }

    /// Look up an installed plugin.
    ///
    /// With a marketplace the exact key is tried first; the lookup then falls
    /// back to the first key with a matching name in any marketplace.
    pub fn lookup(&self, name: &str, marketplace: Option<&str>) -> Option<InstalledPluginRecord> {
        if let Some(marketplace) = marketplace {
            let key = PluginKey::new(name, marketplace).to_string();
            if let Some(record) = self.get_exact(&key) {
                return Some(record);
            }
        }
        self.first_by_name(name)
    }

    /// Every key with at least one install record, paired with its first record.
    pub fn iter_first(&self) -> impl Iterator<Item = InstalledPluginRecord> + '_ {
        self.plugins.iter().filter_map(|(key, records)| {
            records
                .first()
                .map(|record| InstalledPluginRecord::from_entry(key, record))
        })
    }

    /// Number of plugin keys in the registry.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, version: Option<&str>) -> InstallRecord {
        InstallRecord {
            install_path: path.to_string(),
            version: version.map(String::from),
        }
    }

    fn registry() -> InstalledPlugins {
        InstalledPlugins::from_entries([
            (
                "bar@market-b".to_string(),
                vec![record("/p/bar-b", Some("2.0.0"))],
            ),
            (
                "bar@market-a".to_string(),
                vec![
                    record("/p/bar-a", Some("1.5.0")),
                    record("/p/bar-a-old", Some("1.0.0")),
                ],
            ),
            ("empty@market-a".to_string(), vec![]),
        ])
    }

    #[test]
    fn parses_registry_file_with_extra_fields() {
        let json = r#"{
            "version": 2,
            "plugins": {
                "devs@m": [{"scope": "user", "installPath": "/x", "version": "1.0.0", "gitCommitSha": "abc"}]
            }
        }"#;
        let parsed: InstalledPlugins = serde_json::from_str(json).unwrap();
        let rec = parsed.get_exact("devs@m").unwrap();
        assert_eq!(rec.install_path, PathBuf::from("/x"));
        assert_eq!(rec.version.as_deref(), Some("1.0.0"));
    }

    #[test]
    fn missing_plugins_field_is_empty() {
        let parsed: InstalledPlugins = serde_json::from_str(r#"{"version": 2}"#).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn exact_lookup_takes_first_record() {
        let rec = registry().lookup("bar", Some("market-a")).unwrap();
        assert_eq!(rec.plugin_key, "bar@market-a");
        assert_eq!(rec.install_path, PathBuf::from("/p/bar-a"));
    }

    #[test]
    fn name_lookup_is_lexicographic_by_key() {
        let rec = registry().lookup("bar", None).unwrap();
        assert_eq!(rec.plugin_key, "bar@market-a");
    }

    #[test]
    fn exact_miss_falls_back_to_name() {
        let rec = registry().lookup("bar", Some("market-z")).unwrap();
        assert_eq!(rec.plugin_key, "bar@market-a");
    }

    #[test]
    fn keys_without_records_are_not_installed() {
        let reg = registry();
        assert!(reg.get_exact("empty@market-a").is_none());
        assert!(reg.lookup("empty", None).is_none());
        assert_eq!(reg.iter_first().count(), 2);
    }

    #[test]
    fn unknown_plugin_is_none() {
        assert!(registry().lookup("baz", None).is_none());
    }
}
