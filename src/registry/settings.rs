//! Enabled-plugin flags from `settings.json`.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::key::PluginKey;

/// The `enabledPlugins` map of the user settings file.
///
/// A key missing from the map is not enabled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnabledPlugins {
    #[serde(default, rename = "enabledPlugins")]
    pub flags: BTreeMap<String, bool>,
}

impl EnabledPlugins {
    /// Build from `(key, enabled)` pairs.
    pub fn from_flags<I>(flags: I) -> Self
    where
        I: IntoIterator<Item = (String, bool)>,
    {
        Self {
            flags: flags.into_iter().collect(),
        }
    }

    /// Whether a plugin is enabled.
    ///
    /// With a marketplace only the flag of that exact key counts, and a
    /// missing key is disabled. Without one, any enabled key with a matching
    /// name counts.
    pub fn is_enabled(&self, name: &str, marketplace: Option<&str>) -> bool {
        if let Some(marketplace) = marketplace {
            let key = PluginKey::new(name, marketplace).to_string();
            return self.flags.get(&key).copied().unwrap_or(false);
        }
        self.flags
            .iter()
            .any(|(key, enabled)| *enabled && PluginKey::split(key).name == name)
    }

    /// Keys flagged as enabled, in key order.
    pub fn enabled_keys(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(key, _)| key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags() -> EnabledPlugins {
        EnabledPlugins::from_flags([
            ("bar@market-a".to_string(), false),
            ("bar@market-b".to_string(), true),
            ("foo@market-a".to_string(), true),
        ])
    }

    #[test]
    fn parses_settings_file() {
        let json = r#"{"theme": "dark", "enabledPlugins": {"devs@m": true, "old@m": false}}"#;
        let parsed: EnabledPlugins = serde_json::from_str(json).unwrap();
        assert!(parsed.is_enabled("devs", Some("m")));
        assert!(!parsed.is_enabled("old", Some("m")));
    }

    #[test]
    fn settings_without_enabled_plugins_is_empty() {
        let parsed: EnabledPlugins = serde_json::from_str(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(parsed.enabled_keys().count(), 0);
    }

    #[test]
    fn exact_flag_wins() {
        assert!(!flags().is_enabled("bar", Some("market-a")));
        assert!(flags().is_enabled("bar", Some("market-b")));
    }

    #[test]
    fn name_match_when_unqualified() {
        assert!(flags().is_enabled("bar", None));
        assert!(flags().is_enabled("foo", None));
        assert!(!flags().is_enabled("baz", None));
    }

    #[test]
    fn unknown_marketplace_is_disabled() {
        assert!(!flags().is_enabled("foo", Some("market-z")));
        assert!(!flags().is_enabled("bar", Some("market-z")));
    }

    #[test]
    fn enabled_keys_skips_disabled() {
        let keys: Vec<_> = flags().enabled_keys().map(String::from).collect();
        assert_eq!(keys, vec!["bar@market-b", "foo@market-a"]);
    }
}
