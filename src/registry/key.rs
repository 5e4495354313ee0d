//! Plugin keys of the form `name@marketplace`.

use std::fmt;
use std::str::FromStr;

use crate::error::DepcheckError;

/// A plugin identifier with an optional marketplace qualifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PluginKey {
    pub name: String,
    pub marketplace: Option<String>,
}

impl PluginKey {
    /// Create a fully qualified key.
    pub fn new(name: &str, marketplace: &str) -> Self {
        Self {
            name: name.to_string(),
            marketplace: Some(marketplace.to_string()),
        }
    }

    /// Split a key at its last `@`.
    ///
    /// Plugin names may themselves contain `@` (scoped names), so only the
    /// final separator is significant. An empty marketplace part is treated
    /// as no marketplace.
    pub fn split(key: &str) -> Self {
        match key.rsplit_once('@') {
            Some((name, marketplace)) => Self {
                name: name.to_string(),
                marketplace: (!marketplace.is_empty()).then(|| marketplace.to_string()),
            },
            None => Self {
                name: key.to_string(),
                marketplace: None,
            },
        }
    }

    /// The marketplace as a string slice.
    pub fn marketplace(&self) -> Option<&str> {
        self.marketplace.as_deref()
    }
}

impl FromStr for PluginKey {
    type Err = DepcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = Self::split(s.trim());
        if key.name.is_empty() {
            return Err(DepcheckError::InvalidPluginKey {
                key: s.to_string(),
                message: "plugin name is empty".to_string(),
            });
        }
        Ok(key)
    }
}

impl fmt::Display for PluginKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.marketplace {
            Some(marketplace) => write!(f, "{}@{}", self.name, marketplace),
            None => f.write_str(&self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_qualified_key() {
        let key = PluginKey::split("devs@my-market");
        assert_eq!(key.name, "devs");
        assert_eq!(key.marketplace(), Some("my-market"));
        assert_eq!(key.to_string(), "devs@my-market");
    }

    #[test]
    fn split_bare_name() {
        let key = PluginKey::split("devs");
        assert_eq!(key.name, "devs");
        assert!(key.marketplace.is_none());
        assert_eq!(key.to_string(), "devs");
    }

    #[test]
    fn split_uses_last_separator() {
        let key = PluginKey::split("@scope/tool@market");
        assert_eq!(key.name, "@scope/tool");
        assert_eq!(key.marketplace(), Some("market"));
    }

    #[test]
    fn empty_marketplace_is_none() {
        assert!(PluginKey::split("devs@").marketplace.is_none());
    }

    #[test]
    fn from_str_rejects_empty_name() {
        assert!("@market".parse::<PluginKey>().is_err());
        assert!("".parse::<PluginKey>().is_err());
        assert!("devs@market".parse::<PluginKey>().is_ok());
    }
}
