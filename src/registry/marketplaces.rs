//! Known marketplaces (`plugins/known_marketplaces.json`).

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

/// A marketplace entry as stored on disk.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MarketplaceEntry {
    #[serde(default, rename = "installLocation")]
    pub install_location: Option<String>,
}

/// A marketplace with a usable install location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketplaceInfo {
    pub name: String,
    pub install_location: PathBuf,
}

/// Known marketplaces keyed by name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct KnownMarketplaces {
    pub entries: BTreeMap<String, MarketplaceEntry>,
}

impl KnownMarketplaces {
    /// Build from `(name, install location)` pairs.
    pub fn from_locations<I>(locations: I) -> Self
    where
        I: IntoIterator<Item = (String, PathBuf)>,
    {
        Self {
            entries: locations
                .into_iter()
                .map(|(name, path)| {
                    (
                        name,
                        MarketplaceEntry {
                            install_location: Some(path.to_string_lossy().to_string()),
                        },
                    )
                })
                .collect(),
        }
    }

    /// Marketplaces that declare a non-empty install location.
    pub fn located(&self) -> impl Iterator<Item = MarketplaceInfo> + '_ {
        self.entries.iter().filter_map(|(name, entry)| {
            let location = entry.install_location.as_deref()?;
            if location.is_empty() {
                return None;
            }
            Some(MarketplaceInfo {
                name: name.clone(),
                install_location: PathBuf::from(location),
            })
        })
    }

    /// Number of known marketplaces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no marketplaces are known.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
