//! Registries describing the local plugin state.
//!
//! Three files under the Claude configuration directory are read:
//!
//! | File | Type | Contents |
//! |------|------|----------|
//! | `plugins/installed_plugins.json` | [`InstalledPlugins`] | install records per plugin key |
//! | `settings.json` | [`EnabledPlugins`] | `enabledPlugins` flags |
//! | `plugins/known_marketplaces.json` | [`KnownMarketplaces`] | marketplace install locations |
//!
//! Every plugin may also ship a [`DependencyManifest`] under
//! `<installPath>/.claude-plugin/extends-plugin.json`.
//!
//! All maps are ordered by key, so "first match" lookups across
//! marketplaces are deterministic.

pub mod installed;
pub mod key;
pub mod loader;
pub mod manifest;
pub mod marketplaces;
pub mod settings;

pub use installed::{InstallRecord, InstalledPluginRecord, InstalledPlugins};
pub use key::PluginKey;
pub use loader::{load_json_or_default, read_json, Registries};
pub use manifest::{Declarations, DependencyManifest, MANIFEST_FILE, PLUGIN_META_DIR};
pub use marketplaces::{KnownMarketplaces, MarketplaceEntry, MarketplaceInfo};
pub use settings::EnabledPlugins;
