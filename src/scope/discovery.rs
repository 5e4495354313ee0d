//! Discovery of plugins shipped by a marketplace but not installed.

use std::fs;
use std::path::Path;

use super::PluginTarget;
use crate::registry::{MarketplaceInfo, PluginKey, PLUGIN_META_DIR};

/// Plugins found under `<installLocation>/plugins/`.
///
/// A subdirectory counts as a plugin when it contains a `.claude-plugin`
/// entry. Results are sorted by directory name.
pub fn marketplace_plugins(marketplace: &MarketplaceInfo) -> Vec<PluginTarget> {
    if !marketplace.install_location.exists() {
        tracing::warn!(
            "Marketplace '{}' install location {} does not exist",
            marketplace.name,
            marketplace.install_location.display()
        );
        return Vec::new();
    }

    let plugins_dir = marketplace.install_location.join("plugins");
    let entries = match fs::read_dir(&plugins_dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("Skipping {}: {}", plugins_dir.display(), e);
            return Vec::new();
        }
    };

    let mut targets: Vec<PluginTarget> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| is_plugin_dir(path))
        .filter_map(|path| {
            let dir_name = path.file_name()?.to_str()?.to_string();
            Some(PluginTarget {
                plugin_key: PluginKey::new(&dir_name, &marketplace.name).to_string(),
                install_path: path,
                marketplace: Some(marketplace.name.clone()),
            })
        })
        .collect();
    targets.sort_by(|a, b| a.plugin_key.cmp(&b.plugin_key));
    targets
}

fn is_plugin_dir(path: &Path) -> bool {
    path.is_dir() && path.join(PLUGIN_META_DIR).exists()
}
