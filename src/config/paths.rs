//! Location of the Claude configuration directory and its registry files.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "CLAUDE_CONFIG_DIR";

/// Paths to the registry files read by a check.
///
/// The configuration directory is chosen in this order:
/// 1. `--claude-dir <PATH>`
/// 2. `CLAUDE_CONFIG_DIR`
/// 3. `~/.claude`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// The configuration directory itself.
    pub root: PathBuf,

    /// `plugins/installed_plugins.json`
    pub installed_plugins: PathBuf,

    /// `settings.json`
    pub settings: PathBuf,

    /// `plugins/known_marketplaces.json`
    pub known_marketplaces: PathBuf,
}

impl ConfigPaths {
    /// Derive registry paths from a configuration directory.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let plugins = root.join("plugins");
        Self {
            installed_plugins: plugins.join("installed_plugins.json"),
            known_marketplaces: plugins.join("known_marketplaces.json"),
            settings: root.join("settings.json"),
            root,
        }
    }

    /// Resolve the configuration directory from an explicit override or the
    /// user's home directory.
    ///
    /// The override already folds in `CLAUDE_CONFIG_DIR` when it comes from
    /// the CLI. Returns `None` only when there is no override and no home
    /// directory can be determined.
    pub fn discover(explicit: Option<&Path>) -> Option<Self> {
        if let Some(dir) = explicit {
            return Some(Self::from_root(dir));
        }
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Some(Self::from_root(PathBuf::from(dir)));
        }
        let home = dirs::home_dir()?;
        Some(Self::from_root(home.join(".claude")))
    }
}
