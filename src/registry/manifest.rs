//! Per-plugin dependency manifests (`.claude-plugin/extends-plugin.json`).
//!
//! ```json
//! {
//!   "dependencies": { "bar@market-a": ">=2.0.0" },
//!   "optionalDependencies": { "docs": "*" },
//!   "systemDependencies": { "gh": ">=2.0" },
//!   "optionalSystemDependencies": { "rg": "*" }
//! }
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Directory holding plugin metadata inside an install path.
pub const PLUGIN_META_DIR: &str = ".claude-plugin";

/// Manifest file name inside [`PLUGIN_META_DIR`].
pub const MANIFEST_FILE: &str = "extends-plugin.json";

/// `(name, constraint)` pairs in declaration order.
pub type Declarations = Vec<(String, String)>;

/// Declared dependencies of one plugin.
///
/// Each section keeps the order of the manifest file, so results are
/// reported in the order the author wrote them.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DependencyManifest {
    #[serde(default, deserialize_with = "declarations")]
    pub dependencies: Declarations,
    #[serde(default, deserialize_with = "declarations")]
    pub optional_dependencies: Declarations,
    #[serde(default, deserialize_with = "declarations")]
    pub system_dependencies: Declarations,
    #[serde(default, deserialize_with = "declarations")]
    pub optional_system_dependencies: Declarations,
}

/// Read a JSON object into ordered pairs. A repeated name keeps its first
/// position and its last constraint.
fn declarations<'de, D>(deserializer: D) -> Result<Declarations, D::Error>
where
    D: Deserializer<'de>,
{
    struct DeclarationsVisitor;

    impl<'de> Visitor<'de> for DeclarationsVisitor {
        type Value = Declarations;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of names to version constraints")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries: Declarations = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, constraint)) = map.next_entry::<String, String>()? {
                match entries.iter_mut().find(|(existing, _)| *existing == name) {
                    Some(entry) => entry.1 = constraint,
                    None => entries.push((name, constraint)),
                }
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(DeclarationsVisitor)
}

impl DependencyManifest {
    /// Path of the manifest for a plugin installed at `install_path`.
    pub fn path_for(install_path: &Path) -> PathBuf {
        install_path.join(PLUGIN_META_DIR).join(MANIFEST_FILE)
    }

    /// Load the manifest of a plugin.
    ///
    /// Most plugins declare nothing, so a missing, unreadable or malformed
    /// manifest yields `None` without a warning.
    pub fn load(install_path: &Path) -> Option<Self> {
        let path = Self::path_for(install_path);
        let content = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&content) {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                tracing::debug!("Ignoring malformed manifest {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Whether the manifest declares nothing at all.
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
            && self.optional_dependencies.is_empty()
            && self.system_dependencies.is_empty()
            && self.optional_system_dependencies.is_empty()
    }
}
