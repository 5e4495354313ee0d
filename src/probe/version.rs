//! Version extraction from `--version` style output.

use std::sync::LazyLock;

use regex::Regex;

/// Matches `1.2`, `v1.2.3`, `version 1.2.3-rc.1` and similar.
static VERSION_OUTPUT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:version\s*)?v?(\d+\.\d+(?:\.\d+)?(?:-[a-zA-Z0-9.-]+)?)")
        .expect("VERSION_OUTPUT_REGEX must compile")
});

/// Extract the first version-looking token from command output.
pub fn extract_version(output: &str) -> Option<String> {
    VERSION_OUTPUT_REGEX
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
