//! Executable lookup on `PATH`.

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system `PATH` into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a command to the first executable file in `path_entries`.
///
/// A command containing a path separator is checked as given instead of
/// being searched for. The `which` binary is never invoked.
pub fn resolve_command(command: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    if command.is_empty() {
        return None;
    }

    let as_path = Path::new(command);
    if as_path.components().count() > 1 {
        return is_executable_file(as_path).then(|| as_path.to_path_buf());
    }

    path_entries
        .iter()
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidates(dir, command))
        .find(|candidate| is_executable_file(candidate))
}

fn is_executable_file(path: &Path) -> bool {
    path.is_file() && is_executable(path)
}

#[cfg(unix)]
fn candidates(dir: &Path, command: &str) -> Vec<PathBuf> {
    vec![dir.join(command)]
}

#[cfg(not(unix))]
fn candidates(dir: &Path, command: &str) -> Vec<PathBuf> {
    let mut paths = vec![dir.join(command)];
    paths.extend(
        ["exe", "cmd", "bat"]
            .iter()
            .map(|ext| dir.join(format!("{}.{}", command, ext))),
    );
    paths
}
