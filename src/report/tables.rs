//! Tabular rendering of a check result.

use crate::check::{CheckResult, DependencyResult};
use crate::ui::Table;

/// Tables wider than this shrink their notes column.
pub const MAX_TABLE_WIDTH: usize = 120;

const CHECK_MARK: &str = "✓";
const X_MARK: &str = "✗";

const PLUGIN_HEADERS: [&str; 9] = [
    "plugin",
    "marketplace",
    "dependent",
    "version",
    "installed",
    "enabled",
    "version",
    "valid",
    "notes",
];
const PLUGIN_MIN_WIDTHS: [usize; 9] = [8, 11, 9, 7, 9, 7, 7, 5, 5];

const SYSTEM_HEADERS: [&str; 7] = [
    "command",
    "dependent",
    "version",
    "installed",
    "version",
    "valid",
    "notes",
];
const SYSTEM_MIN_WIDTHS: [usize; 7] = [8, 9, 7, 9, 7, 5, 5];

fn symbol(value: bool) -> &'static str {
    if value {
        CHECK_MARK
    } else {
        X_MARK
    }
}

/// Short status note for a row.
pub fn notes(dep: &DependencyResult, is_system: bool) -> String {
    if !dep.installed {
        return "not installed".to_string();
    }
    if !dep.enabled && !is_system {
        return "disabled".to_string();
    }
    if !dep.valid {
        return match dep.installed_version.as_deref() {
            Some(installed) if !installed.is_empty() && !dep.required_version.is_empty() => {
                format!(
                    "version mismatch ({} vs {})",
                    installed, dep.required_version
                )
            }
            _ => "version mismatch".to_string(),
        };
    }
    String::new()
}

/// Table of plugin dependencies.
pub fn plugin_table(deps: &[DependencyResult]) -> Table {
    let mut table = Table::new(PLUGIN_HEADERS.to_vec())
        .with_min_widths(PLUGIN_MIN_WIDTHS.to_vec())
        .with_max_width(MAX_TABLE_WIDTH);

    for dep in deps {
        let note = notes(dep, false);
        table.add_row(vec![
            dep.plugin.as_deref().unwrap_or_default(),
            dep.marketplace.as_deref().unwrap_or_default(),
            &dep.dependent,
            &dep.required_version,
            symbol(dep.installed),
            symbol(dep.enabled),
            dep.installed_version.as_deref().unwrap_or_default(),
            symbol(dep.valid),
            &note,
        ]);
    }
    table
}

/// Table of system dependencies.
pub fn system_table(deps: &[DependencyResult]) -> Table {
    let mut table = Table::new(SYSTEM_HEADERS.to_vec())
        .with_min_widths(SYSTEM_MIN_WIDTHS.to_vec())
        .with_max_width(MAX_TABLE_WIDTH);

    for dep in deps {
        let note = notes(dep, true);
        table.add_row(vec![
            dep.command.as_deref().unwrap_or_default(),
            &dep.dependent,
            &dep.required_version,
            symbol(dep.installed),
            dep.installed_version.as_deref().unwrap_or_default(),
            symbol(dep.valid),
            &note,
        ]);
    }
    table
}

/// Render the heading and one table per non-empty bucket.
pub fn render_check_result(result: &CheckResult) -> String {
    let mut parts = vec![match result.checked_plugin.as_deref() {
        Some(plugin) if !plugin.is_empty() => format!("Dependency check for plugin: {}", plugin),
        _ => format!("Dependency check scope: {}", result.checked_scope),
    }];

    let sections = [
        ("Required Plugin Dependencies", &result.dependencies, false),
        ("Optional Plugin Dependencies", &result.optional_dependencies, false),
        ("Required System Dependencies", &result.system_dependencies, true),
        (
            "Optional System Dependencies",
            &result.optional_system_dependencies,
            true,
        ),
    ];

    for (title, deps, is_system) in sections {
        if deps.is_empty() {
            continue;
        }
        let table = if is_system {
            system_table(deps)
        } else {
            plugin_table(deps)
        };
        parts.push(format!("\n{}\n\n{}", title, table.render()));
    }

    if parts.len() == 1 {
        parts.push("\nNo dependencies found for checked plugins.".to_string());
    }

    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system(command: &str, installed: bool, version: Option<&str>, valid: bool) -> DependencyResult {
        let mut dep = DependencyResult::command(command, "foo@m", ">=2.0");
        dep.installed = installed;
        dep.enabled = installed;
        dep.installed_version = version.map(String::from);
        dep.valid = valid;
        dep
    }

    #[test]
    fn notes_for_each_state() {
        assert_eq!(notes(&system("rg", false, None, false), true), "not installed");
        assert_eq!(
            notes(&system("gh", true, Some("1.9.0"), false), true),
            "version mismatch (1.9.0 vs >=2.0)"
        );
        assert_eq!(notes(&system("gh", true, None, false), true), "version mismatch");
        assert_eq!(notes(&system("gh", true, Some("2.1.0"), true), true), "");

        let mut disabled = DependencyResult::plugin("bar", None, "foo", "*");
        disabled.installed = true;
        disabled.valid = true;
        assert_eq!(notes(&disabled, false), "disabled");
    }

    #[test]
    fn empty_result_has_placeholder() {
        let result = CheckResult::new("installed", None);
        assert_eq!(
            render_check_result(&result),
            "Dependency check scope: installed\n\nNo dependencies found for checked plugins."
        );
    }

    #[test]
    fn plugin_heading_wins_over_scope() {
        let result = CheckResult::new("enabled", Some("foo@m".to_string()));
        assert!(render_check_result(&result).starts_with("Dependency check for plugin: foo@m\n"));
    }

    #[test]
    fn renders_system_table() {
        let mut result = CheckResult::new("enabled", None);
        result
            .system_dependencies
            .push(system("gh", true, Some("1.9.0"), false));

        insta::assert_snapshot!(render_check_result(&result), @r"
        Dependency check scope: enabled

        Required System Dependencies

        ┌──────────┬───────────┬─────────┬───────────┬─────────┬───────┬───────────────────────────────────┐
        │ command  │ dependent │ version │ installed │ version │ valid │ notes                             │
        ├──────────┼───────────┼─────────┼───────────┼─────────┼───────┼───────────────────────────────────┤
        │ gh       │ foo@m     │ >=2.0   │ ✓         │ 1.9.0   │ ✗     │ version mismatch (1.9.0 vs >=2.0) │
        └──────────┴───────────┴─────────┴───────────┴─────────┴───────┴───────────────────────────────────┘
        ");
    }

    #[test]
    fn only_non_empty_buckets_render() {
        let mut result = CheckResult::new("all", None);
        result
            .optional_system_dependencies
            .push(system("rg", false, None, false));

        let text = render_check_result(&result);
        assert!(text.contains("Optional System Dependencies"));
        assert!(!text.contains("Required Plugin Dependencies"));
        assert!(!text.contains("No dependencies found"));
    }

    #[test]
    fn wide_plugin_table_fits_max_width() {
        let mut dep = DependencyResult::plugin("bar", Some("market-a"), "foo@market-a", "^1.0.0");
        dep.installed = true;
        dep.enabled = true;
        dep.installed_version = Some(format!("2.0.0-{}", "x".repeat(80)));
        dep.valid = false;

        let rendered = plugin_table(&[dep]).render();
        let width = rendered.lines().next().unwrap().chars().count();
        assert!(width <= MAX_TABLE_WIDTH || rendered.contains('…'));
        assert!(rendered.lines().all(|l| l.chars().count() == width));
    }
}
