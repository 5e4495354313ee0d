//! Remediation steps for unsatisfied dependencies.
//!
//! Steps are listed in bucket order (required plugins, optional plugins,
//! required commands, optional commands):
//!
//! ```text
//! ## Resolution Steps (2 issues)
//!
//! 1. [Required] bar (required by foo@market-a)
//!    /plugin update bar@market-a
//!
//! 2. [Optional System] rg (required by foo@market-a)
//!    Install rg
//! ```

use std::fmt;

use crate::check::{CheckResult, DependencyResult};

/// Which bucket an unsatisfied dependency came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Required,
    Optional,
    RequiredSystem,
    OptionalSystem,
}

impl StepKind {
    pub fn label(&self) -> &'static str {
        match self {
            StepKind::Required => "Required",
            StepKind::Optional => "Optional",
            StepKind::RequiredSystem => "Required System",
            StepKind::OptionalSystem => "Optional System",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, StepKind::Required | StepKind::RequiredSystem)
    }

    fn is_system(&self) -> bool {
        matches!(self, StepKind::RequiredSystem | StepKind::OptionalSystem)
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One thing the user has to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionStep {
    pub kind: StepKind,
    pub name: String,
    pub dependent: String,
    pub marketplace: Option<String>,
    pub issue: String,
    /// Command or action that fixes the issue.
    pub resolution: String,
    /// Custom help from the check result, shown instead of `resolution`.
    pub help: String,
}

impl ResolutionStep {
    /// The line shown under the step heading.
    pub fn action(&self) -> &str {
        if self.help.is_empty() {
            &self.resolution
        } else {
            &self.help
        }
    }
}

/// Help text that is not one of the generated messages.
fn custom_help<'a>(help: &'a str, generated_prefixes: &[&str]) -> Option<&'a str> {
    (!help.is_empty() && !generated_prefixes.iter().any(|p| help.starts_with(p))).then_some(help)
}

fn plugin_step(dep: &DependencyResult, kind: StepKind) -> ResolutionStep {
    let name = dep.name().to_string();
    let target = dep.qualified_name();
    let custom = custom_help(&dep.help, &["Plugin"]);

    let (issue, resolution, help) = if !dep.installed {
        let resolution = custom
            .map(String::from)
            .unwrap_or_else(|| format!("/plugin install {}", target));
        ("Not installed".to_string(), resolution, custom)
    } else if !dep.enabled {
        (
            "Installed but not enabled".to_string(),
            "Enable via /plugin TUI".to_string(),
            custom,
        )
    } else {
        (
            mismatch_issue(dep),
            format!("/plugin update {}", target),
            None,
        )
    };

    ResolutionStep {
        kind,
        name,
        dependent: dependent_label(dep),
        marketplace: dep.marketplace.clone(),
        issue,
        resolution,
        help: help.unwrap_or_default().to_string(),
    }
}

fn system_step(dep: &DependencyResult, kind: StepKind) -> ResolutionStep {
    let name = dep.name().to_string();

    let (issue, resolution) = if !dep.installed {
        let resolution = custom_help(&dep.help, &["Command"])
            .map(String::from)
            .unwrap_or_else(|| format!("Install {}", name));
        ("Not installed".to_string(), resolution)
    } else {
        let resolution = custom_help(&dep.help, &["Installed version"])
            .map(String::from)
            .unwrap_or_else(|| {
                format!("Update {} to satisfy version {}", name, dep.required_version)
            });
        (mismatch_issue(dep), resolution)
    };

    ResolutionStep {
        kind,
        name,
        dependent: dependent_label(dep),
        marketplace: None,
        issue,
        resolution,
        help: custom_help(&dep.help, &["Command", "Installed version"])
            .unwrap_or_default()
            .to_string(),
    }
}

fn mismatch_issue(dep: &DependencyResult) -> String {
    format!(
        "Version mismatch: {} does not satisfy {}",
        dep.installed_version.as_deref().unwrap_or("unknown"),
        dep.required_version
    )
}

fn dependent_label(dep: &DependencyResult) -> String {
    if dep.dependent.is_empty() {
        "unknown".to_string()
    } else {
        dep.dependent.clone()
    }
}

/// Steps for every invalid dependency in `result`.
pub fn generate_steps(result: &CheckResult) -> Vec<ResolutionStep> {
    let buckets = [
        (&result.dependencies, StepKind::Required),
        (&result.optional_dependencies, StepKind::Optional),
        (&result.system_dependencies, StepKind::RequiredSystem),
        (&result.optional_system_dependencies, StepKind::OptionalSystem),
    ];

    buckets
        .into_iter()
        .flat_map(|(deps, kind)| {
            deps.iter().filter(|dep| !dep.valid).map(move |dep| {
                if kind.is_system() {
                    system_step(dep, kind)
                } else {
                    plugin_step(dep, kind)
                }
            })
        })
        .collect()
}

/// Whether any step concerns a required dependency.
pub fn has_required_issues(steps: &[ResolutionStep]) -> bool {
    steps.iter().any(|step| step.kind.is_required())
}

/// Render steps as a numbered list.
pub fn format_steps(steps: &[ResolutionStep]) -> String {
    if steps.is_empty() {
        return "All dependencies satisfied.".to_string();
    }

    let mut lines = vec![
        format!(
            "## Resolution Steps ({} issue{})",
            steps.len(),
            if steps.len() == 1 { "" } else { "s" }
        ),
        String::new(),
    ];

    for (i, step) in steps.iter().enumerate() {
        lines.push(format!(
            "{}. [{}] {} (required by {})",
            i + 1,
            step.kind,
            step.name,
            step.dependent
        ));
        lines.push(format!("   {}", step.action()));
        lines.push(String::new());
    }

    lines.join("\n").trim_end().to_string()
}
