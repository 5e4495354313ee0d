//! Probing real commands on the host.

use std::path::PathBuf;

use super::path::{parse_system_path, resolve_command};
use super::process::{run_with_timeout, ProcessOutput};
use super::version::extract_version;
use super::{ProbeOutcome, SystemProbe};
use crate::config::ProbeSettings;

/// Result of one version-flag attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The output contained a version.
    Matched(String),
    /// The command exited 0 without printing a version.
    RanWithoutMatch,
    /// Spawn error, timeout, empty output, or a non-zero exit without a
    /// version. The next flag is tried.
    Failed,
}

impl AttemptOutcome {
    /// Classify the output of a finished attempt.
    pub fn classify(output: &ProcessOutput) -> Self {
        if output.timed_out {
            return AttemptOutcome::Failed;
        }
        let text = output.primary_output();
        if text.is_empty() {
            return AttemptOutcome::Failed;
        }
        if let Some(version) = extract_version(text) {
            return AttemptOutcome::Matched(version);
        }
        if output.success() {
            AttemptOutcome::RanWithoutMatch
        } else {
            AttemptOutcome::Failed
        }
    }
}

/// Probes commands by searching `PATH` and running them with version flags.
#[derive(Debug, Clone)]
pub struct CommandProbe {
    settings: ProbeSettings,
    path_entries: Vec<PathBuf>,
}

impl CommandProbe {
    /// Create a probe over the current process `PATH`.
    pub fn new(settings: ProbeSettings) -> Self {
        Self::with_path_entries(settings, parse_system_path())
    }

    /// Create a probe over explicit search directories.
    pub fn with_path_entries(settings: ProbeSettings, path_entries: Vec<PathBuf>) -> Self {
        Self {
            settings,
            path_entries,
        }
    }

    fn attempt(&self, program: &std::path::Path, flag: &str) -> AttemptOutcome {
        match run_with_timeout(program, &[flag], self.settings.timeout) {
            Ok(output) => AttemptOutcome::classify(&output),
            Err(e) => {
                tracing::debug!("{}", e);
                AttemptOutcome::Failed
            }
        }
    }
}

impl SystemProbe for CommandProbe {
    fn probe(&self, command: &str) -> ProbeOutcome {
        let Some(program) = resolve_command(command, &self.path_entries) else {
            tracing::debug!("Command '{}' not found on PATH", command);
            return ProbeOutcome::missing();
        };

        for flag in &self.settings.version_flags {
            match self.attempt(&program, flag) {
                AttemptOutcome::Matched(version) => {
                    tracing::debug!("{} {} reported version {}", command, flag, version);
                    return ProbeOutcome::found(Some(version));
                }
                AttemptOutcome::RanWithoutMatch => {
                    tracing::debug!("{} {} printed no version", command, flag);
                    return ProbeOutcome::found(None);
                }
                AttemptOutcome::Failed => continue,
            }
        }

        tracing::debug!("No version flag worked for {}", command);
        ProbeOutcome::found(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(stdout: &str, stderr: &str, exit_code: i32) -> ProcessOutput {
        ProcessOutput {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            exit_code: Some(exit_code),
            timed_out: false,
        }
    }

    #[test]
    fn classify_match_on_stdout() {
        assert_eq!(
            AttemptOutcome::classify(&output("gh version 2.40.1 (2023-12-13)", "", 0)),
            AttemptOutcome::Matched("2.40.1".to_string())
        );
    }

    #[test]
    fn classify_match_on_stderr_even_with_failure_exit() {
        assert_eq!(
            AttemptOutcome::classify(&output("", "java version 17.0.2", 1)),
            AttemptOutcome::Matched("17.0.2".to_string())
        );
    }

    #[test]
    fn classify_success_without_version() {
        assert_eq!(
            AttemptOutcome::classify(&output("usage: tool", "", 0)),
            AttemptOutcome::RanWithoutMatch
        );
    }

    #[test]
    fn classify_failure_without_version() {
        assert_eq!(
            AttemptOutcome::classify(&output("", "unknown flag", 2)),
            AttemptOutcome::Failed
        );
    }

    #[test]
    fn classify_empty_output_fails_even_on_success() {
        assert_eq!(
            AttemptOutcome::classify(&output("", "", 0)),
            AttemptOutcome::Failed
        );
    }

    #[test]
    fn classify_timeout_fails() {
        let timed_out = ProcessOutput {
            stdout: "1.0.0".to_string(),
            timed_out: true,
            ..ProcessOutput::default()
        };
        assert_eq!(AttemptOutcome::classify(&timed_out), AttemptOutcome::Failed);
    }

    #[test]
    fn missing_command_is_not_installed() {
        let temp = tempfile::TempDir::new().unwrap();
        let probe =
            CommandProbe::with_path_entries(ProbeSettings::default(), vec![temp.path().into()]);
        assert_eq!(probe.probe("rg"), ProbeOutcome::missing());
    }

    #[cfg(unix)]
    mod scripted {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use std::time::Duration;
        use tempfile::TempDir;

        fn install(dir: &TempDir, name: &str, body: &str) {
            let path = dir.path().join(name);
            fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }

        fn probe(dir: &TempDir) -> CommandProbe {
            let settings = ProbeSettings::default().with_timeout(Duration::from_secs(2));
            CommandProbe::with_path_entries(settings, vec![dir.path().to_path_buf()])
        }

        #[test]
        fn later_flag_supplies_version() {
            let temp = TempDir::new().unwrap();
            install(
                &temp,
                "oldtool",
                r#"if [ "$1" = "-version" ]; then echo "oldtool 3.1"; else echo "bad flag" >&2; exit 1; fi"#,
            );

            assert_eq!(
                probe(&temp).probe("oldtool"),
                ProbeOutcome::found(Some("3.1".to_string()))
            );
        }

        #[test]
        fn silent_command_exists_without_version() {
            let temp = TempDir::new().unwrap();
            install(&temp, "quiet", "exit 3");

            assert_eq!(probe(&temp).probe("quiet"), ProbeOutcome::found(None));
        }
    }
}
