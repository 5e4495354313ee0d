//! Running a probe command with a deadline.

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{DepcheckError, Result};

/// Interval between exit checks while waiting on a child.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// How long pipe collection may continue once the child has exited.
pub const OUTPUT_GRACE: Duration = Duration::from_millis(500);

/// Output of a finished probe process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, or `None` when killed by a signal.
    pub exit_code: Option<i32>,
    /// The process ran past its deadline and was killed.
    pub timed_out: bool,
}

impl ProcessOutput {
    /// Whether the process exited with status 0.
    pub fn success(&self) -> bool {
        !self.timed_out && self.exit_code == Some(0)
    }

    /// Stdout, or stderr when stdout is empty.
    pub fn primary_output(&self) -> &str {
        if self.stdout.is_empty() {
            &self.stderr
        } else {
            &self.stdout
        }
    }
}

enum Stream {
    Stdout,
    Stderr,
}

/// Run `program` with `args` directly (no shell), killing it after `timeout`.
///
/// Both pipes are drained on reader threads while the child runs.
pub fn run_with_timeout(program: &Path, args: &[&str], timeout: Duration) -> Result<ProcessOutput> {
    let deadline = Instant::now() + timeout;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| DepcheckError::CommandSpawnFailed {
            command: format!("{} {}", program.display(), args.join(" ")),
            message: e.to_string(),
        })?;

    let rx = spawn_readers(&mut child);

    let mut output = ProcessOutput::default();
    loop {
        if let Some(status) = child.try_wait()? {
            output.exit_code = status.code();
            break;
        }
        if Instant::now() >= deadline {
            tracing::debug!(
                "{} {} timed out after {:?}",
                program.display(),
                args.join(" "),
                timeout
            );
            let _ = child.kill();
            let _ = child.wait();
            output.timed_out = true;
            return Ok(output);
        }
        thread::sleep(POLL_INTERVAL);
    }

    collect_output(&rx, &mut output, Instant::now() + OUTPUT_GRACE);
    Ok(output)
}

/// Receive both streams from the reader threads, giving up at `until`.
///
/// A grandchild that inherited a pipe can hold it open past the child's exit.
/// Its reader thread then stays blocked on the read and is left detached; the
/// stream it owns is reported empty.
fn collect_output(
    rx: &mpsc::Receiver<(Stream, String)>,
    output: &mut ProcessOutput,
    until: Instant,
) {
    for _ in 0..2 {
        let remaining = until.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok((Stream::Stdout, text)) => output.stdout = text,
            Ok((Stream::Stderr, text)) => output.stderr = text,
            Err(_) => break,
        }
    }
}

fn spawn_readers(child: &mut Child) -> mpsc::Receiver<(Stream, String)> {
    let (tx, rx) = mpsc::channel();

    if let Some(mut stdout) = child.stdout.take() {
        let tx = tx.clone();
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = stdout.read_to_end(&mut buf);
            let _ = tx.send((Stream::Stdout, String::from_utf8_lossy(&buf).into_owned()));
        });
    }

    if let Some(mut stderr) = child.stderr.take() {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = stderr.read_to_end(&mut buf);
            let _ = tx.send((Stream::Stderr, String::from_utf8_lossy(&buf).into_owned()));
        });
    }

    rx
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str, timeout: Duration) -> ProcessOutput {
        run_with_timeout(Path::new("/bin/sh"), &["-c", script], timeout).unwrap()
    }

    #[test]
    fn captures_stdout_and_exit_code() {
        let output = sh("echo 'tool 1.2.3'", Duration::from_secs(5));
        assert!(output.success());
        assert_eq!(output.stdout.trim(), "tool 1.2.3");
        assert_eq!(output.primary_output().trim(), "tool 1.2.3");
    }

    #[test]
    fn falls_back_to_stderr() {
        let output = sh("echo 'v0.9.1' >&2; exit 2", Duration::from_secs(5));
        assert!(!output.success());
        assert_eq!(output.exit_code, Some(2));
        assert_eq!(output.primary_output().trim(), "v0.9.1");
    }

    #[test]
    fn kills_on_timeout() {
        let start = Instant::now();
        let output = sh("exec sleep 30", Duration::from_millis(200));
        assert!(output.timed_out);
        assert!(!output.success());
        assert!(start.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn collects_output_arriving_after_run_deadline() {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            let _ = tx.send((Stream::Stdout, "tool 2.0.0".to_string()));
        });

        let mut output = ProcessOutput::default();
        collect_output(&rx, &mut output, Instant::now() + OUTPUT_GRACE);
        assert_eq!(output.stdout, "tool 2.0.0");
    }

    #[test]
    fn grandchild_holding_pipe_does_not_block() {
        let start = Instant::now();
        let output = sh(
            "echo 'tool 1.2.3'; sleep 5 >/dev/null &",
            Duration::from_secs(10),
        );
        assert!(start.elapsed() < Duration::from_secs(4));
        assert!(!output.timed_out);
        assert_eq!(output.exit_code, Some(0));
        assert_eq!(output.stdout.trim(), "tool 1.2.3");
        assert!(output.stderr.is_empty());
    }

    #[test]
    fn spawn_failure_is_error() {
        let err = run_with_timeout(
            Path::new("/nonexistent/definitely/missing"),
            &["--version"],
            Duration::from_secs(1),
        )
        .unwrap_err();
        assert!(matches!(err, DepcheckError::CommandSpawnFailed { .. }));
    }
}
