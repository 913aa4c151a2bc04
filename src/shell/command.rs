//! Program execution.
//!
//! Programs are spawned directly (no intermediate shell) so that a helper
//! path is located exactly as given.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a program.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output, undecoded.
    pub stdout: Vec<u8>,

    /// Standard error, decoded lossily for diagnostics.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the program succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: Vec<u8>, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: Vec<u8>,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Execute a program with both streams captured and wait for it to finish.
///
/// Spawn failures (including a missing program) are returned as the raw
/// `io::Error` so callers can tell them apart from a non-zero exit, which is
/// reported through [`CommandResult::success`]. Stdout is left as bytes so
/// the caller decides how strictly to decode it.
pub fn execute(program: &Path, args: &[&str], cwd: Option<&Path>) -> io::Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }

    tracing::trace!(program = %program.display(), ?args, "spawning");
    let output = cmd.output()?;
    let duration = start.elapsed();

    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if output.status.success() {
        Ok(CommandResult::success(output.stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            output.stdout,
            stderr,
            duration,
        ))
    }
}
