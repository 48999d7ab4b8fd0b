//! Async child process execution
//!
//! Runs one external command at a time with:
//! - Inherited stdio (the child talks to the terminal directly)
//! - Working directory control

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};

use tokio::process::Command;

use crate::error::{exit_code_from, TaskError};

/// Options for async command execution
#[derive(Debug, Clone, Default)]
pub struct ExecOptions {
    /// Working directory for the command
    pub working_dir: Option<PathBuf>,
}

impl ExecOptions {
    /// Create options with a working directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(dir.into()),
        }
    }
}

/// Result of running a command to completion
#[derive(Debug, Clone)]
pub struct ExecResult {
    /// Command line that was executed (for display)
    pub command: String,
    /// Whether the command succeeded (exit code 0)
    pub success: bool,
    /// Exit code if the process exited normally
    pub exit_code: Option<i32>,
    /// Terminating signal, when killed by one (unix only)
    pub signal: Option<i32>,
    /// Duration of execution
    pub duration: Duration,
}

impl ExecResult {
    fn from_status(command: String, status: ExitStatus, duration: Duration) -> Self {
        Self {
            command,
            success: status.success(),
            exit_code: status.code(),
            signal: terminating_signal(&status),
            duration,
        }
    }

    /// The exit code a parent process should report for this child.
    ///
    /// The child's own code when it exited, `128 + signal` when it was
    /// killed by a signal, 1 otherwise.
    pub fn exit_code_or_failure(&self) -> u8 {
        match (self.exit_code, self.signal) {
            (Some(code), _) => exit_code_from(code),
            (None, Some(signal)) => exit_code_from(128 + signal),
            (None, None) => 1,
        }
    }

    /// Turn an unsuccessful exit into `TaskError::CommandFailed`
    pub fn into_checked(self) -> Result<Self, TaskError> {
        if self.success {
            Ok(self)
        } else {
            Err(TaskError::CommandFailed {
                command: self.command,
                exit_code: self.exit_code,
                signal: self.signal,
            })
        }
    }
}

#[cfg(unix)]
fn terminating_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn terminating_signal(_status: &ExitStatus) -> Option<i32> {
    None
}

/// Render a program and its arguments as a single display string
pub fn display_command<S: AsRef<OsStr>>(program: &OsStr, args: &[S]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(AsRef::as_ref))
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Execute a command and wait for it to exit
///
/// # Arguments
/// * `program` - The program to execute
/// * `args` - Command arguments
/// * `options` - Execution options
///
/// # Errors
/// * `TaskError::SpawnFailed` - If the command couldn't be spawned
/// * `TaskError::Io` - If waiting on the child failed
pub async fn exec_command<P, S>(
    program: P,
    args: &[S],
    options: &ExecOptions,
) -> Result<ExecResult, TaskError>
where
    P: AsRef<OsStr>,
    S: AsRef<OsStr>,
{
    let program = program.as_ref();
    let start = Instant::now();
    let command_str = display_command(program, args);

    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());
    cmd.kill_on_drop(true);

    if let Some(ref dir) = options.working_dir {
        cmd.current_dir(dir);
    }

    tracing::debug!(
        working_dir = ?options.working_dir,
        "Executing: {}",
        command_str
    );

    let mut child = cmd.spawn().map_err(|e| TaskError::SpawnFailed {
        program: program.to_string_lossy().to_string(),
        command: command_str.clone(),
        error: e.to_string(),
        kind: e.kind(),
    })?;

    let status = child.wait().await?;
    let result = ExecResult::from_status(command_str, status, start.elapsed());

    tracing::debug!(
        exit_code = ?result.exit_code,
        duration_ms = result.duration.as_millis() as u64,
        "Finished: {}",
        result.command
    );

    Ok(result)
}
