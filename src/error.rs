//! Error types for projcycle
//!
//! Provides structured error types with suggestions for common issues.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for lifecycle operations
#[derive(Error, Debug)]
pub enum TaskError {
    /// Project layout is inconsistent (e.g. output escapes the root)
    #[error("Invalid project layout: {message}")]
    InvalidLayout { message: String },

    /// Removing the output directory failed
    #[error("Failed to remove {}", .path.display())]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Creating the output directory failed
    #[error("Failed to create {}", .path.display())]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to spawn the command
    #[error("Failed to spawn command: {command}: {error}")]
    SpawnFailed {
        program: String,
        command: String,
        error: String,
        kind: io::ErrorKind,
    },

    /// Command ran but exited unsuccessfully
    #[error("Command failed with {}: {command}", display_status(.exit_code, .signal))]
    CommandFailed {
        command: String,
        exit_code: Option<i32>,
        /// Terminating signal, when killed by one (unix only)
        signal: Option<i32>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

fn display_status(code: &Option<i32>, signal: &Option<i32>) -> String {
    match (code, signal) {
        (Some(code), _) => format!("exit code {}", code),
        (None, Some(signal)) => format!("signal {}", signal),
        (None, None) => "exit code <none>".to_string(),
    }
}

impl TaskError {
    /// Short machine-friendly name for the error kind
    pub fn error_type(&self) -> &'static str {
        match self {
            TaskError::InvalidLayout { .. } => "invalid_layout",
            TaskError::RemoveFailed { .. } => "remove_failed",
            TaskError::CreateDirFailed { .. } => "create_dir_failed",
            TaskError::SpawnFailed { .. } => "spawn_failed",
            TaskError::CommandFailed { .. } => "command_failed",
            TaskError::Config(_) => "config_error",
            TaskError::Io(_) => "io_error",
        }
    }

    /// Process exit code a binary should report for this error.
    ///
    /// A delegated command's own exit code is passed through, and a
    /// command killed by signal `n` reports `128 + n`. Everything else is
    /// a plain failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            TaskError::CommandFailed {
                exit_code: Some(code),
                ..
            } => exit_code_from(*code),
            TaskError::CommandFailed {
                exit_code: None,
                signal: Some(signal),
                ..
            } => exit_code_from(128 + signal),
            _ => 1,
        }
    }
}

/// Narrow a raw child exit code to something a process can report.
///
/// Codes outside `0..=255` can't be reported faithfully and collapse to 1.
pub fn exit_code_from(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

/// Suggest fixes for common error patterns
pub fn suggest_fix(err: &TaskError) -> Option<String> {
    match err {
        TaskError::SpawnFailed { program, kind, .. } => {
            match kind {
                io::ErrorKind::NotFound => {
                    if which::which(program).is_err() && !program.contains('/') {
                        Some(format!(
                            "'{}' was not found on PATH. Install it or set [generator].program in your projcycle config.",
                            program
                        ))
                    } else {
                        Some(format!(
                            "'{}' does not exist. Run 'projcycle generate' and build the project first.",
                            program
                        ))
                    }
                }
                io::ErrorKind::PermissionDenied => Some(format!(
                    "'{}' is not executable. Check file permissions.",
                    program
                )),
                _ => None,
            }
        }
        TaskError::CreateDirFailed { source, .. } if source.kind() == io::ErrorKind::NotFound => {
            Some("The parent of the output directory does not exist. Create it first.".to_string())
        }
        TaskError::RemoveFailed { source, .. } | TaskError::CreateDirFailed { source, .. }
            if source.kind() == io::ErrorKind::PermissionDenied =>
        {
            Some(
                "Permission denied. Check file permissions or run with appropriate access."
                    .to_string(),
            )
        }
        TaskError::InvalidLayout { .. } | TaskError::Config(_) => {
            Some("Check the [project] and [artifact] sections of your projcycle config".to_string())
        }
        _ => None,
    }
}
