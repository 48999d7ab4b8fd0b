//! Shared entry point for the lifecycle binaries
//!
//! `projcycle clean|generate|run` and the single-purpose
//! `projcycle-clean`, `projcycle-generate`, `projcycle-run` binaries all
//! funnel through [`run_step`] and [`finish`], so they behave identically.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use crate::config::load_config;
use crate::error::{suggest_fix, TaskError};
use crate::layout::ProjectLayout;
use crate::lifecycle::{clean, generate, run};

/// One lifecycle operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Clean,
    Generate,
    Run,
}

/// Load config, resolve the layout and perform `step`.
///
/// Returns the exit code to report on success: 0 for clean and generate,
/// the artifact's own code for run.
pub async fn run_step(step: Step, config_path: Option<&Path>) -> Result<u8> {
    let config = load_config(config_path)?;
    let layout = ProjectLayout::from_config(&config)?;

    tracing::debug!(
        root = %layout.root.display(),
        output = %layout.output.display(),
        "Running {:?}",
        step
    );

    match step {
        Step::Clean => {
            clean(&layout)?;
            Ok(0)
        }
        Step::Generate => {
            generate(&layout, &config.generator).await?;
            Ok(0)
        }
        Step::Run => Ok(run(&layout).await?.exit_code_or_failure()),
    }
}

/// Turn a step result into the process exit code, reporting any error.
pub fn finish(result: Result<u8>) -> ExitCode {
    if let Err(ref e) = result {
        report_error(e);
    }
    ExitCode::from(status_code(&result))
}

fn status_code(result: &Result<u8>) -> u8 {
    match result {
        Ok(code) => *code,
        Err(e) => e
            .downcast_ref::<TaskError>()
            .map(TaskError::exit_code)
            .unwrap_or(1),
    }
}

/// Print an error (and a hint when one applies) to stderr
pub fn report_error(err: &anyhow::Error) {
    eprintln!("{}: {:#}", "error".red().bold(), err);
    if let Some(hint) = err.downcast_ref::<TaskError>().and_then(suggest_fix) {
        eprintln!("{}: {}", "hint".yellow().bold(), hint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_success() {
        assert_eq!(status_code(&Ok(0)), 0);
        assert_eq!(status_code(&Ok(3)), 3);
    }

    #[test]
    fn test_status_code_passes_through_command_exit_code() {
        let err = anyhow::Error::from(TaskError::CommandFailed {
            command: "cmake".to_string(),
            exit_code: Some(4),
            signal: None,
        });
        assert_eq!(status_code(&Err(err)), 4);
    }

    #[test]
    fn test_status_code_layout_error_is_failure() {
        let err = anyhow::Error::from(TaskError::InvalidLayout {
            message: "bad".to_string(),
        });
        assert_eq!(status_code(&Err(err)), 1);
    }

    #[test]
    fn test_status_code_other_errors_are_failure() {
        let err = anyhow::anyhow!("Failed to load configuration");
        assert_eq!(status_code(&Err(err)), 1);
    }
}
