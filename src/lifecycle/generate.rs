//! Create the output directory and run the build-system generator

use std::ffi::OsString;
use std::fs;

use crate::config::GeneratorConfig;
use crate::error::TaskError;
use crate::executor::{exec_command, ExecOptions, ExecResult};
use crate::layout::ProjectLayout;

use super::progress;

/// Arguments passed to the generator: `<root> -B <output> -G <backend>`
pub fn generator_args(layout: &ProjectLayout, backend: &str) -> Vec<OsString> {
    vec![
        layout.root.clone().into_os_string(),
        OsString::from("-B"),
        layout.output.clone().into_os_string(),
        OsString::from("-G"),
        OsString::from(backend),
    ]
}

/// Ensure the output directory exists, then run the generator and wait for it.
///
/// The directory is created non-recursively, so a missing parent fails
/// here rather than being created.
///
/// # Errors
/// * `TaskError::CreateDirFailed` - output directory couldn't be created
/// * `TaskError::SpawnFailed` - generator couldn't be launched
/// * `TaskError::CommandFailed` - generator exited non-zero
pub async fn generate(
    layout: &ProjectLayout,
    generator: &GeneratorConfig,
) -> Result<ExecResult, TaskError> {
    progress("Creating the output directory…");

    if !layout.output.is_dir() {
        fs::create_dir(&layout.output).map_err(|source| TaskError::CreateDirFailed {
            path: layout.output.clone(),
            source,
        })?;
        tracing::debug!("Created {}", layout.output.display());
    }

    progress(&format!("Running {}…", generator.program));

    let args = generator_args(layout, &generator.backend);
    let result = exec_command(&generator.program, &args[..], &ExecOptions::default())
        .await?
        .into_checked()?;

    tracing::info!(
        duration_ms = result.duration.as_millis() as u64,
        "Generated {} project in {}",
        generator.backend,
        layout.output.display()
    );

    Ok(result)
}
