//! Remove the output directory

use std::fs;

use serde::Serialize;

use crate::error::TaskError;
use crate::layout::ProjectLayout;

/// What `clean` found and did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanOutcome {
    /// The output directory existed and was deleted
    Removed,
    /// There was no output directory to delete
    AlreadyClean,
}

/// Recursively delete the output directory if it exists.
///
/// Missing output is a silent no-op. A non-directory at the output path is
/// left untouched. Filesystem errors are returned as-is, never retried.
pub fn clean(layout: &ProjectLayout) -> Result<CleanOutcome, TaskError> {
    if !layout.output.is_dir() {
        tracing::debug!("Nothing to clean at {}", layout.output.display());
        return Ok(CleanOutcome::AlreadyClean);
    }

    fs::remove_dir_all(&layout.output).map_err(|source| TaskError::RemoveFailed {
        path: layout.output.clone(),
        source,
    })?;

    tracing::info!("Removed {}", layout.output.display());
    Ok(CleanOutcome::Removed)
}
