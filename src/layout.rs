//! Project layout resolution
//!
//! A [`ProjectLayout`] pins down the project root and the ephemeral output
//! directory beneath it. It is resolved once at startup and handed to each
//! lifecycle command.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::config::Config;
use crate::error::TaskError;

/// Resolved, validated project paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLayout {
    /// Absolute project source root
    pub root: PathBuf,
    /// Absolute output directory, always strictly inside `root`
    pub output: PathBuf,
    /// Directory holding the built executable
    pub artifact_dir: PathBuf,
    /// Full path of the built executable
    pub artifact: PathBuf,
}

impl ProjectLayout {
    /// Build a layout from a root and the relative pieces beneath it.
    ///
    /// # Errors
    /// * `TaskError::InvalidLayout` - root isn't absolute, the output
    ///   directory escapes the root, or the artifact location is malformed
    pub fn new(
        root: impl Into<PathBuf>,
        output_dir: impl AsRef<Path>,
        profile_dir: impl AsRef<Path>,
        executable: &str,
    ) -> Result<Self, TaskError> {
        let root = normalize(&root.into());
        if !root.is_absolute() {
            return Err(invalid(format!(
                "project root must be absolute, got '{}'",
                root.display()
            )));
        }

        let output = resolve_output(&root, output_dir.as_ref())?;

        let profile_dir = profile_dir.as_ref();
        if profile_dir.is_absolute() || has_parent_component(profile_dir) {
            return Err(invalid(format!(
                "profile directory must be relative and stay inside the output directory, got '{}'",
                profile_dir.display()
            )));
        }

        if executable.is_empty() || executable.contains('/') || executable.contains('\\') {
            return Err(invalid(format!(
                "executable must be a bare file name, got '{}'",
                executable
            )));
        }

        let artifact_dir = normalize(&output.join(profile_dir));
        let artifact = artifact_dir.join(executable);

        Ok(Self {
            root,
            output,
            artifact_dir,
            artifact,
        })
    }

    /// Resolve the layout from configuration and the current directory.
    ///
    /// # Errors
    /// * `TaskError::InvalidLayout` - `project.root` is unset and no
    ///   ancestor of the current directory holds the marker
    pub fn from_config(config: &Config) -> Result<Self, TaskError> {
        let cwd = std::env::current_dir()?;
        let root = match config.project.root {
            Some(ref root) => cwd.join(root),
            None => locate_root(&cwd, &config.project.marker).ok_or_else(|| {
                invalid(format!(
                    "no {} found above {}; set project.root",
                    config.project.marker,
                    cwd.display()
                ))
            })?,
        };

        tracing::debug!("Project root: {}", root.display());

        Self::new(
            root,
            &config.project.output_dir,
            &config.artifact.profile_dir,
            &config.artifact.executable,
        )
    }
}

/// Walk up from `start` and return the outermost directory containing `marker`.
///
/// Nested CMake subprojects carry their own marker, so the outermost match
/// is the top-level project. `None` when no ancestor has the marker.
pub fn locate_root(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .filter(|dir| dir.join(marker).is_file())
        .last()
        .map(Path::to_path_buf)
}

fn resolve_output(root: &Path, output_dir: &Path) -> Result<PathBuf, TaskError> {
    if output_dir.as_os_str().is_empty() {
        return Err(invalid("output directory must not be empty".to_string()));
    }
    if has_parent_component(output_dir) {
        return Err(invalid(format!(
            "output directory must not contain '..', got '{}'",
            output_dir.display()
        )));
    }

    let output = normalize(&root.join(output_dir));
    if output == root || !output.starts_with(root) {
        return Err(invalid(format!(
            "output directory '{}' must be inside the project root '{}'",
            output.display(),
            root.display()
        )));
    }

    Ok(output)
}

fn has_parent_component(path: &Path) -> bool {
    path.components().any(|c| matches!(c, Component::ParentDir))
}

/// Drop `.` components and trailing separators without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn invalid(message: String) -> TaskError {
    TaskError::InvalidLayout { message }
}
