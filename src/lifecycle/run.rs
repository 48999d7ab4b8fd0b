//! Launch the built executable

use crate::error::TaskError;
use crate::executor::{exec_command, ExecOptions, ExecResult};
use crate::layout::ProjectLayout;

/// Run the artifact with no arguments from inside its own directory.
///
/// No existence check is made first: a missing or non-executable artifact
/// surfaces as `TaskError::SpawnFailed`. A non-zero exit is not an
/// error here; the status is returned for the caller to pass on.
pub async fn run(layout: &ProjectLayout) -> Result<ExecResult, TaskError> {
    let options = ExecOptions::in_dir(&layout.artifact_dir);
    let result = exec_command(&layout.artifact, &[] as &[&str], &options).await?;

    tracing::info!(
        exit_code = ?result.exit_code,
        duration_ms = result.duration.as_millis() as u64,
        "{} exited",
        layout.artifact.display()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_run_before_build_fails_to_launch() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(dir.path(), "build", "source/Debug", "perlin").unwrap();

        let err = run(&layout).await.unwrap_err();

        assert!(matches!(err, TaskError::SpawnFailed { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_not_executable_fails_to_launch() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(dir.path(), "build", "source/Debug", "perlin").unwrap();
        std::fs::create_dir_all(&layout.artifact_dir).unwrap();
        std::fs::write(&layout.artifact, "#!/bin/sh\nexit 0\n").unwrap();

        let err = run(&layout).await.unwrap_err();

        match err {
            TaskError::SpawnFailed { kind, .. } => {
                assert_eq!(kind, std::io::ErrorKind::PermissionDenied)
            }
            other => panic!("Expected SpawnFailed, got {:?}", other),
        }
    }
}
