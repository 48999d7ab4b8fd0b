//! Common test utilities for projcycle tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Minimal CMakeLists.txt marking a project root
pub const SAMPLE_CMAKELISTS: &str = r#"cmake_minimum_required(VERSION 3.16)
project(perlin CXX)
add_subdirectory(source)
"#;

/// Creates a temporary directory that looks like a CMake project checkout
pub fn create_cmake_project() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("CMakeLists.txt"), SAMPLE_CMAKELISTS)
        .expect("Failed to write CMakeLists.txt");
    std::fs::create_dir_all(dir.path().join("source")).expect("Failed to create source dir");
    let path = dir.path().to_path_buf();
    (dir, path)
}

/// Writes a script and marks it executable
pub fn write_executable(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create script parent");
    }
    std::fs::write(path, content).expect("Failed to write script");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path)
            .expect("Failed to get metadata")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(path, perms).expect("Failed to set permissions");
    }
}

/// Installs a stand-in for cmake in `dir`.
///
/// It records one argument per line in `<dir>/generator-args.txt`, drops a
/// file into the `-B` directory, and exits with `exit_code`.
pub fn fake_generator(dir: &Path, exit_code: i32) -> PathBuf {
    let script = dir.join("fake-cmake");
    let log = dir.join("generator-args.txt");
    write_executable(
        &script,
        &format!(
            r#"#!/bin/sh
printf '%s\n' "$@" > '{log}'
touch "$3/generated.stamp"
exit {exit_code}
"#,
            log = log.display(),
            exit_code = exit_code
        ),
    );
    script
}

/// Reads back the arguments recorded by [`fake_generator`]
pub fn recorded_generator_args(dir: &Path) -> Vec<String> {
    std::fs::read_to_string(dir.join("generator-args.txt"))
        .expect("Generator was not invoked")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Installs a stand-in for the built executable at `artifact`.
///
/// It writes its working directory to `cwd.txt` next to itself and exits
/// with `exit_code`.
pub fn fake_artifact(artifact: &Path, exit_code: i32) {
    write_executable(
        artifact,
        &format!(
            r#"#!/bin/sh
pwd -P > cwd.txt
echo "perlin: rendered"
exit {}
"#,
            exit_code
        ),
    );
}
