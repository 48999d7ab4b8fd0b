//! Configuration model for projcycle
//!
//! Defines the structure for XDG-compliant layered configuration.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Where the project lives and where its output goes
    #[serde(default)]
    pub project: ProjectConfig,

    /// External build-system generator invocation
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Location of the built executable inside the output directory
    #[serde(default)]
    pub artifact: ArtifactConfig,
}

/// Project root and output directory settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Explicit project root. When unset the root is found by walking up
    /// from the current directory looking for `marker`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,

    /// File whose presence identifies the project root
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Output directory, relative to the root
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_marker() -> String {
    "CMakeLists.txt".to_string()
}

fn default_output_dir() -> String {
    "build".to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: None,
            marker: default_marker(),
            output_dir: default_output_dir(),
        }
    }
}

/// Build-system generator configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Generator executable
    #[serde(default = "default_generator_program")]
    pub program: String,

    /// Backend passed with `-G`
    #[serde(default = "default_backend")]
    pub backend: String,
}

fn default_generator_program() -> String {
    "cmake".to_string()
}

fn default_backend() -> String {
    "Xcode".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            program: default_generator_program(),
            backend: default_backend(),
        }
    }
}

/// Built executable location
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ArtifactConfig {
    /// Profile-named subdirectory of the output directory holding the executable
    #[serde(default = "default_profile_dir")]
    pub profile_dir: String,

    /// Executable file name
    #[serde(default = "default_executable")]
    pub executable: String,
}

fn default_profile_dir() -> String {
    "source/Debug".to_string()
}

fn default_executable() -> String {
    "perlin".to_string()
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            profile_dir: default_profile_dir(),
            executable: default_executable(),
        }
    }
}
