//! Read-only view of the resolved layout for `projcycle layout`

use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

use crate::config::{find_config_files, Config};
use crate::layout::ProjectLayout;

use super::commands::OutputFormat;

/// Everything `layout` reports
#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    #[serde(flatten)]
    pub layout: ProjectLayout,
    pub generator: String,
    pub backend: String,
    /// Where the generator resolves on PATH, if it does
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator_path: Option<PathBuf>,
    pub output_exists: bool,
    pub artifact_exists: bool,
    pub config_files: Vec<PathBuf>,
}

impl LayoutReport {
    /// Inspect the filesystem and PATH for the given layout
    pub fn collect(config: &Config, layout: ProjectLayout) -> Self {
        Self {
            generator: config.generator.program.clone(),
            backend: config.generator.backend.clone(),
            generator_path: which::which(&config.generator.program).ok(),
            output_exists: layout.output.is_dir(),
            artifact_exists: layout.artifact.is_file(),
            config_files: find_config_files(),
            layout,
        }
    }

    /// Render in the requested format
    pub fn render(&self, format: &OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(self),
            OutputFormat::Plain => Ok(self.layout.output.display().to_string()),
            OutputFormat::Table => Ok(self.table()),
        }
    }

    fn table(&self) -> String {
        let yes_no = |b: bool| if b { "yes".green() } else { "no".yellow() };
        let generator_at = match self.generator_path {
            Some(ref path) => path.display().to_string().as_str().normal(),
            None => "not found on PATH".red(),
        };

        let mut lines = vec![
            format!("{}: {}", "Root".cyan(), self.layout.root.display()),
            format!(
                "{}: {} (exists: {})",
                "Output".cyan(),
                self.layout.output.display(),
                yes_no(self.output_exists)
            ),
            format!(
                "{}: {}",
                "Artifact Dir".cyan(),
                self.layout.artifact_dir.display()
            ),
            format!(
                "{}: {} (exists: {})",
                "Artifact".cyan(),
                self.layout.artifact.display(),
                yes_no(self.artifact_exists)
            ),
            format!(
                "{}: {} -G {} ({})",
                "Generator".cyan(),
                self.generator,
                self.backend,
                generator_at
            ),
        ];

        lines.push(format!("{}:", "Config Files".cyan()));
        if self.config_files.is_empty() {
            lines.push("  None (using defaults)".to_string());
        } else {
            for file in &self.config_files {
                lines.push(format!("  - {}", file.display()));
            }
        }

        lines.join("\n")
    }
}
