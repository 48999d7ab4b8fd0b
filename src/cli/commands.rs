//! CLI command definitions using clap
//!
//! Defines all CLI subcommands and their arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Clean, generate and run a CMake project.
///
/// All commands share one output directory beneath the project root.
/// The root is taken from config or found by walking up to the outermost
/// CMakeLists.txt.
#[derive(Parser, Debug)]
#[command(name = "projcycle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (overrides default XDG paths)
    #[arg(short, long, global = true, env = "PROJCYCLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove the output directory
    Clean,

    /// Create the output directory and run the build-system generator
    Generate,

    /// Run the built executable from its own directory
    Run,

    /// Show the resolved project layout
    Layout(LayoutArgs),
}

/// Arguments for the `layout` subcommand
#[derive(Parser, Debug)]
pub struct LayoutArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    Table,
    /// JSON output
    Json,
    /// Plain text (output directory only)
    Plain,
}
