//! CLI module for projcycle
//!
//! Provides the command-line interface with the following subcommands:
//! - `clean` - Remove the output directory
//! - `generate` - Run the build-system generator into the output directory
//! - `run` - Run the built executable
//! - `layout` - Show the resolved project layout

pub mod commands;
pub mod entry;
pub mod logging;
pub mod report;

pub use commands::{Cli, Commands};
pub use entry::{finish, run_step, Step};
pub use logging::init_tracing;
pub use report::LayoutReport;
