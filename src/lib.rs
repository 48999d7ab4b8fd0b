//! projcycle - Project lifecycle CLI for CMake projects
//!
//! Three independent commands sharing one output directory beneath the
//! project root:
//! - **clean** - remove the output directory
//! - **generate** - create it and run `cmake <root> -B <output> -G <backend>`
//! - **run** - launch the built executable from its own directory
//!
//! ## Features
//!
//! - Project root discovery by walking up to the outermost `CMakeLists.txt`
//! - XDG-compliant layered configuration
//! - Environment variable and shell command interpolation in paths
//! - Child exit codes passed through unchanged

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod layout;
pub mod lifecycle;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use error::TaskError;
pub use executor::{exec_command, ExecOptions, ExecResult};
pub use layout::{locate_root, ProjectLayout};
pub use lifecycle::{clean, generate, run, CleanOutcome};
