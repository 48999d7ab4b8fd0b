//! Project lifecycle commands
//!
//! Three independent operations over a shared [`ProjectLayout`]:
//! - [`clean()`] - remove the output directory
//! - [`generate()`] - create the output directory and run the build-system generator
//! - [`run()`] - launch the built executable from its own directory
//!
//! [`ProjectLayout`]: crate::layout::ProjectLayout

pub mod clean;
pub mod generate;
pub mod run;

pub use clean::{clean, CleanOutcome};
pub use generate::{generate, generator_args};
pub use run::run;

use colored::Colorize;

/// Print a `>> ...` progress line to stderr
pub(crate) fn progress(message: &str) {
    eprintln!("{} {}", ">>".cyan().bold(), message);
}
