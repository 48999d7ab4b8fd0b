//! Command execution module
//!
//! Provides async child process execution with:
//! - Inherited stdio
//! - Working directory control
//! - Exit status propagation

pub mod process;

pub use process::*;
