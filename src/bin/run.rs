//! projcycle-run: Run the built executable from its own directory.
//!
//! Takes no arguments. Settings come from the usual projcycle config files
//! and `PROJCYCLE_*` environment variables.

use std::process::ExitCode;

use projcycle::cli::{finish, init_tracing, run_step, Step};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing(false, false);
    finish(run_step(Step::Run, None).await)
}
