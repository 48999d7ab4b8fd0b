//! Tracing subscriber setup shared by every binary

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise `--verbose` turns on debug output
/// for this crate and everything else stays at warnings. Logs go to stderr
/// so they never mix with a child's stdout.
pub fn init_tracing(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time();

    // A second install (e.g. from tests) is harmless, so the error is dropped
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "projcycle=debug"
    } else {
        "projcycle=warn"
    }
}
