//! projcycle CLI entry point
//!
//! Usage:
//!   projcycle clean       Remove the output directory
//!   projcycle generate    Generate project files into the output directory
//!   projcycle run         Run the built executable
//!   projcycle layout      Show the resolved project layout

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use projcycle::cli::{
    commands::LayoutArgs, entry::report_error, finish, init_tracing, run_step, Cli, Commands,
    LayoutReport, Step,
};
use projcycle::config::load_config;
use projcycle::layout::ProjectLayout;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Clean => finish(run_step(Step::Clean, config_path).await),
        Commands::Generate => finish(run_step(Step::Generate, config_path).await),
        Commands::Run => finish(run_step(Step::Run, config_path).await),
        Commands::Layout(args) => match show_layout(args, config_path) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                report_error(&e);
                ExitCode::FAILURE
            }
        },
    }
}

/// Print the resolved layout
fn show_layout(args: LayoutArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let layout = ProjectLayout::from_config(&config)?;
    let report = LayoutReport::collect(&config, layout);

    println!("{}", report.render(&args.format)?);
    Ok(())
}
