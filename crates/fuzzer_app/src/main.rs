mod app;
mod cli;
mod interrupt;
mod report;

use std::process::ExitCode;

use clap::Parser;
use fuzzer_logging::LogDestination;
use log::LevelFilter;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Installed before anything else so an early Ctrl+C still ends the run cleanly.
    let interrupted = interrupt::listen_for_interrupt();

    let cli = Cli::parse();
    let (destination, level) = log_target(&cli);
    fuzzer_logging::initialize(destination, level);

    if cli.no_color {
        colored::control::set_override(false);
    }
    if !cli.no_banner {
        report::print_banner();
    }

    match app::run_until(cli, interrupted).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            report::failure(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

/// A log file takes info-level records; `--verbose` adds debug records and,
/// with a log file, mirrors them to the terminal.
fn log_target(cli: &Cli) -> (LogDestination, LevelFilter) {
    match &cli.log_file {
        Some(path) if cli.verbose => (LogDestination::Both(path.clone()), LevelFilter::Debug),
        Some(path) => (LogDestination::File(path.clone()), LevelFilter::Info),
        None if cli.verbose => (LogDestination::Terminal, LevelFilter::Debug),
        None => (LogDestination::Terminal, LevelFilter::Error),
    }
}
