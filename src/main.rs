//! HydroScope CLI - crop irrigation water estimator
//!
//! Usage: hydroscope <COMMAND>
//!
//! Commands:
//!   estimate  Estimate seasonal irrigation water for a crop
//!   crops     List the crop reference table
//!   supply    Plan pump run time for a volume of water
//!   weather   Summarize a JSON weather log

use std::process::ExitCode;

use clap::Parser;

use hydroscope::presentation::Cli;

mod commands;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut reporter = commands::ErrorReporter::from_cli(&cli);

    match commands::run(cli, &mut reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            reporter.report(&err);
            ExitCode::FAILURE
        }
    }
}
