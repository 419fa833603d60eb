//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Human-friendly output formatting
//! - Mapping failures to distinct exit codes

use std::process::ExitCode;

use cityweather_core::WeatherError;
use clap::Parser;
use colored::Colorize;

mod cli;
mod logging;
mod render;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cmd = match cli::Cli::try_parse() {
        Ok(cmd) => cmd,
        Err(err) => {
            // --help and --version arrive here too and are not failures.
            let code = if err.use_stderr() { cli::USAGE_EXIT_CODE } else { 0 };
            err.print().ok();
            return ExitCode::from(code);
        }
    };

    logging::init(cmd.verbose);

    match cmd.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "lookup failed");
            match err.downcast_ref::<WeatherError>() {
                Some(weather) if weather.is_not_found() => {
                    eprintln!("{} {weather}", "Error:".bold().red());
                    ExitCode::from(weather.exit_code())
                }
                Some(weather) => {
                    eprintln!("{} {weather}", "Network error:".bold().red());
                    ExitCode::from(weather.exit_code())
                }
                None => {
                    eprintln!("{} {err:#}", "Error:".bold().red());
                    ExitCode::FAILURE
                }
            }
        }
    }
}
