mod cli;
mod command;
mod config;
mod interrupt;
mod logger;

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};

use crate::cli::Cli;
use crate::command::Outcome;

/// Conventional exit status after SIGINT
const EXIT_INTERRUPTED: u8 = 130;

fn main() -> ExitCode {
    let _log_guard = logger::init();
    let cli = Cli::parse();
    debug!(?cli, "dotspin:start");

    if let Err(e) = interrupt::install() {
        debug!(error = %e, "dotspin:ctrl-c handling unavailable");
    }

    match command::run(cli) {
        Ok(Outcome::Completed) => ExitCode::SUCCESS,
        Ok(Outcome::Interrupted) => ExitCode::from(EXIT_INTERRUPTED),
        Err(e) => {
            error!(error = %e, "dotspin:failed");
            match e.downcast_ref::<dotspin::Error>() {
                Some(lookup @ dotspin::Error::UnknownSpinner { .. }) => println!("{lookup}"),
                _ => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
