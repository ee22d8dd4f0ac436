// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use tlocc::{Args, Config, logging};
use tracing::error;

/// Exit status for configuration errors detected before any work starts.
const CONFIG_ERROR: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = logging::init(logging::level_for(args.verbose, args.quiet)) {
        eprintln!("tlocc: {err:#}");
    }

    let config = match Config::resolve(&args) {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return ExitCode::from(CONFIG_ERROR);
        }
    };

    match tlocc::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
