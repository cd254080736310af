#[macro_use]
extern crate tracing;

#[macro_use]
extern crate eyre;

mod commands;
mod core;

use std::process::ExitCode;

use clap::Parser;

use crate::{
    commands::Cli,
    core::{logging, AppConfig},
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Variables may also come from the environment directly
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            eprintln!("Failed to prepare .env variables: {err}");

            return ExitCode::FAILURE;
        }
    }

    if let Err(err) = AppConfig::init() {
        eprintln!("Failed to initialize config: {err:?}");

        return ExitCode::FAILURE;
    }

    let _log_worker_guard = match logging::init(AppConfig::get()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Failed to initialize logging: {err:?}");

            return ExitCode::FAILURE;
        }
    };

    match commands::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(source) => {
            error!(?source, "Failed to run command");

            ExitCode::FAILURE
        }
    }
}
