//! sr-config: semantic-release configuration from environment and arguments.
//!
//! This is the main entry point for the `sr-config` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes. Logging goes to stderr (`RUST_LOG=debug` for details)
//! so stdout carries only the generated document.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod inputs;
pub mod release;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
