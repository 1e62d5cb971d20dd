//! Command implementations for sr-config.
//!
//! The dispatcher resolves the settings file and captures the process
//! environment once, then hands plain values to each handler.

mod check_branch;
mod generate;
mod init;
mod options;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Result;
use crate::inputs::RawInputs;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Init(args) => init::cmd_init(config_path, args.force),
        Command::Generate(args) => {
            let config = Config::discover(config_path)?;
            let raw = RawInputs::from_process(args.release.release_args);
            generate::cmd_generate(&raw, &config, args.format, args.output.as_deref())
        }
        Command::Options(args) => {
            let config = Config::discover(config_path)?;
            let raw = RawInputs::from_process(args.release_args);
            options::cmd_options(&raw, &config)
        }
        Command::CheckBranch(args) => {
            let config = Config::discover(config_path)?;
            let raw = RawInputs::from_process(args.release.release_args);
            check_branch::cmd_check_branch(&raw, &config, &args.branch)
        }
    }
}
