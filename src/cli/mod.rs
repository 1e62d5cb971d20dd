//! CLI argument parsing for sr-config.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// sr-config: semantic-release configuration from environment and arguments.
///
/// Reads SR_CONFIG_NPM_PUBLISH, SR_CONFIG_NPM_PUSH, SR_CONFIG_CHANGELOG_FILE
/// and CI, plus the arguments that will be passed to semantic-release, and
/// emits the matching release configuration.
#[derive(Parser, Debug)]
#[command(name = "sr-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file (default: .sr-config.yaml in the working directory, if present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for sr-config.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print or write the release configuration.
    ///
    /// Pass the semantic-release arguments after `--` so a dry run
    /// (`-- --dry-run`) is reflected in the output.
    Generate(GenerateArgs),

    /// Show the options derived from the environment and arguments.
    Options(ReleaseArgs),

    /// Exit successfully only if releases are cut from the given branch.
    CheckBranch(CheckBranchArgs),

    /// Write a settings file template with the default values.
    Init(InitArgs),
}

/// Output document format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON (`.releaserc.json`).
    #[default]
    Json,
    /// YAML (`.releaserc.yaml`).
    Yaml,
}

/// Arguments forwarded to semantic-release.
#[derive(Args, Debug, Default)]
pub struct ReleaseArgs {
    /// Arguments semantic-release will be invoked with.
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "RELEASE_ARGS"
    )]
    pub release_args: Vec<String>,
}

/// Arguments for the `generate` command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write to this file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub release: ReleaseArgs,
}

/// Arguments for the `check-branch` command.
#[derive(Args, Debug)]
pub struct CheckBranchArgs {
    /// Branch name to check (e.g., master).
    pub branch: String,

    #[command(flatten)]
    pub release: ReleaseArgs,
}

/// Arguments for the `init` command.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing settings file.
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
