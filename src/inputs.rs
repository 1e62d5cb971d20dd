//! Process inputs and their normalization.
//!
//! `RawInputs` is captured once at the program boundary; everything
//! downstream works on `NormalizedOptions` and never reads the process
//! environment itself.
//!
//! # Parsing rules
//!
//! - Boolean variables: unset yields the default, otherwise true only for
//!   the exact string `"true"`.
//! - `CI`: true when set, non-empty, and not the literal `"false"`.
//! - Release arguments: a dry run is requested when any argument equals
//!   `"dryrun"` after removing every `-` and lower-casing (`--dry-run`,
//!   `-dryRun`, `--DRYRUN` all match).

use crate::config::{Config, PushSource};
use serde::Serialize;

/// Whether the package is published to the registry.
pub const ENV_NPM_PUBLISH: &str = "SR_CONFIG_NPM_PUBLISH";
/// Whether version and changelog changes are pushed to the remote.
pub const ENV_NPM_PUSH: &str = "SR_CONFIG_NPM_PUSH";
/// Overrides the changelog path.
pub const ENV_CHANGELOG_FILE: &str = "SR_CONFIG_CHANGELOG_FILE";
/// Set by CI providers such as GitHub Actions.
pub const ENV_CI: &str = "CI";

const DRY_RUN_TOKEN: &str = "dryrun";

/// Unprocessed environment values and release arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInputs {
    pub npm_publish: Option<String>,
    pub push: Option<String>,
    pub changelog_file: Option<String>,
    pub ci: Option<String>,
    /// Arguments forwarded to the release engine, program name excluded.
    pub cli_arguments: Vec<String>,
}

impl RawInputs {
    /// Capture inputs from the real process environment.
    ///
    /// Variables that are unset or not valid UTF-8 are treated as unset.
    pub fn from_process(release_args: Vec<String>) -> Self {
        let var = |key: &str| std::env::var(key).ok();
        Self {
            npm_publish: var(ENV_NPM_PUBLISH),
            push: var(ENV_NPM_PUSH),
            changelog_file: var(ENV_CHANGELOG_FILE),
            ci: var(ENV_CI),
            cli_arguments: release_args,
        }
    }
}

/// Options derived from `RawInputs` that drive the release configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedOptions {
    pub ci: bool,
    pub dry_run: bool,
    pub npm_publish: bool,
    pub push: bool,
    pub changelog_file: String,
}

impl NormalizedOptions {
    /// Derive options from raw inputs; `config` supplies the changelog
    /// fallback and the push source.
    pub fn derive(raw: &RawInputs, config: &Config) -> Self {
        let npm_publish = parse_flag(raw.npm_publish.as_deref(), true);
        let push = match config.push_source {
            PushSource::PushVariable => parse_flag(raw.push.as_deref(), true),
            PushSource::PublishVariable => match raw.push {
                None => true,
                Some(_) => parse_flag(raw.npm_publish.as_deref(), false),
            },
        };

        let options = Self {
            ci: parse_ci(raw.ci.as_deref()),
            dry_run: is_dry_run(&raw.cli_arguments),
            npm_publish,
            push,
            changelog_file: raw
                .changelog_file
                .clone()
                .unwrap_or_else(|| config.changelog_file.clone()),
        };

        log::debug!("derived release options: {:?}", options);
        options
    }
}

/// Strip every `-` and lower-case.
pub fn normalize_argument(arg: &str) -> String {
    arg.replace('-', "").to_lowercase()
}

/// True if any argument normalizes to `"dryrun"`.
pub fn is_dry_run<S: AsRef<str>>(args: &[S]) -> bool {
    args.iter()
        .any(|arg| normalize_argument(arg.as_ref()) == DRY_RUN_TOKEN)
}

/// Parse a boolean environment value.
pub fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value {
        None => default,
        Some(v) => v == "true",
    }
}

/// Parse the CI indicator.
pub fn parse_ci(value: Option<&str>) -> bool {
    matches!(value, Some(v) if !v.is_empty() && v != "false")
}
