//! Release configuration assembly.
//!
//! Turns `RawInputs` and the loaded settings into the document consumed by
//! semantic-release:
//!
//! ```text
//! {
//!   "tagFormat": "v${version}",
//!   "branches": ["**"] | [{ "name": "master", "prerelease": false, "channel": false }],
//!   "ci": bool,
//!   "dryRun": bool,
//!   "plugins": [[name, options], ...]
//! }
//! ```
//!
//! Assembly is pure and infallible; all inputs have defaults.

mod branch;
mod plugins;

#[cfg(test)]
mod tests;

pub use branch::{BranchRule, ReleaseBranch, WILDCARD_BRANCH};
pub use plugins::{PluginEntry, PluginKind};

use crate::config::Config;
use crate::inputs::{NormalizedOptions, RawInputs};
use serde::Serialize;

/// The complete configuration handed to the release engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseConfig {
    pub tag_format: String,
    pub branches: Vec<BranchRule>,
    pub ci: bool,
    pub dry_run: bool,
    pub plugins: Vec<PluginEntry>,
}

impl ReleaseConfig {
    /// Whether the engine would release from `branch`.
    pub fn releases_from(&self, branch: &str) -> bool {
        self.branches.iter().any(|rule| rule.matches(branch))
    }

    /// Names of the configured plugins, in execution order.
    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name.as_str()).collect()
    }
}

/// Build the release configuration from raw process inputs.
pub fn build(raw: &RawInputs, config: &Config) -> ReleaseConfig {
    let options = NormalizedOptions::derive(raw, config);
    build_from_options(&options, config)
}

/// Build the release configuration from already derived options.
pub fn build_from_options(options: &NormalizedOptions, config: &Config) -> ReleaseConfig {
    let release_config = ReleaseConfig {
        tag_format: config.tag_format.clone(),
        branches: vec![BranchRule::for_options(options, config)],
        ci: options.ci,
        dry_run: options.dry_run,
        plugins: plugins::plugins(options, config),
    };

    log::debug!(
        "assembled {} plugins: {}",
        release_config.plugins.len(),
        release_config.plugin_names().join(", ")
    );
    release_config
}
