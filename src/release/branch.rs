//! Branch rules.

use crate::config::Config;
use crate::inputs::NormalizedOptions;
use globset::Glob;
use serde::Serialize;

/// Pattern matching every branch, used for dry runs.
pub const WILDCARD_BRANCH: &str = "**";

/// A single entry of the `branches` list.
///
/// Serialized untagged: patterns as a bare string, release branches as an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BranchRule {
    /// Glob over branch names, without channel metadata.
    Pattern(String),
    /// Exact branch with release-line metadata.
    Release(ReleaseBranch),
}

/// A named branch that publishes to the default channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseBranch {
    pub name: String,
    pub prerelease: bool,
    pub channel: bool,
}

impl BranchRule {
    /// Wildcard for dry runs, otherwise the configured release branch.
    pub fn for_options(options: &NormalizedOptions, config: &Config) -> Self {
        if options.dry_run {
            Self::Pattern(WILDCARD_BRANCH.to_string())
        } else {
            Self::Release(ReleaseBranch {
                name: config.release_branch.clone(),
                prerelease: false,
                channel: false,
            })
        }
    }

    /// Whether this rule selects `branch`.
    ///
    /// An unparseable pattern matches nothing.
    pub fn matches(&self, branch: &str) -> bool {
        match self {
            Self::Pattern(pattern) => match Glob::new(pattern) {
                Ok(glob) => glob.compile_matcher().is_match(branch),
                Err(e) => {
                    log::warn!("ignoring invalid branch pattern '{}': {}", pattern, e);
                    false
                }
            },
            Self::Release(release) => release.name == branch,
        }
    }
}
