//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Settings for the generated release configuration.
///
/// This struct represents the contents of `.sr-config.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
/// With every field at its default the generated configuration is the
/// stock `master` pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Branch and tag settings
    // =========================================================================
    /// Branch releases are cut from outside of dry runs (default: "master").
    #[serde(default = "default_release_branch")]
    pub release_branch: String,

    /// Git tag template; must contain `${version}` exactly once.
    #[serde(default = "default_tag_format")]
    pub tag_format: String,

    // =========================================================================
    // File settings
    // =========================================================================
    /// Changelog path used when `SR_CONFIG_CHANGELOG_FILE` is unset.
    #[serde(default = "default_changelog_file")]
    pub changelog_file: String,

    /// Package manifest committed alongside the changelog.
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,

    // =========================================================================
    // Push settings
    // =========================================================================
    /// Commit message for the release commit pushed back to the remote.
    #[serde(default = "default_release_commit_message")]
    pub release_commit_message: String,

    /// Environment variable that gates pushing release changes.
    #[serde(default)]
    pub push_source: PushSource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            release_branch: default_release_branch(),
            tag_format: default_tag_format(),
            changelog_file: default_changelog_file(),
            manifest_file: default_manifest_file(),
            release_commit_message: default_release_commit_message(),
            push_source: PushSource::default(),
        }
    }
}
