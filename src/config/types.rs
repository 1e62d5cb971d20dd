//! Settings types and defaults for sr-config.
//!
//! This module defines enums, constants, and default value functions
//! used by the Config struct.

use serde::{Deserialize, Serialize};

/// Placeholder the release engine substitutes with the computed version.
pub const VERSION_PLACEHOLDER: &str = "${version}";

/// Which environment variable decides whether release changes are pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PushSource {
    /// `SR_CONFIG_NPM_PUSH` decides (default).
    #[default]
    PushVariable,
    /// Legacy: push defaults to true while `SR_CONFIG_NPM_PUSH` is unset,
    /// otherwise follows the parsed value of `SR_CONFIG_NPM_PUBLISH`.
    PublishVariable,
}

// Default value functions for serde
pub(crate) fn default_release_branch() -> String {
    "master".to_string()
}
pub(crate) fn default_tag_format() -> String {
    format!("v{}", VERSION_PLACEHOLDER)
}
pub(crate) fn default_changelog_file() -> String {
    "CHANGELOG.md".to_string()
}
pub(crate) fn default_manifest_file() -> String {
    "package.json".to_string()
}
pub(crate) fn default_release_commit_message() -> String {
    "chore(release): publish [no ci]".to_string()
}
