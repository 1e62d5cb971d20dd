//! Plugin pipeline.
//!
//! The pipeline is the fixed sequence in `PluginKind::ALL`, filtered by each
//! kind's inclusion predicate. The three base kinds are always present; the
//! remaining ones are dropped on dry runs.

use crate::config::Config;
use crate::inputs::NormalizedOptions;
use serde::ser::{Serialize, Serializer};
use serde_json::{Value, json};
use std::fmt;

/// Conventional-commits preset names. The notes generator keeps the
/// camel-cased spelling used by the lerna configuration.
const ANALYZER_PRESET: &str = "conventionalcommits";
const NOTES_PRESET: &str = "conventionalCommits";

/// A plugin name with its options, serialized as `[name, options]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginEntry {
    pub name: String,
    pub options: Value,
}

impl PluginEntry {
    pub fn new(name: impl Into<String>, options: Value) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }
}

impl Serialize for PluginEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.name, &self.options).serialize(serializer)
    }
}

/// Every plugin the pipeline can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginKind {
    /// Determines the version bump from commit messages.
    CommitAnalyzer,
    /// Renders release notes.
    ReleaseNotes,
    /// Writes release notes into the changelog file.
    Changelog,
    /// Bumps the manifest version and optionally publishes to the registry.
    Npm,
    /// Creates the GitHub release.
    Github,
    /// Commits and pushes the manifest and changelog.
    Git,
}

impl PluginKind {
    /// Pipeline order.
    pub const ALL: [PluginKind; 6] = [
        PluginKind::CommitAnalyzer,
        PluginKind::ReleaseNotes,
        PluginKind::Changelog,
        PluginKind::Npm,
        PluginKind::Github,
        PluginKind::Git,
    ];

    /// Package name the release engine resolves.
    pub fn name(&self) -> &'static str {
        match self {
            PluginKind::CommitAnalyzer => "@semantic-release/commit-analyzer",
            PluginKind::ReleaseNotes => "@semantic-release/release-notes-generator",
            PluginKind::Changelog => "@semantic-release/changelog",
            PluginKind::Npm => "@semantic-release/npm",
            PluginKind::Github => "@semantic-release/github",
            PluginKind::Git => "@semantic-release/git",
        }
    }

    /// Inclusion predicate.
    pub fn is_enabled(&self, options: &NormalizedOptions) -> bool {
        match self {
            PluginKind::CommitAnalyzer | PluginKind::ReleaseNotes | PluginKind::Changelog => true,
            PluginKind::Npm => !options.dry_run,
            PluginKind::Github => !options.dry_run && options.ci,
            PluginKind::Git => !options.dry_run && options.push,
        }
    }

    /// The entry for this kind under the given options.
    pub fn entry(&self, options: &NormalizedOptions, config: &Config) -> PluginEntry {
        let plugin_options = match self {
            // refactor and style bump the patch version instead of nothing.
            PluginKind::CommitAnalyzer => json!({
                "preset": ANALYZER_PRESET,
                "releaseRules": [
                    { "type": "refactor", "release": "patch" },
                    { "type": "style", "release": "patch" },
                ],
            }),
            PluginKind::ReleaseNotes => json!({
                "preset": NOTES_PRESET,
                "presetConfig": { "types": release_note_types() },
            }),
            PluginKind::Changelog => json!({
                "changelogFile": options.changelog_file,
            }),
            PluginKind::Npm => json!({
                "npmPublish": options.npm_publish,
            }),
            PluginKind::Github => json!({
                "successComment": false,
                "failComment": false,
            }),
            PluginKind::Git => json!({
                "assets": [config.manifest_file, options.changelog_file],
                "message": config.release_commit_message,
            }),
        };

        PluginEntry::new(self.name(), plugin_options)
    }
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Release note sections; hidden types are parsed but not rendered.
fn release_note_types() -> Value {
    json!([
        { "type": "feat", "section": "Features", "hidden": false },
        { "type": "fix", "section": "Bug Fixes", "hidden": false },
        { "type": "perf", "section": "Performance", "hidden": false },
        { "type": "refactor", "section": "Code Refactoring", "hidden": false },
        { "type": "revert", "section": "Changes Reverted", "hidden": false },
        { "type": "docs", "hidden": true },
        { "type": "test", "hidden": true },
        { "type": "style", "hidden": true },
        { "type": "chore", "hidden": true },
    ])
}

/// Enabled entries in pipeline order.
pub(crate) fn plugins(options: &NormalizedOptions, config: &Config) -> Vec<PluginEntry> {
    PluginKind::ALL
        .iter()
        .filter(|kind| {
            let enabled = kind.is_enabled(options);
            if !enabled {
                log::debug!("skipping plugin {}", kind);
            }
            enabled
        })
        .map(|kind| kind.entry(options, config))
        .collect()
}
