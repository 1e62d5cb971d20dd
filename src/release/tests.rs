//! Tests for release configuration assembly.

use super::*;
use crate::config::PushSource;
use crate::test_support::InputsBuilder;
use serde_json::json;

const ANALYZER: &str = "@semantic-release/commit-analyzer";
const NOTES: &str = "@semantic-release/release-notes-generator";
const CHANGELOG: &str = "@semantic-release/changelog";
const NPM: &str = "@semantic-release/npm";
const GITHUB: &str = "@semantic-release/github";
const GIT: &str = "@semantic-release/git";

fn build_default(raw: &RawInputs) -> ReleaseConfig {
    build(raw, &Config::default())
}

fn options(ci: bool, dry_run: bool, npm_publish: bool, push: bool) -> NormalizedOptions {
    NormalizedOptions {
        ci,
        dry_run,
        npm_publish,
        push,
        changelog_file: "CHANGELOG.md".to_string(),
    }
}

fn plugin<'a>(config: &'a ReleaseConfig, name: &str) -> &'a PluginEntry {
    config
        .plugins
        .iter()
        .find(|p| p.name == name)
        .unwrap_or_else(|| panic!("plugin {} not configured", name))
}

#[test]
fn test_empty_inputs_release_from_master() {
    let config = build_default(&RawInputs::default());

    assert_eq!(config.tag_format, "v${version}");
    assert!(!config.ci);
    assert!(!config.dry_run);
    assert_eq!(
        config.branches,
        vec![BranchRule::Release(ReleaseBranch {
            name: "master".to_string(),
            prerelease: false,
            channel: false,
        })]
    );
    // push defaults to true, so the git entry follows npm.
    assert_eq!(
        config.plugin_names(),
        vec![ANALYZER, NOTES, CHANGELOG, NPM, GIT]
    );
}

#[test]
fn test_dry_run_keeps_only_base_plugins() {
    let raw = InputsBuilder::new()
        .ci("true")
        .npm_publish("true")
        .push("true")
        .args(&["--dry-run"])
        .build();
    let config = build_default(&raw);

    assert!(config.dry_run);
    assert_eq!(
        config.branches,
        vec![BranchRule::Pattern(WILDCARD_BRANCH.to_string())]
    );
    assert_eq!(config.plugin_names(), vec![ANALYZER, NOTES, CHANGELOG]);
}

#[test]
fn test_dry_run_spellings() {
    for arg in ["--dry-run", "-dryRun", "--dryrun", "--DRY-RUN", "dry-run"] {
        let config = build_default(&InputsBuilder::new().args(&[arg]).build());
        assert!(config.dry_run, "{} should enable dry run", arg);
        assert_eq!(config.plugins.len(), 3);
    }
}

#[test]
fn test_ci_with_push_has_all_plugins_in_order() {
    let raw = InputsBuilder::new().ci("true").build();
    let config = build_default(&raw);

    assert!(config.ci);
    assert_eq!(
        config.plugin_names(),
        vec![ANALYZER, NOTES, CHANGELOG, NPM, GITHUB, GIT]
    );
}

#[test]
fn test_no_github_without_ci() {
    for push in [true, false] {
        let config = build_from_options(&options(false, false, true, push), &Config::default());
        assert!(!config.plugin_names().contains(&GITHUB));
    }
}

#[test]
fn test_publish_false_keeps_npm_entry_without_publishing() {
    let raw = InputsBuilder::new().npm_publish("false").ci("true").build();
    let config = build_default(&raw);

    assert_eq!(
        config.plugin_names(),
        vec![ANALYZER, NOTES, CHANGELOG, NPM, GITHUB, GIT]
    );
    assert_eq!(plugin(&config, NPM).options, json!({"npmPublish": false}));
}

#[test]
fn test_push_false_drops_git_entry() {
    let raw = InputsBuilder::new().push("false").ci("true").build();
    let config = build_default(&raw);

    assert_eq!(
        config.plugin_names(),
        vec![ANALYZER, NOTES, CHANGELOG, NPM, GITHUB]
    );
}

#[test]
fn test_legacy_push_source_follows_publish_variable() {
    let settings = Config {
        push_source: PushSource::PublishVariable,
        ..Config::default()
    };
    let raw = InputsBuilder::new()
        .npm_publish("false")
        .push("true")
        .build();

    let config = build(&raw, &settings);
    assert!(!config.plugin_names().contains(&GIT));
}

#[test]
fn test_predicates() {
    let dry = options(true, true, true, true);
    let ci = options(true, false, true, false);
    let local = options(false, false, false, true);

    for kind in [
        PluginKind::CommitAnalyzer,
        PluginKind::ReleaseNotes,
        PluginKind::Changelog,
    ] {
        assert!(kind.is_enabled(&dry));
        assert!(kind.is_enabled(&ci));
        assert!(kind.is_enabled(&local));
    }

    assert!(!PluginKind::Npm.is_enabled(&dry));
    assert!(PluginKind::Npm.is_enabled(&local));

    assert!(!PluginKind::Github.is_enabled(&dry));
    assert!(PluginKind::Github.is_enabled(&ci));
    assert!(!PluginKind::Github.is_enabled(&local));

    assert!(!PluginKind::Git.is_enabled(&dry));
    assert!(!PluginKind::Git.is_enabled(&ci));
    assert!(PluginKind::Git.is_enabled(&local));
}

#[test]
fn test_base_plugins_always_lead() {
    for ci in [true, false] {
        for dry_run in [true, false] {
            for push in [true, false] {
                let config =
                    build_from_options(&options(ci, dry_run, true, push), &Config::default());
                assert_eq!(&config.plugin_names()[..3], &[ANALYZER, NOTES, CHANGELOG]);
            }
        }
    }
}

#[test]
fn test_commit_analyzer_release_rules() {
    let config = build_default(&RawInputs::default());
    assert_eq!(
        plugin(&config, ANALYZER).options,
        json!({
            "preset": "conventionalcommits",
            "releaseRules": [
                {"type": "refactor", "release": "patch"},
                {"type": "style", "release": "patch"}
            ]
        })
    );
}

#[test]
fn test_release_notes_sections() {
    let config = build_default(&RawInputs::default());
    let options = &plugin(&config, NOTES).options;

    assert_eq!(options["preset"], "conventionalCommits");
    let types = options["presetConfig"]["types"].as_array().unwrap();
    let visible: Vec<(&str, &str)> = types
        .iter()
        .filter(|t| t["hidden"] == false)
        .map(|t| (t["type"].as_str().unwrap(), t["section"].as_str().unwrap()))
        .collect();
    let hidden: Vec<&str> = types
        .iter()
        .filter(|t| t["hidden"] == true)
        .map(|t| t["type"].as_str().unwrap())
        .collect();

    assert_eq!(
        visible,
        vec![
            ("feat", "Features"),
            ("fix", "Bug Fixes"),
            ("perf", "Performance"),
            ("refactor", "Code Refactoring"),
            ("revert", "Changes Reverted"),
        ]
    );
    assert_eq!(hidden, vec!["docs", "test", "style", "chore"]);
}

#[test]
fn test_changelog_file_used_for_changelog_and_git_assets() {
    let raw = InputsBuilder::new().changelog_file("docs/CHANGES.md").build();
    let config = build_default(&raw);

    assert_eq!(
        plugin(&config, CHANGELOG).options,
        json!({"changelogFile": "docs/CHANGES.md"})
    );
    assert_eq!(
        plugin(&config, GIT).options,
        json!({
            "assets": ["package.json", "docs/CHANGES.md"],
            "message": "chore(release): publish [no ci]"
        })
    );
}

#[test]
fn test_github_comments_disabled() {
    let config = build_default(&InputsBuilder::new().ci("1").build());
    assert_eq!(
        plugin(&config, GITHUB).options,
        json!({"successComment": false, "failComment": false})
    );
}

#[test]
fn test_settings_flow_into_config() {
    let settings = Config {
        release_branch: "main".to_string(),
        tag_format: "release-${version}".to_string(),
        manifest_file: "packages/app/package.json".to_string(),
        ..Config::default()
    };
    let config = build(&RawInputs::default(), &settings);

    assert_eq!(config.tag_format, "release-${version}");
    assert!(config.releases_from("main"));
    assert!(!config.releases_from("master"));
    assert_eq!(
        plugin(&config, GIT).options["assets"],
        json!(["packages/app/package.json", "CHANGELOG.md"])
    );
}

#[test]
fn test_releases_from() {
    let config = build_default(&RawInputs::default());
    assert!(config.releases_from("master"));
    assert!(!config.releases_from("feature/login"));

    let config = build_default(&InputsBuilder::new().args(&["--dry-run"]).build());
    assert!(config.releases_from("feature/login"));
}

#[test]
fn test_serialized_shape() {
    let config = build_default(&InputsBuilder::new().ci("true").build());
    let value = serde_json::to_value(&config).unwrap();

    assert_eq!(value["tagFormat"], "v${version}");
    assert_eq!(value["ci"], true);
    assert_eq!(value["dryRun"], false);
    assert_eq!(
        value["branches"],
        json!([{"name": "master", "prerelease": false, "channel": false}])
    );

    let plugins = value["plugins"].as_array().unwrap();
    assert_eq!(plugins.len(), 6);
    assert_eq!(plugins[3], json!([NPM, {"npmPublish": true}]));
    for entry in plugins {
        let pair = entry.as_array().unwrap();
        assert_eq!(pair.len(), 2);
        assert!(pair[0].is_string());
        assert!(pair[1].is_object());
    }
}

#[test]
fn test_dry_run_serializes_wildcard_branch() {
    let config = build_default(&InputsBuilder::new().args(&["--dry-run"]).build());
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["branches"], json!(["**"]));
}
