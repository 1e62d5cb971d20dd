//! Config loading, validation, and discovery.

use super::model::Config;
use super::types::VERSION_PLACEHOLDER;
use crate::error::{Result, SrConfigError};
use std::path::Path;

/// Settings file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".sr-config.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(SrConfigError::ConfigError)` - Read, parse, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SrConfigError::ConfigError(format!(
                "failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the settings for this invocation.
    ///
    /// An explicit path must exist. Without one, `.sr-config.yaml` in the
    /// working directory is used when present and defaults otherwise.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            log::debug!("loading settings from {}", path.display());
            return Self::load(path);
        }

        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            log::debug!("loading settings from {}", path.display());
            Self::load(path)
        } else {
            log::debug!("no {} found, using default settings", DEFAULT_CONFIG_FILE);
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                SrConfigError::ConfigError(format!("failed to parse settings YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| SrConfigError::UserError(format!("failed to serialize settings: {}", e)))
    }

    /// Validate config values.
    ///
    /// - `tag_format` must contain `${version}` exactly once
    /// - branch, file, and message fields must be non-empty
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("release_branch", &self.release_branch),
            ("changelog_file", &self.changelog_file),
            ("manifest_file", &self.manifest_file),
            ("release_commit_message", &self.release_commit_message),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(SrConfigError::ConfigError(format!(
                    "{} must not be empty",
                    field
                )));
            }
        }

        let placeholders = self.tag_format.matches(VERSION_PLACEHOLDER).count();
        if placeholders != 1 {
            return Err(SrConfigError::ConfigError(format!(
                "tag_format must contain {} exactly once (found '{}')",
                VERSION_PLACEHOLDER, self.tag_format
            )));
        }

        Ok(())
    }
}
