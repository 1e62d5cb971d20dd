//! Implementation of the `sr-config init` command.
//!
//! Writes a settings template holding every default so projects can see
//! and adjust what the generated configuration is based on.

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{Result, SrConfigError};
use crate::fs::atomic_write_file;
use std::path::Path;

const TEMPLATE_HEADER: &str = "\
# sr-config settings
#
# Environment overrides:
#   SR_CONFIG_NPM_PUBLISH     publish to the registry (\"true\"/\"false\", default true)
#   SR_CONFIG_NPM_PUSH        push release commit (\"true\"/\"false\", default true)
#   SR_CONFIG_CHANGELOG_FILE  changelog path (default: changelog_file below)
#   CI                        enables GitHub releases unless unset or \"false\"
";

/// Write the settings template to `path` (default `.sr-config.yaml`).
pub fn cmd_init(path: Option<&Path>, force: bool) -> Result<()> {
    let path = path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));

    if path.exists() {
        if !force {
            return Err(SrConfigError::UserError(format!(
                "'{}' already exists. Use --force to overwrite it.",
                path.display()
            )));
        }
        log::info!("overwriting existing settings file {}", path.display());
    }

    atomic_write_file(path, &template()?)?;
    println!("Created {}", path.display());
    Ok(())
}

fn template() -> Result<String> {
    Ok(format!("{}\n{}", TEMPLATE_HEADER, Config::default().to_yaml()?))
}
