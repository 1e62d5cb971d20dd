//! Implementation of the `sr-config generate` command.

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::{Result, SrConfigError};
use crate::fs::atomic_write_file;
use crate::inputs::RawInputs;
use crate::release::{self, ReleaseConfig};
use std::path::Path;

/// Build the release configuration and print it or write it to `output`.
pub fn cmd_generate(
    raw: &RawInputs,
    config: &Config,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let release_config = release::build(raw, config);
    let rendered = render(&release_config, format)?;

    match output {
        Some(path) => {
            atomic_write_file(path, &rendered)?;
            log::info!("release configuration written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Serialize the configuration; the result always ends with a newline.
pub(crate) fn render(release_config: &ReleaseConfig, format: OutputFormat) -> Result<String> {
    let mut rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(release_config).map_err(|e| {
            SrConfigError::UserError(format!("failed to serialize configuration: {}", e))
        })?,
        OutputFormat::Yaml => serde_yaml::to_string(release_config).map_err(|e| {
            SrConfigError::UserError(format!("failed to serialize configuration: {}", e))
        })?,
    };

    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}
