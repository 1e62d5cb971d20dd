//! Implementation of the `sr-config options` command.

use crate::config::Config;
use crate::error::{Result, SrConfigError};
use crate::inputs::{NormalizedOptions, RawInputs};

/// Print the derived options as JSON.
pub fn cmd_options(raw: &RawInputs, config: &Config) -> Result<()> {
    let options = NormalizedOptions::derive(raw, config);
    let rendered = serde_json::to_string_pretty(&options)
        .map_err(|e| SrConfigError::UserError(format!("failed to serialize options: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}
