//! Implementation of the `sr-config check-branch` command.
//!
//! Lets a CI job skip the release step early when the current branch would
//! be rejected by the release engine anyway.

use crate::config::Config;
use crate::error::{Result, SrConfigError};
use crate::inputs::RawInputs;
use crate::release;

/// Succeed if any branch rule matches `branch`.
pub fn cmd_check_branch(raw: &RawInputs, config: &Config, branch: &str) -> Result<()> {
    let release_config = release::build(raw, config);

    if !release_config.releases_from(branch) {
        return Err(SrConfigError::BranchNotReleased(branch.to_string()));
    }

    println!("Branch '{}' is configured for releases.", branch);
    Ok(())
}
