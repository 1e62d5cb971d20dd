//! Error types for the sr-config CLI.
//!
//! Building the release configuration itself never fails; only the outer
//! surface (settings file, output writing) produces these errors.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for sr-config operations.
#[derive(Error, Debug)]
pub enum SrConfigError {
    /// User provided invalid arguments or a write failed.
    #[error("{0}")]
    UserError(String),

    /// The settings file could not be read, parsed, or validated.
    #[error("Invalid settings: {0}")]
    ConfigError(String),

    /// The branch does not match any release branch rule.
    #[error("Branch '{0}' is not configured for releases")]
    BranchNotReleased(String),
}

impl SrConfigError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SrConfigError::UserError(_) => exit_codes::USER_ERROR,
            SrConfigError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            SrConfigError::BranchNotReleased(_) => exit_codes::BRANCH_NOT_RELEASED,
        }
    }
}

/// Result type alias for sr-config operations.
pub type Result<T> = std::result::Result<T, SrConfigError>;
