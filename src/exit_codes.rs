//! Exit code constants for the sr-config CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unwritable output, refused overwrite)
//! - 2: Settings file could not be read, parsed, or validated
//! - 3: Branch is not released from under the current configuration

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or a failed write.
pub const USER_ERROR: i32 = 1;

/// Settings file error: unreadable, malformed YAML, or invalid values.
pub const CONFIG_ERROR: i32 = 2;

/// `check-branch` found no branch rule matching the given branch.
pub const BRANCH_NOT_RELEASED: i32 = 3;
