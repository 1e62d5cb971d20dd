//! Settings model for sr-config.
//!
//! This module defines the Config struct that represents `.sr-config.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults that reproduce the stock pipeline, and validation of values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use operations::DEFAULT_CONFIG_FILE;
pub use types::PushSource;
