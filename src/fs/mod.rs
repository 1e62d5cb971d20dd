//! Filesystem utilities for sr-config.
//!
//! Generated configuration and settings templates are written atomically so
//! the release engine never reads a half-written file.

pub mod atomic;

pub use atomic::atomic_write_file;
