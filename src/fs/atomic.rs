//! Atomic file writes.
//!
//! Content goes to `.{filename}.tmp` next to the target, is synced to disk,
//! and is then renamed over the target. Rename is atomic on POSIX when both
//! paths share a filesystem; on Windows `std::fs::rename` replaces an
//! existing file via `MoveFileExW`.

use crate::error::{Result, SrConfigError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to `path`, creating parent directories.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            SrConfigError::UserError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SrConfigError::UserError(format!("failed to replace '{}': {}", path.display(), e))
    })?;

    log::debug!("wrote {}", path.display());
    Ok(())
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            SrConfigError::UserError(format!("invalid output path '{}'", target.display()))
        })?;

    let parent = target.parent().unwrap_or(Path::new(""));
    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        SrConfigError::UserError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let result = file.write_all(content).and_then(|()| file.sync_all());
    if let Err(e) = result {
        let _ = fs::remove_file(path);
        return Err(SrConfigError::UserError(format!(
            "failed to write temporary file '{}': {}",
            path.display(),
            e
        )));
    }

    Ok(())
}
