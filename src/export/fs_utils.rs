use crate::errors::{AppError, AppResult};
use crate::utils::path::is_absolute;
use std::io;
use std::path::Path;

/// Check whether a file can be created or overwritten.
///
/// An existing file is only overwritten when `force` is set; there is no
/// interactive prompt since exports may run from scripts.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    Err(AppError::Export(format!(
        "the file '{}' already exists (use --force to overwrite)",
        path.display()
    )))
}

/// Exports require an absolute destination path.
pub(crate) fn ensure_absolute(path: &Path) -> AppResult<()> {
    if is_absolute(&path.to_string_lossy()) {
        return Ok(());
    }
    Err(AppError::from(io::Error::other(format!(
        "Output file path must be absolute: {}",
        path.display()
    ))))
}
