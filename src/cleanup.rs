use std::fs;
use std::path::PathBuf;

use crate::error::AppError;

/// Remove `paths` in order, stopping at the first failure.
///
/// Files removed before the failure stay removed; the failing path and
/// everything after it are left untouched.
pub fn delete_files(paths: &[PathBuf]) -> Result<(), AppError> {
    for path in paths {
        fs::remove_file(path)
            .map_err(|source| AppError::Deletion { path: path.clone(), source })?;
    }
    Ok(())
}
