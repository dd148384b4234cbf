use std::fs;
use std::io::{self, Write};
use std::path::Path;

use walkdir::WalkDir;

use crate::error::AppError;
use crate::format::{format_megabytes, skip_notice};
use crate::model::{Package, ScanItem, ScanReport};

/// Walk `root` depth-first and collect every `.apk`/`.aab` file.
///
/// Each match is written to `out` as soon as it is found. Subdirectories that
/// cannot be opened for lack of permission are reported and skipped; any other
/// walk error aborts the scan.
pub fn scan<W: Write>(root: &Path, out: &mut W) -> Result<ScanReport, AppError> {
    ensure_directory(root)?;

    let mut report = ScanReport::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.io_error().is_some_and(is_permission_denied) => {
                writeln!(out, "{}", skip_notice(err.path().unwrap_or(root)))?;
                continue;
            }
            Err(err) => return Err(AppError::Traversal(err)),
        };

        if entry.file_type().is_dir() {
            continue;
        }

        if Package::from_path(entry.path()).is_none() {
            continue;
        }

        let size = entry.metadata()?.len();
        let item = ScanItem::new(entry.into_path(), size);
        writeln!(out, "{} - {}", item.path.display(), format_megabytes(item.megabytes()))?;
        report.push(item);
    }

    Ok(report)
}

fn ensure_directory(root: &Path) -> Result<(), AppError> {
    let metadata = match fs::metadata(root) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(AppError::PathNotFound(root.to_path_buf()));
        }
        Err(err) => return Err(AppError::Io(err)),
    };

    if metadata.is_dir() { Ok(()) } else { Err(AppError::NotADirectory(root.to_path_buf())) }
}

/// Whether a walk error only means the folder is off limits and can be skipped.
pub fn is_permission_denied(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::PermissionDenied
}
