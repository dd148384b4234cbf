use std::path::Path;

use byte_unit::{Byte, Unit};

/// Convert a byte count into binary megabytes (bytes / 1,048,576).
pub fn megabytes(size: u64) -> f64 {
    Byte::from_u64(size).get_adjusted_unit(Unit::MiB).get_value()
}

/// Render a megabyte value the way every report line shows it.
pub fn format_megabytes(value: f64) -> String {
    format!("{value:.2} MB")
}

/// Notice printed for a folder the walk could not open.
pub fn skip_notice(path: &Path) -> String {
    format!("Skipping folder: {} (Access is denied)", path.display())
}
