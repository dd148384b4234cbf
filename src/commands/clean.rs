use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::cleanup::delete_files;
use crate::error::AppError;
use crate::format::format_megabytes;
use crate::scanner::scan;

pub struct CleanOptions {
    pub root: Option<PathBuf>,
    pub assume_yes: bool,
    pub pause: bool,
}

/// Prompt for a directory, report its APK/AAB files and offer to delete them.
pub fn execute_clean<R, W>(
    options: CleanOptions,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    let root = match options.root {
        Some(root) => root,
        None => path_from_bytes(prompt(input, out, "Enter directory path: ")?),
    };

    let report = scan(&root, out)?;

    if report.is_empty() {
        writeln!(out, "\nNo APK or AAB files found.")?;
    } else {
        writeln!(
            out,
            "\nTotal size of APK and AAB files: {}",
            format_megabytes(report.total_megabytes())
        )?;

        if options.assume_yes || confirm_deletion(input, out)? {
            delete_files(&report.paths())?;
            writeln!(out, "Files cleaned up successfully.")?;
        } else {
            writeln!(out, "Files were not cleaned up.")?;
        }
    }

    if options.pause {
        prompt(input, out, "\nPress any key to exit...")?;
    }

    Ok(())
}

fn confirm_deletion<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<bool, AppError> {
    let answer = prompt(input, out, "Do you want to clean up these files? (y/n): ")?;
    Ok(matches!(answer.as_slice(), b"y" | b"Y"))
}

/// Print `message` and read one raw line without its terminator. EOF yields
/// an empty line.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> Result<Vec<u8>, AppError> {
    write!(out, "{message}")?;
    out.flush()?;
    let mut line = Vec::new();
    input.read_until(b'\n', &mut line)?;
    let len = strip_line_ending(&line).len();
    line.truncate(len);
    Ok(line)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(unix)]
fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    PathBuf::from(OsString::from_vec(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(&bytes).into_owned())
}
