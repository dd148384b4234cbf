use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Application-wide error type for the apksweep CLI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{} does not exist", .0.display())]
    PathNotFound(PathBuf),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("{0}")]
    Traversal(#[from] walkdir::Error),

    #[error("failed to remove {}: {source}", .path.display())]
    Deletion {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    /// Prefix printed in front of the message when the process reports this error.
    pub fn prefix(&self) -> &'static str {
        match self {
            AppError::Deletion { .. } => "Error cleaning up files:",
            _ => "Error:",
        }
    }
}
