//! Download errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failure of one download. Never retried.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Destination file is already present; nothing was started.
    #[error("Destination already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Download tool not found: {0}")]
    ToolNotFound(String),

    #[error("{tool} exited with {status}: {stderr}")]
    Failed {
        tool: String,
        status: String,
        stderr: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
