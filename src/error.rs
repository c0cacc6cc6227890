use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures surfaced by PID file operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The target file holds the pid of a process that is still alive.
    ///
    /// Not retryable: the caller must stop the other instance or delete
    /// the file before trying again.
    #[error(
        "pid file found at {}, ensure no other instance is running or delete {}",
        .path.display(),
        .path.display()
    )]
    Conflict {
        /// Path of the conflicting PID file.
        path: PathBuf,
    },

    /// A filesystem operation on the PID file failed.
    #[error("failed to {op} pid file {}", .path.display())]
    Io {
        /// Operation that failed ("write" or "remove").
        op: &'static str,
        /// Path of the PID file involved.
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
