use std::{
    fs::{self, DirBuilder, OpenOptions},
    io::Write,
    os::unix::fs::{DirBuilderExt, OpenOptionsExt},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    error::Error,
    probe::{ProcessProbe, SignalProbe},
};

/// A file holding the pid of a running process, so that other processes
/// can detect a live instance or clean up after a dead one.
///
/// This is an advisory marker, not a lock: the existence check and the
/// write are not serialized against concurrent creators. Callers that
/// need real mutual exclusion must layer an OS-level file lock on top.
#[derive(Debug)]
pub struct PidFile {
    path: PathBuf,
    pid: u32,
}

/// Scan an existing file at `path` for the pid of a live process.
///
/// Unreadable, empty, or non-numeric content counts as no conflict; a
/// parseable pid is only a conflict while that process is alive.
fn check_conflict(path: &Path, probe: &dyn ProcessProbe) -> Result<(), Error> {
    // A failed read means no usable PID file; fall through and claim it.
    if let Ok(contents) = fs::read_to_string(path) {
        if let Ok(pid) = contents.trim().parse::<u32>() {
            if probe.exists(pid) {
                debug!(path = %path.display(), pid, "pid file held by live process");
                return Err(Error::Conflict {
                    path: path.to_path_buf(),
                });
            }
            debug!(path = %path.display(), pid, "stale pid file, claiming");
        } else {
            debug!(path = %path.display(), "unparseable pid file, claiming");
        }
    }
    Ok(())
}

impl PidFile {
    /// Create a PID file at `path` recording the current process's pid.
    ///
    /// If the file already exists and names a live process, construction
    /// fails without touching the file. A stale or garbage file is
    /// overwritten. Missing parent directories are created.
    ///
    /// # Errors
    /// Returns [`Error::Conflict`] when the file names a live process,
    /// or [`Error::Io`] when the write fails.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self, Error> {
        Self::create_with(path, &SignalProbe)
    }

    /// Same as [`PidFile::create`] with a caller-supplied process probe.
    ///
    /// # Errors
    /// Returns [`Error::Conflict`] when the file names a live process
    /// according to `probe`, or [`Error::Io`] when the write fails.
    pub fn create_with(path: impl Into<PathBuf>, probe: &dyn ProcessProbe) -> Result<Self, Error> {
        let path = path.into();
        check_conflict(&path, probe)?;

        // Best-effort; if this fails the write below reports the real error.
        if let Some(parent) = path.parent() {
            let _ = DirBuilder::new().recursive(true).mode(0o755).create(parent);
        }

        let pid = std::process::id();
        write_pid(&path, pid).map_err(|source| Error::Io {
            op: "write",
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), pid, "wrote pid file");
        Ok(Self { path, pid })
    }

    /// The pid recorded at construction time.
    #[must_use]
    pub const fn pid(&self) -> u32 {
        self.pid
    }

    /// The path the PID file was written to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the PID file from disk.
    ///
    /// The in-memory value is unchanged; callers must not treat it as a
    /// live file afterward.
    ///
    /// # Errors
    /// Returns [`Error::Io`] when the file is already absent or cannot
    /// be deleted.
    pub fn remove(&self) -> Result<(), Error> {
        fs::remove_file(&self.path).map_err(|source| Error::Io {
            op: "remove",
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "removed pid file");
        Ok(())
    }
}

/// Write the decimal pid to `path`, creating or truncating it with
/// mode `0644`. No trailing newline.
fn write_pid(path: &Path, pid: u32) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(path)?;
    file.write_all(pid.to_string().as_bytes())
}
