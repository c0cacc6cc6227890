//! PID file management: record the running process's pid in a
//! well-known file so other processes can find it, and clean the file
//! up afterward.
//!
//! Creation checks any existing file against the live process table:
//! a file naming a live process is a conflict, a stale or garbage file
//! is silently reclaimed. The guard is advisory only; see [`PidFile`]
//! for the caveats.
//!
//! ```no_run
//! use pidfile::PidFile;
//!
//! fn main() -> Result<(), pidfile::Error> {
//!     let pidfile = PidFile::create("/run/myapp/myapp.pid")?;
//!     // ... run ...
//!     pidfile.remove()?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod pidfile;
pub mod probe;

pub use error::Error;
pub use pidfile::PidFile;
pub use probe::{ProcessProbe, SignalProbe};
