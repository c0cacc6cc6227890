use nix::{sys::signal, unistd::Pid};

/// Answers whether a process with a given pid is currently alive.
///
/// Implementations are platform-specific; the PID file logic only needs
/// this single query, so tests can substitute a fake.
pub trait ProcessProbe {
    /// Whether a process with `pid` is alive and signalable.
    fn exists(&self, pid: u32) -> bool;
}

/// Probe backed by `kill(pid, 0)`: sends no signal but performs the
/// full existence and permission check.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalProbe;

impl ProcessProbe for SignalProbe {
    fn exists(&self, pid: u32) -> bool {
        // A pid beyond i32 cannot name a live process on this platform.
        let Ok(raw) = i32::try_from(pid) else {
            return false;
        };
        signal::kill(Pid::from_raw(raw), None).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_process_is_alive() {
        assert!(SignalProbe.exists(std::process::id()));
    }

    #[test]
    fn absurd_pid_is_not_alive() {
        // Far above any real pid_max.
        assert!(!SignalProbe.exists(u32::MAX));
    }
}
