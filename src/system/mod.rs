pub mod collector;
pub mod procfs;
pub mod snapshot;

use std::io;

/// Host view of running processes used by the snapshot builder and the
/// display.
pub trait ProcessSource {
    /// Identifiers of the processes alive right now. Fails only when the
    /// enumeration root itself cannot be read.
    fn pids(&self) -> io::Result<Vec<u32>>;

    /// Cumulative I/O-wait counter of `pid`, or `None` when the process is
    /// gone or the counter is missing, unreadable or malformed.
    fn iowait_count(&self, pid: u32) -> Option<u64>;

    /// Best-effort display name of `pid`.
    fn name_of(&self, pid: u32) -> Option<String>;
}
