pub mod diff;
pub mod rank;

pub use diff::diff;
pub use rank::{DEFAULT_TOP_COUNT, rank};

/// Growth of one process's I/O-wait counter between two consecutive
/// snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delta {
    pub pid: u32,
    pub delta: u64,
}

impl Delta {
    pub fn new(pid: u32, delta: u64) -> Self {
        Delta { pid, delta }
    }
}
