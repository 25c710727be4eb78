use std::io;

use super::ProcessSource;
use super::snapshot::{Snapshot, TaskSample};

/// Result of one scan: the snapshot plus how many processes were enumerated
/// before unreadable counters were dropped.
#[derive(Debug)]
pub struct Collected {
    pub snapshot: Snapshot,
    pub enumerated: usize,
}

/// Reads the I/O-wait counter of every live process into a new snapshot.
///
/// Processes whose counter cannot be read (exited mid-scan, permission
/// denied, field missing or malformed) are left out. Only a failure to
/// enumerate processes at all is an error.
pub fn build_snapshot<S>(source: &S) -> io::Result<Collected>
where
    S: ProcessSource + ?Sized,
{
    let _span = tracing::debug_span!("collector.build_snapshot").entered();

    let pids = source.pids()?;
    let mut samples = Vec::with_capacity(pids.len());
    for &pid in &pids {
        match source.iowait_count(pid) {
            Some(count) => samples.push(TaskSample::new(pid, count)),
            None => tracing::trace!(pid, "no iowait counter, skipping"),
        }
    }

    let snapshot = Snapshot::from_samples(samples);
    tracing::debug!(
        enumerated = pids.len(),
        sampled = snapshot.len(),
        "snapshot built"
    );
    Ok(Collected {
        snapshot,
        enumerated: pids.len(),
    })
}
