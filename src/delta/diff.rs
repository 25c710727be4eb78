use super::Delta;
use crate::system::snapshot::Snapshot;

/// Matches `current` against `previous` by pid and returns the counter
/// increase of every process present in both.
///
/// Processes that only exist in one of the two snapshots (started or exited
/// during the interval) produce nothing. A counter that went backwards means
/// the pid was reused or the counter was reset, so that process produces
/// nothing for this interval either.
pub fn diff(previous: &Snapshot, current: &Snapshot) -> Vec<Delta> {
    if previous.is_empty() {
        return Vec::new();
    }

    current
        .iter()
        .filter_map(|sample| {
            let old = previous.get(sample.pid)?;
            match sample.iowait_count.checked_sub(old.iowait_count) {
                Some(delta) => Some(Delta::new(sample.pid, delta)),
                None => {
                    tracing::debug!(
                        pid = sample.pid,
                        previous = old.iowait_count,
                        current = sample.iowait_count,
                        "iowait counter went backwards, ignoring"
                    );
                    None
                }
            }
        })
        .collect()
}
