/// One process's I/O-wait counter observed at one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskSample {
    pub pid: u32,
    pub iowait_count: u64,
}

impl TaskSample {
    pub fn new(pid: u32, iowait_count: u64) -> Self {
        TaskSample { pid, iowait_count }
    }
}

/// All samples captured at one tick, sorted ascending by pid with no
/// duplicate pids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    samples: Vec<TaskSample>,
}

impl Snapshot {
    /// Builds a snapshot from samples in any order. If a pid occurs more than
    /// once only its first occurrence is kept.
    pub fn from_samples(mut samples: Vec<TaskSample>) -> Self {
        // Stable so that "first occurrence" survives the dedup below.
        samples.sort_by_key(|s| s.pid);
        samples.dedup_by_key(|s| s.pid);
        Snapshot { samples }
    }

    pub fn get(&self, pid: u32) -> Option<&TaskSample> {
        self.samples
            .binary_search_by_key(&pid, |s| s.pid)
            .ok()
            .map(|idx| &self.samples[idx])
    }

    pub fn samples(&self) -> &[TaskSample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaskSample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
