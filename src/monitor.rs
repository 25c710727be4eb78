use std::io;

use crate::delta::{self, DEFAULT_TOP_COUNT, Delta};
use crate::display::Frame;
use crate::system::ProcessSource;
use crate::system::collector::{Collected, build_snapshot};
use crate::system::snapshot::Snapshot;

/// Whether a baseline snapshot exists to diff against.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Bootstrap,
    Steady(Snapshot),
}

/// State carried from one tick to the next: the process source and the
/// previous snapshot.
pub struct Monitor<S> {
    source: S,
    top_count: usize,
    phase: Phase,
    warned_no_counters: bool,
}

impl<S: ProcessSource> Monitor<S> {
    pub fn new(source: S) -> Self {
        Self::with_top_count(source, DEFAULT_TOP_COUNT)
    }

    pub fn with_top_count(source: S, top_count: usize) -> Self {
        Monitor {
            source,
            top_count,
            phase: Phase::Bootstrap,
            warned_no_counters: false,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Takes a new snapshot, diffs it against the previous one and returns the
    /// top deltas. The first tick only records a baseline and returns nothing.
    pub fn tick(&mut self) -> io::Result<Vec<Delta>> {
        let _span = tracing::debug_span!("monitor.tick").entered();

        let Collected {
            snapshot: current,
            enumerated,
        } = build_snapshot(&self.source)?;
        if enumerated > 0 && current.is_empty() && !self.warned_no_counters {
            tracing::warn!("no process exposes an iowait counter; is the kernel built with schedstats?");
            self.warned_no_counters = true;
        }

        let deltas = match &self.phase {
            Phase::Bootstrap => Vec::new(),
            Phase::Steady(previous) => delta::diff(previous, &current),
        };
        tracing::debug!(deltas = deltas.len(), "diffed against previous snapshot");

        self.phase = Phase::Steady(current);
        Ok(delta::rank(deltas, self.top_count))
    }

    /// Runs one tick and resolves names for the rows to display.
    pub fn next_frame(&mut self) -> io::Result<Frame> {
        let ranked = self.tick()?;
        Ok(Frame::resolve(&ranked, &self.source))
    }
}
