// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Producer-side surface for accumulating patches during a run.
//!
//! The search engine owns a [`PatchCollector`] for the duration of a run
//! and records each completed patch as it is found. When the run
//! terminates, [`PatchCollector::finish`] consumes the collector and moves
//! the sequence into a [`ResultSet`]. Consuming `self` is what makes the
//! hand-off a single ownership transfer: once frozen, no handle remains
//! through which the producer could keep appending.

use log::debug;

use crate::patch::Patch;
use crate::results::ResultSet;

/// Accumulates completed patches during a search run.
#[derive(Debug, Clone)]
pub struct PatchCollector<P> {
    patches: Vec<P>,
}

impl<P: Patch> PatchCollector<P> {
    /// Create an empty collector for a new run.
    pub fn new() -> Self {
        Self {
            patches: Vec::new(),
        }
    }

    /// Record one completed patch. Order of recording is preserved in the
    /// final result set.
    pub fn record(&mut self, patch: P) {
        self.patches.push(patch);
    }

    /// Number of patches recorded so far.
    pub fn len(&self) -> usize {
        self.patches.len()
    }

    /// Check whether anything has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    /// Freeze the run: consume the collector and hand its sequence to a
    /// [`ResultSet`].
    pub fn finish(self) -> ResultSet<P> {
        debug!("search run complete: {} patches collected", self.patches.len());
        ResultSet::new(self.patches)
    }
}

impl<P: Patch> Default for PatchCollector<P> {
    fn default() -> Self {
        Self::new()
    }
}
