// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Frozen aggregation of the patches found by one completed run.
//!
//! A [`ResultSet`] is constructed exactly once, from the finished patch
//! sequence, and is read-only from then on: order and membership are fixed
//! at construction, and no method can add, remove, or replace a patch.
//! Because nothing mutates after construction, a result set may be shared
//! across threads freely and serialized for later reloading.
//!
//! The producer side of the hand-off lives in [`collector`]: the search
//! appends into a [`PatchCollector`] while running, then `finish()`
//! transfers ownership of the sequence here in a single move.

pub mod collector;

pub use collector::PatchCollector;

use serde::{Deserialize, Serialize};

use crate::patch::Patch;

/// The ordered, immutable collection of all patches from one search run.
///
/// Construction takes the patch sequence by value, so the producer cannot
/// retain an alias through which to mutate it afterwards; the move is the
/// crate's only synchronization boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet<P> {
    patches: Vec<P>,
}

impl<P: Patch> ResultSet<P> {
    /// Create a result set from a finished sequence of patches.
    ///
    /// The sequence must be complete: the producer has stopped appending.
    /// An empty run is valid and yields an empty (but well-formed) result
    /// set.
    pub fn new(patches: Vec<P>) -> Self {
        Self { patches }
    }

    /// The patches found, in production order.
    ///
    /// Repeated calls observe identical content; the returned slice
    /// permits no mutation.
    pub fn patches(&self) -> &[P] {
        &self.patches
    }

    /// Number of patches found.
    pub fn len(&self) -> usize {
        self.patches.len()
    }

    /// Check whether the run produced no patches.
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    /// Get the patch at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&P> {
        self.patches.get(index)
    }

    /// Iterate over the patches in production order.
    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.patches.iter()
    }
}

impl<P: Patch> FromIterator<P> for ResultSet<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, P: Patch> IntoIterator for &'a ResultSet<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.patches.iter()
    }
}

impl<P: Patch> IntoIterator for ResultSet<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.patches.into_iter()
    }
}
