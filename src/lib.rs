// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Core types for a triangular tile-patch search.
//!
//! This crate holds the two leaf components shared by every part of the
//! patch search: orientations of geometric elements, and the frozen
//! collection of completed patches produced by a finished run.
//!
//! # Architecture
//!
//! The search itself lives elsewhere; what it needs from this crate is:
//!
//! - **[`Orientation`]**: the capability every directional labelling of an
//!   edge, face boundary, or tile rotation must provide. Each geometric
//!   context supplies its own closed set of variants; the only shared
//!   behavior is `opposite()`, which must be an involution.
//! - **[`Patch`]**: the contract an opaque completed-patch value must
//!   satisfy to be aggregated and persisted. The core makes no structural
//!   assumption about patches beyond value identity.
//! - **[`ResultSet`]**: the ordered, immutable aggregation of all patches
//!   from one completed run.
//!
//! # Ownership Model
//!
//! The search produces patches into a [`PatchCollector`], the only mutable
//! surface in this crate. When the run terminates, `finish()` consumes the
//! collector and transfers its sequence into a [`ResultSet`] in a single
//! hand-off. After that point nothing can append, remove, or replace a
//! patch: the result is a pure value, safe to share across threads and to
//! serialize for later reloading.

pub mod geometry;
pub mod patch;
pub mod results;

// Re-export commonly used types
pub use geometry::Orientation;
pub use patch::Patch;
pub use results::{PatchCollector, ResultSet};
