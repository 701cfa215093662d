// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Contract for completed-patch values.
//!
//! The search engine produces completed patches; this crate aggregates
//! them. What a patch contains is the engine's business - here a patch is
//! an opaque value with identity, and the only demands placed on it are
//! the ones aggregation and persistence force:
//!
//! - **Value identity** (`Eq`): two patches are the same patch exactly
//!   when they are equal as values.
//! - **Cloning** (`Clone`): a result set can be duplicated without
//!   disturbing the original.
//! - **Representability** (`Serialize` + `DeserializeOwned`): a completed
//!   run can be saved and reloaded with identical content. The byte
//!   layout belongs to the patch type, not to this crate.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// An opaque unit of completed tiling output.
///
/// Blanket-implemented: any value type meeting the bounds participates in
/// result aggregation with no further opt-in.
pub trait Patch: Clone + Eq + Serialize + DeserializeOwned {}

impl<T> Patch for T where T: Clone + Eq + Serialize + DeserializeOwned {}
