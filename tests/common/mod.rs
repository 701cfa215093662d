// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use serde::{Deserialize, Serialize};

/// A concrete completed-patch value standing in for the search engine's
/// output type.
///
/// The core treats patches as opaque, so the only structure this type
/// carries is enough to give each patch a distinct identity and a textual
/// boundary description (edge direction labels, as the engine writes them).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BasicPatch {
    pub id: u32,
    pub boundary: String,
}

impl BasicPatch {
    pub fn new(id: u32, boundary: &str) -> Self {
        Self {
            id,
            boundary: boundary.to_string(),
        }
    }
}
