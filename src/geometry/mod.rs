// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for triangular tile patches.
//!
//! This module contains type-safe representations of orientation:
//! - Orientation: the capability shared by all directional labels
//! - EdgeDirection: traversal direction along a triangle edge
//! - Winding: traversal sense around a patch boundary
//! - Turn: tile rotation in 120-degree steps

pub mod constants;
pub mod direction;
pub mod errors;
pub mod orientation;
pub mod turn;
pub mod winding;

// Re-export for convenience
pub use constants::*;
pub use direction::EdgeDirection;
pub use errors::OrientationParseError;
pub use orientation::Orientation;
pub use turn::Turn;
pub use winding::Winding;
