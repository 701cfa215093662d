// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for triangular tile geometry.
//!
//! Everything in the patch search is built from triangles, so the side
//! count is fixed rather than feature-configurable. The derived constants
//! keep the orientation families honest: rotational symmetry has exactly
//! NSIDES elements, and boundary traversal has exactly two senses.

/// Number of sides of a tile (triangles only).
pub const NSIDES: usize = 3;

/// Number of distinct rotational orientations of a tile.
///
/// Rotating a triangle by 120 degrees NSIDES times returns it to its
/// starting orientation, so the rotation group has NSIDES elements.
pub const NTURNS: usize = NSIDES;

/// Angle of one rotation step, in degrees.
pub const TURN_DEGREES: usize = 360 / NSIDES;

/// Number of traversal senses around a patch boundary (clockwise and
/// counterclockwise).
pub const NWINDINGS: usize = 2;

/// Compile-time assertion that the rotation step divides a full turn.
///
/// The Turn involution (`steps -> (NTURNS - steps) % NTURNS`) relies on
/// rotation steps partitioning 360 degrees exactly.
const _: () = assert!(360 % NSIDES == 0, "rotation step must divide 360");
