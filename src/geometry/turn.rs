// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rotational orientation of a tile in 120-degree steps.
//!
//! A triangle has NTURNS = 3 rotational placements. The opposite of a
//! rotation is its inverse: composing a rotation with its opposite yields
//! the identity. This makes `Turn::None` the one self-opposite orientation
//! in the crate - the identity rotation is its own inverse, which the
//! rotation domain explicitly permits.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::geometry::constants::NTURNS;
use crate::geometry::errors::OrientationParseError;
use crate::geometry::orientation::Orientation;

/// Rotation of a tile, counted in counterclockwise 120-degree steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Turn {
    /// Identity rotation (0 degrees). Self-opposite.
    None,
    /// One counterclockwise step (120 degrees).
    Left,
    /// Two counterclockwise steps (240 degrees, i.e. 120 clockwise).
    Right,
}

impl Turn {
    /// Create a turn from a step count, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `steps >= NTURNS`.
    pub fn new(steps: u8) -> Self {
        assert!(
            (steps as usize) < NTURNS,
            "Turn steps out of range: {}",
            steps
        );
        match steps {
            0 => Turn::None,
            1 => Turn::Left,
            _ => Turn::Right,
        }
    }

    /// Try to create a turn from a step count, returning None if out of range.
    pub fn try_new(steps: u8) -> Option<Self> {
        match steps {
            0 => Some(Turn::None),
            1 => Some(Turn::Left),
            2 => Some(Turn::Right),
            _ => None,
        }
    }

    /// Get the counterclockwise step count (0..NTURNS).
    pub fn steps(self) -> u8 {
        match self {
            Turn::None => 0,
            Turn::Left => 1,
            Turn::Right => 2,
        }
    }

    /// Get the rotation angle in degrees (0, 120, or 240).
    pub fn degrees(self) -> usize {
        self.steps() as usize * (360 / NTURNS)
    }

    /// Compose two rotations (apply `self`, then `other`).
    pub fn then(self, other: Turn) -> Turn {
        Self::new((self.steps() + other.steps()) % NTURNS as u8)
    }
}

impl Orientation for Turn {
    /// The inverse rotation: `steps -> (NTURNS - steps) % NTURNS`.
    fn opposite(self) -> Self {
        match self {
            Turn::None => Turn::None,
            Turn::Left => Turn::Right,
            Turn::Right => Turn::Left,
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.steps())
    }
}

impl TryFrom<u8> for Turn {
    type Error = OrientationParseError;

    fn try_from(steps: u8) -> Result<Self, Self::Error> {
        Self::try_new(steps).ok_or(OrientationParseError::TurnOutOfRange(steps))
    }
}
