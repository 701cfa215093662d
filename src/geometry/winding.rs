// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Traversal sense around a patch boundary.
//!
//! The boundary of a patch is walked in one of two senses. Substitution
//! reverses the sense of alternate child tiles, so the opposite relation
//! between the two windings is used constantly during matching.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::geometry::errors::OrientationParseError;
use crate::geometry::orientation::Orientation;

/// Sense of travel around a patch boundary.
///
/// Neither winding is self-opposite: a boundary walk always has a distinct
/// reverse walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Winding {
    /// Boundary walked with the patch interior on the right.
    Clockwise,
    /// Boundary walked with the patch interior on the left.
    Counterclockwise,
}

impl Winding {
    /// Single-character label: 'c' for clockwise, 'a' for anticlockwise.
    pub fn label(self) -> char {
        match self {
            Winding::Clockwise => 'c',
            Winding::Counterclockwise => 'a',
        }
    }

    /// Parse a winding from its label character.
    pub fn try_from_label(label: char) -> Result<Self, OrientationParseError> {
        match label {
            'c' => Ok(Winding::Clockwise),
            'a' => Ok(Winding::Counterclockwise),
            other => Err(OrientationParseError::UnknownWinding(other)),
        }
    }

    /// Check whether this is the clockwise sense.
    pub fn is_clockwise(self) -> bool {
        self == Winding::Clockwise
    }
}

impl Orientation for Winding {
    fn opposite(self) -> Self {
        match self {
            Winding::Clockwise => Winding::Counterclockwise,
            Winding::Counterclockwise => Winding::Clockwise,
        }
    }
}

impl fmt::Display for Winding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<char> for Winding {
    type Error = OrientationParseError;

    fn try_from(label: char) -> Result<Self, Self::Error> {
        Self::try_from_label(label)
    }
}
