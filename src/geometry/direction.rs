// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Traversal direction along a triangle edge.
//!
//! Every edge of a tile is shared between two patches (or between a patch
//! and the unfilled plane), and the matching rule reads the edge in one of
//! two directions. A directed edge and its opposite describe the same
//! segment traversed the other way.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::geometry::errors::OrientationParseError;
use crate::geometry::orientation::Orientation;

/// Direction of travel along a triangle edge.
///
/// `Forward` follows the edge in its defining order (tail to head);
/// `Reverse` follows it head to tail. Neither direction is self-opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum EdgeDirection {
    /// Tail-to-head traversal, the edge's defining order.
    Forward,
    /// Head-to-tail traversal.
    Reverse,
}

impl EdgeDirection {
    /// Single-character label used in textual patch descriptions.
    pub fn label(self) -> char {
        match self {
            EdgeDirection::Forward => 'f',
            EdgeDirection::Reverse => 'r',
        }
    }

    /// Parse a direction from its label character.
    pub fn try_from_label(label: char) -> Result<Self, OrientationParseError> {
        match label {
            'f' => Ok(EdgeDirection::Forward),
            'r' => Ok(EdgeDirection::Reverse),
            other => Err(OrientationParseError::UnknownDirection(other)),
        }
    }

    /// Check whether this is the forward direction.
    pub fn is_forward(self) -> bool {
        self == EdgeDirection::Forward
    }
}

impl Orientation for EdgeDirection {
    fn opposite(self) -> Self {
        match self {
            EdgeDirection::Forward => EdgeDirection::Reverse,
            EdgeDirection::Reverse => EdgeDirection::Forward,
        }
    }
}

impl fmt::Display for EdgeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<char> for EdgeDirection {
    type Error = OrientationParseError;

    fn try_from(label: char) -> Result<Self, Self::Error> {
        Self::try_from_label(label)
    }
}
