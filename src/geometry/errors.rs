// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for orientation label and step conversions.

use thiserror::Error;

use crate::geometry::constants::NTURNS;

/// Errors that can occur when constructing an orientation from external
/// input (a character label or a raw step count).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrientationParseError {
    /// Character is not a valid edge direction label ('f' or 'r').
    #[error("unknown edge direction label: {0:?}")]
    UnknownDirection(char),

    /// Character is not a valid winding label ('c' or 'a').
    #[error("unknown winding label: {0:?}")]
    UnknownWinding(char),

    /// Step count does not name a rotation (must be 0..NTURNS).
    #[error("turn steps out of range: {0} (expected 0..{NTURNS})")]
    TurnOutOfRange(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            OrientationParseError::UnknownDirection('x').to_string(),
            "unknown edge direction label: 'x'"
        );
        assert_eq!(
            OrientationParseError::UnknownWinding('z').to_string(),
            "unknown winding label: 'z'"
        );
        assert_eq!(
            OrientationParseError::TurnOutOfRange(7).to_string(),
            "turn steps out of range: 7 (expected 0..3)"
        );
    }
}
