// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The orientation capability shared by all directional labels.
//!
//! Every geometric element in the patch search carries some directional
//! labelling: edges are traversed forwards or backwards, patch boundaries
//! wind clockwise or counterclockwise, tiles sit in one of three rotations.
//! Each of these contexts supplies its own closed set of variants; the one
//! behavior they all share is producing their opposite.
//!
//! # Involution Law
//!
//! For every implementing type, `opposite` must be an involution:
//!
//! ```text
//! x.opposite().opposite() == x
//! ```
//!
//! This is a contract on the implementation, not a runtime check; it is
//! enforced by property tests over each variant family.

/// A directional labelling of a geometric element.
///
/// The `opposite` of an orientation is itself a value of the same family,
/// which is why the operation returns `Self`. A family is free to contain
/// self-opposite variants (fixed points of `opposite`), but only where the
/// geometric domain genuinely has them: the identity rotation is its own
/// inverse, while an edge traversal direction never is. A variant with no
/// meaningful opposite must not implement this trait at all.
///
/// # Example
///
/// ```
/// use tiling_search::geometry::Orientation;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Compass {
///     North,
///     South,
/// }
///
/// impl Orientation for Compass {
///     fn opposite(self) -> Self {
///         match self {
///             Compass::North => Compass::South,
///             Compass::South => Compass::North,
///         }
///     }
/// }
///
/// assert_eq!(Compass::North.opposite(), Compass::South);
/// assert_eq!(Compass::North.opposite().opposite(), Compass::North);
/// ```
pub trait Orientation: Copy + Eq {
    /// Produce the reverse orientation.
    ///
    /// Pure function of the value: no side effects, no failure modes.
    /// Applying it twice must return the original value.
    fn opposite(self) -> Self;

    /// Check whether this variant is a fixed point of `opposite`.
    ///
    /// Most orientation families have none; the rotation family has
    /// exactly one (the identity rotation).
    fn is_self_opposite(self) -> bool {
        self.opposite() == self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal two-variant family used to exercise the trait in isolation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Compass {
        North,
        South,
    }

    impl Orientation for Compass {
        fn opposite(self) -> Self {
            match self {
                Compass::North => Compass::South,
                Compass::South => Compass::North,
            }
        }
    }

    #[test]
    fn test_opposite_reverses() {
        assert_eq!(Compass::North.opposite(), Compass::South);
        assert_eq!(Compass::South.opposite(), Compass::North);
    }

    #[test]
    fn test_opposite_is_involution() {
        assert_eq!(Compass::North.opposite().opposite(), Compass::North);
        assert_eq!(Compass::South.opposite().opposite(), Compass::South);
    }

    #[test]
    fn test_no_fixed_points() {
        assert!(!Compass::North.is_self_opposite());
        assert!(!Compass::South.is_self_opposite());
    }
}
