//! The six axis-aligned directions of the block grid.
//!
//! Axis mapping: `Up` = +Y, `Down` = -Y, `North` = -Z, `South` = +Z,
//! `East` = +X, `West` = -X.

use serde::{Deserialize, Serialize};

use crate::math::IVec3;

/// Axis-aligned unit direction, also used to name a block face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    /// +Y
    Up = 0,
    /// -Y
    Down = 1,
    /// -Z
    North = 2,
    /// +Z
    South = 3,
    /// +X
    East = 4,
    /// -X
    West = 5,
}

impl Direction {
    /// All six directions.
    pub const ALL: [Self; 6] = [
        Self::Up,
        Self::Down,
        Self::North,
        Self::South,
        Self::East,
        Self::West,
    ];

    /// The direction pointing the other way along the same axis.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Unit block displacement for this direction.
    #[inline]
    #[must_use]
    pub const fn offset(self) -> IVec3 {
        match self {
            Self::Up => IVec3::new(0, 1, 0),
            Self::Down => IVec3::new(0, -1, 0),
            Self::North => IVec3::new(0, 0, -1),
            Self::South => IVec3::new(0, 0, 1),
            Self::East => IVec3::new(1, 0, 0),
            Self::West => IVec3::new(-1, 0, 0),
        }
    }

    /// Derives the direction of a block displacement.
    ///
    /// `delta` is expected to be a single-axis step such as `(0, -1, 0)`.
    /// When more than one axis is non-zero the axis with the largest
    /// magnitude wins, and on equal magnitudes X beats Y beats Z. A zero
    /// delta has no direction and maps to `Up`.
    #[must_use]
    pub fn from_axis_delta(delta: IVec3) -> Self {
        debug_assert_ne!(delta, IVec3::ZERO, "zero displacement has no direction");

        let (ax, ay, az) = (delta.x.unsigned_abs(), delta.y.unsigned_abs(), delta.z.unsigned_abs());

        if ax > 0 && ax >= ay && ax >= az {
            if delta.x > 0 { Self::East } else { Self::West }
        } else if ay > 0 && ay >= az {
            if delta.y > 0 { Self::Up } else { Self::Down }
        } else if az > 0 {
            if delta.z > 0 { Self::South } else { Self::North }
        } else {
            Self::Up
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.offset() + dir.opposite().offset(), IVec3::ZERO);
        }
    }

    #[test]
    fn test_from_axis_delta_unit_steps() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_axis_delta(dir.offset()), dir);
        }
        assert_eq!(Direction::from_axis_delta(IVec3::new(0, -1, 0)), Direction::Down);
        assert_eq!(Direction::from_axis_delta(IVec3::new(0, 0, -1)), Direction::North);
    }

    #[test]
    fn test_from_axis_delta_multi_axis() {
        // Larger magnitude wins
        assert_eq!(Direction::from_axis_delta(IVec3::new(1, -3, 0)), Direction::Down);
        assert_eq!(Direction::from_axis_delta(IVec3::new(0, 1, -2)), Direction::North);

        // Ties: X, then Y, then Z
        assert_eq!(Direction::from_axis_delta(IVec3::new(-1, 1, 1)), Direction::West);
        assert_eq!(Direction::from_axis_delta(IVec3::new(0, 1, -1)), Direction::Up);
    }
}
