//! # Axis Module
//!
//! Axes and signed shift directions of the cube.

use num_derive::FromPrimitive;

use crate::core::RandomSource;

/// One of the three axes of the cube.
///
/// The `FromPrimitive` derive allows picking an axis from a random integer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum Axis {
    /// The first index of the column grid; the layer axis of the hardware scan.
    X = 0,
    /// The second index of the column grid.
    Y = 1,
    /// The bit index inside a column mask.
    Z = 2,
}

impl Axis {
    /// Returns all three axes in order.
    pub fn all() -> [Axis; 3] {
        [Axis::X, Axis::Y, Axis::Z]
    }

    /// Picks an axis uniformly at random.
    pub fn random(rng: &mut impl RandomSource) -> Self {
        num::FromPrimitive::from_i32(rng.uniform_int(0, 3)).unwrap_or(Axis::X)
    }
}

/// One of the six directions the cube contents can be shifted in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShiftDirection {
    /// Towards larger x.
    PosX,
    /// Towards smaller x.
    NegX,
    /// Towards larger y.
    PosY,
    /// Towards smaller y.
    NegY,
    /// Towards larger z (column masks shift left).
    PosZ,
    /// Towards smaller z (column masks shift right).
    NegZ,
}

impl ShiftDirection {
    /// Returns all six directions.
    pub fn all() -> [ShiftDirection; 6] {
        [
            ShiftDirection::PosX,
            ShiftDirection::NegX,
            ShiftDirection::PosY,
            ShiftDirection::NegY,
            ShiftDirection::PosZ,
            ShiftDirection::NegZ,
        ]
    }

    /// The direction along `axis`, positive or negative.
    pub fn along(axis: Axis, positive: bool) -> Self {
        match (axis, positive) {
            (Axis::X, true) => ShiftDirection::PosX,
            (Axis::X, false) => ShiftDirection::NegX,
            (Axis::Y, true) => ShiftDirection::PosY,
            (Axis::Y, false) => ShiftDirection::NegY,
            (Axis::Z, true) => ShiftDirection::PosZ,
            (Axis::Z, false) => ShiftDirection::NegZ,
        }
    }

    /// The axis this direction moves along.
    pub fn axis(self) -> Axis {
        match self {
            ShiftDirection::PosX | ShiftDirection::NegX => Axis::X,
            ShiftDirection::PosY | ShiftDirection::NegY => Axis::Y,
            ShiftDirection::PosZ | ShiftDirection::NegZ => Axis::Z,
        }
    }

    /// Whether this direction increases the coordinate along its axis.
    pub fn is_positive(self) -> bool {
        matches!(
            self,
            ShiftDirection::PosX | ShiftDirection::PosY | ShiftDirection::PosZ
        )
    }

    /// The change in coordinate along the axis: `1` or `-1`.
    pub fn step(self) -> i32 {
        if self.is_positive() {
            1
        } else {
            -1
        }
    }

    /// The opposite direction along the same axis.
    pub fn reversed(self) -> Self {
        Self::along(self.axis(), !self.is_positive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::ScriptedRandom;

    #[test]
    fn test_along_round_trips() {
        for direction in ShiftDirection::all() {
            assert_eq!(
                ShiftDirection::along(direction.axis(), direction.is_positive()),
                direction
            );
            assert_eq!(direction.reversed().reversed(), direction);
            assert_ne!(direction.reversed(), direction);
        }
    }

    #[test]
    fn test_random_axis_follows_draw() {
        let mut rng = ScriptedRandom::new(&[0, 1, 2]);
        assert_eq!(Axis::random(&mut rng), Axis::X);
        assert_eq!(Axis::random(&mut rng), Axis::Y);
        assert_eq!(Axis::random(&mut rng), Axis::Z);
    }
}
