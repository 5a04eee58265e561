//! # Corner Module
//!
//! The eight corners of the cube and the anchor arithmetic that keeps a shrinking
//! outline flush with its corner.

use cgmath::Point3;
use num_derive::FromPrimitive;

use crate::core::RandomSource;

use super::cube::CUBE_DIMENSION;

/// Coordinate of the front plane along x.
pub const FRONT: i32 = 0;
/// Coordinate of the rear plane along x.
pub const REAR: i32 = CUBE_DIMENSION - 1;
/// Coordinate of the lower layer along y.
pub const LOWER: i32 = 0;
/// Coordinate of the upper layer along y.
pub const UPPER: i32 = CUBE_DIMENSION - 1;
/// Coordinate of the left plane along z.
pub const LEFT: i32 = 0;
/// Coordinate of the right plane along z.
pub const RIGHT: i32 = CUBE_DIMENSION - 1;

/// One of the eight corners of the volume.
///
/// The discriminant packs the corner as three bits: bit 2 is upper, bit 1 is rear and
/// bit 0 is right, so the `FromPrimitive` derive turns any integer in `0..8` into a
/// corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum Corner {
    /// The lower front left corner.
    LowerFrontLeft = 0b000,
    /// The lower front right corner.
    LowerFrontRight = 0b001,
    /// The lower rear left corner.
    LowerRearLeft = 0b010,
    /// The lower rear right corner.
    LowerRearRight = 0b011,
    /// The upper front left corner.
    UpperFrontLeft = 0b100,
    /// The upper front right corner.
    UpperFrontRight = 0b101,
    /// The upper rear left corner.
    UpperRearLeft = 0b110,
    /// The upper rear right corner.
    UpperRearRight = 0b111,
}

impl Corner {
    /// All eight corners in sweep order.
    pub fn all() -> [Corner; 8] {
        [
            Corner::UpperFrontLeft,
            Corner::UpperFrontRight,
            Corner::UpperRearLeft,
            Corner::UpperRearRight,
            Corner::LowerFrontLeft,
            Corner::LowerFrontRight,
            Corner::LowerRearLeft,
            Corner::LowerRearRight,
        ]
    }

    /// Picks a corner uniformly at random, one boundary draw per axis.
    pub fn random(rng: &mut impl RandomSource) -> Self {
        let x = rng.boundary();
        let y = rng.boundary();
        let z = rng.boundary();
        Self::at(Point3::new(x, y, z)).unwrap_or(Corner::LowerFrontLeft)
    }

    /// Returns the corner at `position`, or `None` if the point is not a corner.
    pub fn at(position: Point3<i32>) -> Option<Self> {
        let bit = |value: i32, far: i32| match value {
            0 => Some(0),
            v if v == far => Some(1),
            _ => None,
        };
        let rear = bit(position.x, REAR)?;
        let upper = bit(position.y, UPPER)?;
        let right = bit(position.z, RIGHT)?;
        num::FromPrimitive::from_i32(upper << 2 | rear << 1 | right)
    }

    /// The corner voxel itself.
    pub fn position(self) -> Point3<i32> {
        let bits = self as i32;
        Point3::new(
            if bits & 0b010 != 0 { REAR } else { FRONT },
            if bits & 0b100 != 0 { UPPER } else { LOWER },
            if bits & 0b001 != 0 { RIGHT } else { LEFT },
        )
    }

    /// The lowest corner of a `size` wide outline that touches this corner.
    ///
    /// Components at zero stay at zero; components at the far boundary become
    /// `far + 1 - size`, so the outline grows and shrinks towards the corner instead of
    /// towards the origin.
    pub fn anchor(self, size: i32) -> Point3<i32> {
        let adjust = |value: i32| if value == 0 { 0 } else { value + 1 - size };
        let position = self.position();
        Point3::new(adjust(position.x), adjust(position.y), adjust(position.z))
    }
}
