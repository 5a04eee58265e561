//! Drops appear at random in the top layer and fall one layer per step.

use crate::core::RandomSource;
use crate::engine_state::voxels::axis::{Axis, ShiftDirection};
use crate::engine_state::voxels::cube::{VoxelCube, CUBE_DIMENSION};

use super::{Effect, Transition};

/// Largest number of new drops in one step, exclusive.
pub const MAX_DROPS: i32 = 5;

/// Falling rain.
#[derive(Clone, Debug)]
pub struct Rain {
    /// The direction drops fall in.
    pub direction: ShiftDirection,
}

impl Rain {
    /// Rain falling down the y axis.
    pub fn new() -> Self {
        Self {
            direction: ShiftDirection::NegY,
        }
    }

    /// The layer drops enter through: the one the shift leaves empty.
    fn entry_layer(&self) -> i32 {
        if self.direction.is_positive() {
            0
        } else {
            CUBE_DIMENSION - 1
        }
    }
}

impl Default for Rain {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for Rain {
    fn setup<R: RandomSource>(&mut self, cube: &mut VoxelCube, _rng: &mut R) {
        cube.clear_all();
    }

    fn advance<R: RandomSource>(&mut self, cube: &mut VoxelCube, rng: &mut R) -> Transition {
        cube.shift(self.direction);

        let layer = self.entry_layer();
        let drops = rng.uniform_int(0, MAX_DROPS);
        for _ in 0..drops {
            let a = rng.uniform_int(0, CUBE_DIMENSION);
            let b = rng.uniform_int(0, CUBE_DIMENSION);
            match self.direction.axis() {
                Axis::X => cube.set(layer, a, b),
                Axis::Y => cube.set(a, layer, b),
                Axis::Z => cube.set(a, b, layer),
            }
        }
        Transition::Stay
    }
}
