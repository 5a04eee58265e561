//! Every lane along x holds one voxel parked at either face. One lane at a time, the
//! voxel is sent across to the opposite face.

use crate::core::RandomSource;
use crate::engine_state::voxels::axis::ShiftDirection;
use crate::engine_state::voxels::cube::{VoxelCube, CUBE_DIMENSION};

use super::{Effect, Transition};

const FAR_FACE: i32 = CUBE_DIMENSION - 1;

/// What the effect does on its next step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SendPhase {
    /// Pick a lane to send.
    Choosing,
    /// Move the voxel of lane `(y, z)`, currently at `x`, one cell in `direction`.
    Sending {
        /// Lane y coordinate.
        y: i32,
        /// Lane z coordinate.
        z: i32,
        /// Where the voxel is now.
        x: i32,
        /// Which way it travels.
        direction: ShiftDirection,
    },
}

/// The packet sender.
#[derive(Clone, Debug)]
pub struct SendVoxels {
    /// Current progress.
    pub phase: SendPhase,
}

impl SendVoxels {
    /// Creates an unstarted sender.
    pub fn new() -> Self {
        Self {
            phase: SendPhase::Choosing,
        }
    }

    fn choose_lane<R: RandomSource>(cube: &VoxelCube, rng: &mut R) -> SendPhase {
        let y = rng.uniform_int(0, CUBE_DIMENSION);
        let z = rng.uniform_int(0, CUBE_DIMENSION);
        let (x, direction) = if cube.get(0, y, z) {
            (0, ShiftDirection::PosX)
        } else if cube.get(FAR_FACE, y, z) {
            (FAR_FACE, ShiftDirection::NegX)
        } else {
            log::debug!("Lane ({}, {}) has no parked voxel", y, z);
            return SendPhase::Choosing;
        };
        log::debug!("Sending lane ({}, {}) from x = {}", y, z, x);
        SendPhase::Sending { y, z, x, direction }
    }
}

impl Default for SendVoxels {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for SendVoxels {
    fn setup<R: RandomSource>(&mut self, cube: &mut VoxelCube, rng: &mut R) {
        cube.clear_all();
        for y in 0..CUBE_DIMENSION {
            for z in 0..CUBE_DIMENSION {
                cube.set(rng.boundary(), y, z);
            }
        }
        self.phase = SendPhase::Choosing;
    }

    fn advance<R: RandomSource>(&mut self, cube: &mut VoxelCube, rng: &mut R) -> Transition {
        self.phase = match self.phase {
            SendPhase::Choosing => Self::choose_lane(cube, rng),
            SendPhase::Sending { y, z, x, direction } => {
                let next = x + direction.step();
                cube.clear(x, y, z);
                cube.set(next, y, z);
                if next == 0 || next == FAR_FACE {
                    SendPhase::Choosing
                } else {
                    SendPhase::Sending {
                        y,
                        z,
                        x: next,
                        direction,
                    }
                }
            }
        };
        Transition::Stay
    }
}
