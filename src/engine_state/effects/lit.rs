//! Every voxel on.

use crate::core::RandomSource;
use crate::engine_state::voxels::cube::VoxelCube;

use super::{Effect, Transition};

/// Lights the whole cube on entry and leaves it alone afterwards.
#[derive(Copy, Clone, Debug, Default)]
pub struct Lit;

impl Effect for Lit {
    fn setup<R: RandomSource>(&mut self, cube: &mut VoxelCube, _rng: &mut R) {
        cube.fill_all();
    }

    fn advance<R: RandomSource>(&mut self, _cube: &mut VoxelCube, _rng: &mut R) -> Transition {
        Transition::Stay
    }
}
