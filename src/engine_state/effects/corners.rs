//! Wiring check: lights exactly one corner at a time, walking through all eight.
//!
//! Watching which physical LED comes on for each logged corner name shows whether the
//! layers and columns are wired in the orientation the engine assumes.

use crate::core::RandomSource;
use crate::engine_state::voxels::corner::Corner;
use crate::engine_state::voxels::cube::VoxelCube;

use super::{Effect, Transition};

/// The corner sweep.
#[derive(Clone, Debug, Default)]
pub struct CornerSweep {
    /// Index into [`Corner::all`] of the corner currently lit.
    pub index: usize,
}

impl CornerSweep {
    /// Creates a sweep starting at the first corner.
    pub fn new() -> Self {
        Self::default()
    }

    /// The corner currently lit.
    pub fn corner(&self) -> Corner {
        let corners = Corner::all();
        corners[self.index % corners.len()]
    }

    fn light(&self, cube: &mut VoxelCube) {
        let corner = self.corner();
        cube.clear_all();
        cube.set_point(corner.position());
        log::debug!("Current corner: {:?}", corner);
    }
}

impl Effect for CornerSweep {
    fn setup<R: RandomSource>(&mut self, cube: &mut VoxelCube, _rng: &mut R) {
        self.index = 0;
        self.light(cube);
    }

    fn advance<R: RandomSource>(&mut self, cube: &mut VoxelCube, _rng: &mut R) -> Transition {
        self.index = (self.index + 1) % Corner::all().len();
        self.light(cube);
        Transition::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::ScriptedRandom;

    #[test]
    fn test_visits_every_corner_then_wraps() {
        let mut sweep = CornerSweep::new();
        let mut cube = VoxelCube::new();
        let mut rng = ScriptedRandom::new(&[]);
        sweep.setup(&mut cube, &mut rng);

        let mut seen = Vec::new();
        for _ in 0..8 {
            assert_eq!(cube.count_lit(), 1);
            assert!(cube.get_point(sweep.corner().position()));
            seen.push(sweep.corner());
            sweep.advance(&mut cube, &mut rng);
        }
        assert_eq!(seen, Corner::all().to_vec());
        assert_eq!(sweep.corner(), Corner::UpperFrontLeft);
        assert!(cube.get(0, 4, 0));
    }
}
