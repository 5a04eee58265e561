//! A wireframe cube centred in the volume pulses between the smallest and the largest
//! outline that fit around the centre voxel.

use crate::core::RandomSource;
use crate::engine_state::voxels::cube::{VoxelCube, CUBE_DIMENSION};

use super::{Effect, Transition};

/// Smallest outline: the centre voxel alone.
pub const MIN_SIZE: i32 = 1;
/// Size change per step. Sizes stay odd so the outline is always centred.
pub const SIZE_STEP: i32 = 2;

/// Whether the outline is currently growing or shrinking.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pulse {
    /// Growing by two per step.
    Expanding,
    /// Shrinking by two per step.
    Contracting,
}

/// The pulsing outline.
#[derive(Clone, Debug)]
pub struct WoopWoop {
    /// Side length of the outline currently drawn.
    pub size: i32,
    /// Direction of the pulse.
    pub pulse: Pulse,
}

impl WoopWoop {
    /// Creates a pulse starting from the centre voxel.
    pub fn new() -> Self {
        Self {
            size: MIN_SIZE,
            pulse: Pulse::Expanding,
        }
    }

    fn draw(&self, cube: &mut VoxelCube) {
        let offset = (CUBE_DIMENSION - self.size) / 2;
        cube.clear_all();
        cube.draw_hollow_cube(offset, offset, offset, self.size);
    }
}

impl Default for WoopWoop {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for WoopWoop {
    fn setup<R: RandomSource>(&mut self, cube: &mut VoxelCube, _rng: &mut R) {
        self.size = MIN_SIZE;
        self.pulse = Pulse::Expanding;
        self.draw(cube);
    }

    fn advance<R: RandomSource>(&mut self, cube: &mut VoxelCube, _rng: &mut R) -> Transition {
        match self.pulse {
            Pulse::Expanding => {
                self.size += SIZE_STEP;
                if self.size >= CUBE_DIMENSION {
                    self.size = CUBE_DIMENSION;
                    self.pulse = Pulse::Contracting;
                }
            }
            Pulse::Contracting => {
                self.size -= SIZE_STEP;
                if self.size <= MIN_SIZE {
                    self.size = MIN_SIZE;
                    self.pulse = Pulse::Expanding;
                }
            }
        }
        self.draw(cube);
        Transition::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::ScriptedRandom;

    #[test]
    fn test_pulse_sequence() {
        let mut effect = WoopWoop::new();
        let mut cube = VoxelCube::new();
        let mut rng = ScriptedRandom::new(&[]);
        effect.setup(&mut cube, &mut rng);
        assert_eq!(cube.count_lit(), 1);
        assert!(cube.get(2, 2, 2));

        let mut sizes = Vec::new();
        for _ in 0..6 {
            effect.advance(&mut cube, &mut rng);
            sizes.push(effect.size);
        }
        assert_eq!(sizes, vec![3, 5, 3, 1, 3, 5]);
    }

    #[test]
    fn test_outline_is_redrawn_from_scratch() {
        let mut effect = WoopWoop::new();
        let mut cube = VoxelCube::new();
        let mut rng = ScriptedRandom::new(&[]);
        effect.setup(&mut cube, &mut rng);
        effect.advance(&mut cube, &mut rng);
        effect.advance(&mut cube, &mut rng);
        effect.advance(&mut cube, &mut rng);

        let mut expected = VoxelCube::new();
        expected.draw_hollow_cube(1, 1, 1, 3);
        assert_eq!(cube, expected);
    }
}
