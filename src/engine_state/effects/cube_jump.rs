//! A wireframe cube shrinks from the full volume into one corner, then regrows from a
//! freshly chosen corner.

use crate::core::RandomSource;
use crate::engine_state::voxels::corner::Corner;
use crate::engine_state::voxels::cube::{VoxelCube, CUBE_DIMENSION};

use super::{Effect, Transition};

/// Whether the outline is getting smaller or larger.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JumpPhase {
    /// Collapsing towards the corner, one size per step.
    Shrinking,
    /// Growing out of the corner, one size per step.
    Expanding,
}

/// The corner-anchored outline.
#[derive(Clone, Debug)]
pub struct CubeJump {
    /// Corner the outline is flush with.
    pub corner: Corner,
    /// Side length drawn on the next step.
    pub size: i32,
    /// Direction of the size change.
    pub phase: JumpPhase,
}

impl CubeJump {
    /// Creates an unstarted jump.
    pub fn new() -> Self {
        Self {
            corner: Corner::LowerFrontLeft,
            size: CUBE_DIMENSION,
            phase: JumpPhase::Shrinking,
        }
    }
}

impl Default for CubeJump {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for CubeJump {
    fn setup<R: RandomSource>(&mut self, cube: &mut VoxelCube, rng: &mut R) {
        cube.clear_all();
        self.corner = Corner::random(rng);
        self.size = CUBE_DIMENSION;
        self.phase = JumpPhase::Shrinking;
        log::debug!("Cube jump starting at {:?}", self.corner);
    }

    fn advance<R: RandomSource>(&mut self, cube: &mut VoxelCube, rng: &mut R) -> Transition {
        let anchor = self.corner.anchor(self.size);
        cube.clear_all();
        cube.draw_hollow_cube(anchor.x, anchor.y, anchor.z, self.size);

        match self.phase {
            JumpPhase::Shrinking => {
                self.size -= 1;
                if self.size <= 1 {
                    self.size = 1;
                    self.phase = JumpPhase::Expanding;
                    self.corner = Corner::random(rng);
                    log::debug!("Cube jump moving to {:?}", self.corner);
                }
            }
            JumpPhase::Expanding => {
                self.size += 1;
                if self.size >= CUBE_DIMENSION {
                    self.size = CUBE_DIMENSION;
                    self.phase = JumpPhase::Shrinking;
                }
            }
        }
        Transition::Stay
    }
}
