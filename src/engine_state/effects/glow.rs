//! Random voxels light up one per step until a target count is reached, then random
//! lit voxels go dark one per step until the cube is empty, and so on.

use cgmath::Point3;

use crate::core::RandomSource;
use crate::engine_state::voxels::cube::{VoxelCube, CUBE_DIMENSION, CUBE_SIZE};

use super::{Effect, Transition};

/// Default number of voxels lit one by one before draining starts.
pub const GLOW_TARGET: i32 = 100;
/// Random coordinate draws tried before falling back to an exact pick among the
/// remaining candidates.
pub const MAX_REJECTIONS: u32 = 8;

/// Which way the glow is going.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GlowPhase {
    /// Lighting random dark voxels; `lit` counts how many so far.
    Filling {
        /// Voxels lit during this phase.
        lit: i32,
    },
    /// Clearing random lit voxels; `cleared` counts how many so far.
    Draining {
        /// Voxels cleared during this phase.
        cleared: i32,
    },
}

/// The fill and drain cycle.
#[derive(Clone, Debug)]
pub struct Glow {
    /// Voxels to light one by one.
    pub target: i32,
    /// Whether to light the remainder at once when the target is reached.
    pub bulk_fill: bool,
    /// Current phase.
    pub phase: GlowPhase,
}

impl Glow {
    /// Creates a glow that fills `target` voxels before draining.
    pub fn new(target: i32, bulk_fill: bool) -> Self {
        Self {
            target: target.clamp(0, CUBE_SIZE),
            bulk_fill,
            phase: GlowPhase::Filling { lit: 0 },
        }
    }
}

/// Picks a random voxel whose state is `lit`, or `None` if there is none.
///
/// A few rejection-sampling draws are tried first. If they all miss, the pick is made
/// exactly among the remaining candidates, so this terminates for any cube.
fn pick_voxel<R: RandomSource>(cube: &VoxelCube, lit: bool, rng: &mut R) -> Option<Point3<i32>> {
    let candidates = if lit {
        cube.count_lit()
    } else {
        CUBE_SIZE - cube.count_lit()
    };
    if candidates == 0 {
        return None;
    }

    for _ in 0..MAX_REJECTIONS {
        let point = Point3::new(
            rng.uniform_int(0, CUBE_DIMENSION),
            rng.uniform_int(0, CUBE_DIMENSION),
            rng.uniform_int(0, CUBE_DIMENSION),
        );
        if cube.get_point(point) == lit {
            return Some(point);
        }
    }
    cube.nth_voxel(lit, rng.uniform_int(0, candidates))
}

impl Effect for Glow {
    fn setup<R: RandomSource>(&mut self, cube: &mut VoxelCube, _rng: &mut R) {
        cube.clear_all();
        self.phase = GlowPhase::Filling { lit: 0 };
    }

    fn advance<R: RandomSource>(&mut self, cube: &mut VoxelCube, rng: &mut R) -> Transition {
        self.phase = match self.phase {
            GlowPhase::Filling { mut lit } => {
                if lit < self.target {
                    if let Some(point) = pick_voxel(cube, false, rng) {
                        cube.set_point(point);
                        lit += 1;
                    }
                }
                if lit >= self.target || cube.is_full() {
                    if self.bulk_fill {
                        cube.fill_all();
                    }
                    GlowPhase::Draining { cleared: 0 }
                } else {
                    GlowPhase::Filling { lit }
                }
            }
            GlowPhase::Draining { mut cleared } => {
                if let Some(point) = pick_voxel(cube, true, rng) {
                    cube.clear_point(point);
                    cleared += 1;
                }
                if cube.is_empty() {
                    log::debug!("Glow drained after clearing {} voxels", cleared);
                    GlowPhase::Filling { lit: 0 }
                } else {
                    GlowPhase::Draining { cleared }
                }
            }
        };
        Transition::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::ScriptedRandom;
    use crate::core::FastRandom;

    #[test]
    fn test_filling_reaches_target_then_drains() {
        let mut glow = Glow::new(40, false);
        let mut cube = VoxelCube::new();
        let mut rng = FastRandom::seeded(4);
        glow.setup(&mut cube, &mut rng);

        for step in 1..40 {
            glow.advance(&mut cube, &mut rng);
            assert_eq!(cube.count_lit(), step);
            assert_eq!(glow.phase, GlowPhase::Filling { lit: step });
        }
        glow.advance(&mut cube, &mut rng);
        assert_eq!(cube.count_lit(), 40);
        assert_eq!(glow.phase, GlowPhase::Draining { cleared: 0 });
    }

    #[test]
    fn test_bulk_fill_lights_the_rest() {
        let mut glow = Glow::new(3, true);
        let mut cube = VoxelCube::new();
        let mut rng = FastRandom::seeded(4);
        glow.setup(&mut cube, &mut rng);
        for _ in 0..3 {
            glow.advance(&mut cube, &mut rng);
        }
        assert!(cube.is_full());
        assert_eq!(glow.phase, GlowPhase::Draining { cleared: 0 });
    }

    #[test]
    fn test_full_target_terminates() {
        let mut glow = Glow::new(CUBE_SIZE, false);
        let mut cube = VoxelCube::new();
        let mut rng = FastRandom::seeded(12);
        glow.setup(&mut cube, &mut rng);
        for _ in 0..CUBE_SIZE {
            glow.advance(&mut cube, &mut rng);
        }
        assert!(cube.is_full());
        assert_eq!(glow.phase, GlowPhase::Draining { cleared: 0 });
    }

    #[test]
    fn test_draining_empties_a_full_cube() {
        let mut glow = Glow::new(GLOW_TARGET, true);
        glow.phase = GlowPhase::Draining { cleared: 0 };
        let mut cube = VoxelCube::new();
        cube.fill_all();
        let mut rng = FastRandom::seeded(99);

        for step in 1..CUBE_SIZE {
            glow.advance(&mut cube, &mut rng);
            assert_eq!(cube.count_lit(), CUBE_SIZE - step);
            assert_eq!(glow.phase, GlowPhase::Draining { cleared: step });
        }
        glow.advance(&mut cube, &mut rng);
        assert!(cube.is_empty());
        assert_eq!(glow.phase, GlowPhase::Filling { lit: 0 });
    }

    #[test]
    fn test_filling_a_full_cube_flips_immediately() {
        let mut glow = Glow::new(GLOW_TARGET, false);
        let mut cube = VoxelCube::new();
        cube.fill_all();
        let mut rng = ScriptedRandom::new(&[]);
        glow.advance(&mut cube, &mut rng);
        assert_eq!(glow.phase, GlowPhase::Draining { cleared: 0 });
    }

    #[test]
    fn test_draining_an_empty_cube_flips_immediately() {
        let mut glow = Glow::new(GLOW_TARGET, false);
        glow.phase = GlowPhase::Draining { cleared: 7 };
        let mut cube = VoxelCube::new();
        let mut rng = ScriptedRandom::new(&[]);
        glow.advance(&mut cube, &mut rng);
        assert_eq!(glow.phase, GlowPhase::Filling { lit: 0 });
    }

    #[test]
    fn test_pick_falls_back_when_sampling_misses() {
        let mut cube = VoxelCube::new();
        cube.set(3, 1, 4);
        // Every rejection draw lands on (0, 0, 0), which is dark
        let mut rng = ScriptedRandom::new(&[]);
        assert_eq!(pick_voxel(&cube, true, &mut rng), Some(Point3::new(3, 1, 4)));
    }
}
