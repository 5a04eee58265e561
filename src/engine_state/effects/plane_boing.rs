//! A fully lit plane sweeps from one face of the cube to the other.

use crate::core::RandomSource;
use crate::engine_state::voxels::axis::{Axis, ShiftDirection};
use crate::engine_state::voxels::cube::{VoxelCube, CUBE_DIMENSION};

use super::{Effect, Transition};

/// Progress of the sweeping plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlanePhase {
    /// Not set up yet.
    Idle,
    /// The plane sits at `position` and moves in `direction` on the next step.
    Sweeping {
        /// Where the plane is along its axis.
        position: i32,
        /// Where it goes next.
        direction: ShiftDirection,
    },
}

/// The plane sweep.
///
/// Without `looped` one traversal is a whole cycle: when the plane reaches the far face
/// the effect asks to be reloaded, which picks a fresh axis and face. With `looped` it
/// bounces back and forth along the same axis.
#[derive(Clone, Debug)]
pub struct PlaneBoing {
    /// Whether the plane bounces at the far face instead of restarting.
    pub looped: bool,
    /// Current progress.
    pub phase: PlanePhase,
}

impl PlaneBoing {
    /// Creates an unstarted sweep.
    pub fn new(looped: bool) -> Self {
        Self {
            looped,
            phase: PlanePhase::Idle,
        }
    }
}

impl Effect for PlaneBoing {
    fn setup<R: RandomSource>(&mut self, cube: &mut VoxelCube, rng: &mut R) {
        cube.clear_all();
        let axis = Axis::random(rng);
        let position = rng.boundary();
        cube.fill_plane(axis, position);

        let direction = ShiftDirection::along(axis, position == 0);
        log::debug!("Plane boing along {:?} from {} heading {:?}", axis, position, direction);
        self.phase = PlanePhase::Sweeping {
            position,
            direction,
        };
    }

    fn advance<R: RandomSource>(&mut self, cube: &mut VoxelCube, _rng: &mut R) -> Transition {
        let PlanePhase::Sweeping {
            position,
            mut direction,
        } = self.phase
        else {
            return Transition::Reload;
        };

        let far_face = if direction.is_positive() {
            CUBE_DIMENSION - 1
        } else {
            0
        };
        if position == far_face {
            if !self.looped {
                return Transition::Reload;
            }
            direction = direction.reversed();
        }

        cube.shift(direction);
        self.phase = PlanePhase::Sweeping {
            position: position + direction.step(),
            direction,
        };
        Transition::Stay
    }
}
