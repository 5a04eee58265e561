//! # Effects
//!
//! The catalogue of light animations and the engine that advances the active one.
//!
//! ## Effect Lifecycle
//! 1. The scheduler (or a caller) switches the engine to an effect kind, which builds a
//!    fresh `EffectState` and raises the `loading` flag
//! 2. The next `EffectEngine::step()` runs the effect's one-time setup, lowers
//!    `loading` and returns without animating
//! 3. Every later call increments `timer`; once it exceeds the effect's period the
//!    timer resets and exactly one animation step runs
//! 4. A step may return `Transition::Reload`, which raises `loading` again so the
//!    effect sets itself up from scratch on the following call
//!
//! Animation speed therefore depends only on the period constants below, not on how
//! often `step()` is called, as long as it is called at a roughly constant rate.
//!
//! ## Catalogue
//! - `Rain`: drops enter the top layer and fall through the cube
//! - `PlaneBoing`: a lit plane sweeps across a random axis
//! - `SendVoxels`: single voxels travel between two opposite faces, one lane at a time
//! - `WoopWoop`: a centred wireframe cube pulses in and out
//! - `CubeJump`: a wireframe cube shrinks into a corner and regrows from another
//! - `Glow`: voxels light up one by one, then drain away one by one
//! - `Text`: digit glyphs scroll through the cube
//! - `Lit`: every voxel on
//! - `Corners`: lights one corner at a time, to check the wiring orientation

use num_derive::FromPrimitive;
use phf::phf_map;

use crate::core::RandomSource;

use super::voxels::cube::{Frame, VoxelCube, CUBE_SIZE};

pub mod corners;
pub mod cube_jump;
pub mod glow;
pub mod lit;
pub mod plane_boing;
pub mod rain;
pub mod send_voxels;
pub mod text;
pub mod woop_woop;

use corners::CornerSweep;
use cube_jump::CubeJump;
use glow::Glow;
use lit::Lit;
use plane_boing::PlaneBoing;
use rain::Rain;
use send_voxels::SendVoxels;
use text::Text;
use woop_woop::WoopWoop;

/// Ticks between two `Rain` steps.
pub const RAIN_TIME: u32 = 260;
/// Ticks between two `PlaneBoing` steps.
pub const PLANE_BOING_TIME: u32 = 220;
/// Ticks between two `SendVoxels` steps.
pub const SEND_VOXELS_TIME: u32 = 140;
/// Ticks between two `WoopWoop` steps.
pub const WOOP_WOOP_TIME: u32 = 350;
/// Ticks between two `CubeJump` steps.
pub const CUBE_JUMP_TIME: u32 = 200;
/// Ticks between two `Glow` steps.
pub const GLOW_TIME: u32 = 8;
/// Ticks between two `Text` steps.
pub const TEXT_TIME: u32 = 300;
/// Ticks between two `Lit` steps. `Lit` does nothing once it is set up.
pub const LIT_TIME: u32 = 500;
/// Ticks between two `Corners` steps.
pub const CORNERS_TIME: u32 = 600;

/// Identifies one effect of the catalogue.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum EffectKind {
    /// Falling drops.
    Rain,
    /// A plane sweeping along an axis.
    PlaneBoing,
    /// Voxels sent between opposite faces.
    SendVoxels,
    /// A pulsing centred wireframe cube.
    WoopWoop,
    /// A wireframe cube jumping between corners.
    CubeJump,
    /// Random fill and drain.
    Glow,
    /// Scrolling digits.
    Text,
    /// Every voxel lit.
    Lit,
    /// Corner by corner orientation check.
    Corners,
}

/// Maps configuration names to effect kinds.
pub static EFFECT_NAMES: phf::Map<&'static str, EffectKind> = phf_map! {
    "rain" => EffectKind::Rain,
    "plane_boing" => EffectKind::PlaneBoing,
    "send_voxels" => EffectKind::SendVoxels,
    "woop_woop" => EffectKind::WoopWoop,
    "cube_jump" => EffectKind::CubeJump,
    "glow" => EffectKind::Glow,
    "text" => EffectKind::Text,
    "lit" => EffectKind::Lit,
    "corners" => EffectKind::Corners,
};

impl EffectKind {
    /// Returns the whole catalogue in declaration order.
    pub fn all() -> [EffectKind; 9] {
        [
            EffectKind::Rain,
            EffectKind::PlaneBoing,
            EffectKind::SendVoxels,
            EffectKind::WoopWoop,
            EffectKind::CubeJump,
            EffectKind::Glow,
            EffectKind::Text,
            EffectKind::Lit,
            EffectKind::Corners,
        ]
    }

    /// Looks an effect up by its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        EFFECT_NAMES.get(name).copied()
    }

    /// Looks an effect up by its position in [`EffectKind::all`].
    pub fn from_index(index: u8) -> Option<Self> {
        num::FromPrimitive::from_u8(index)
    }

    /// The configuration name of this effect.
    pub fn name(self) -> &'static str {
        EFFECT_NAMES
            .entries()
            .find(|(_, kind)| **kind == self)
            .map(|(name, _)| *name)
            .unwrap_or("unknown")
    }

    /// The number of ticks that must elapse between two animation steps.
    pub fn period(self) -> u32 {
        match self {
            EffectKind::Rain => RAIN_TIME,
            EffectKind::PlaneBoing => PLANE_BOING_TIME,
            EffectKind::SendVoxels => SEND_VOXELS_TIME,
            EffectKind::WoopWoop => WOOP_WOOP_TIME,
            EffectKind::CubeJump => CUBE_JUMP_TIME,
            EffectKind::Glow => GLOW_TIME,
            EffectKind::Text => TEXT_TIME,
            EffectKind::Lit => LIT_TIME,
            EffectKind::Corners => CORNERS_TIME,
        }
    }
}

/// What the engine should do after an animation step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Keep animating.
    Stay,
    /// Raise `loading` so the effect sets itself up again on the next call.
    Reload,
}

/// One animation generator.
///
/// Implementations own only their private progress; the cube is lent to them for the
/// duration of each call.
pub trait Effect {
    /// One-time setup on entry, typically clearing the cube and placing the first shape.
    fn setup<R: RandomSource>(&mut self, cube: &mut VoxelCube, rng: &mut R);

    /// Performs one discrete animation step.
    fn advance<R: RandomSource>(&mut self, cube: &mut VoxelCube, rng: &mut R) -> Transition;
}

/// Tunables for the effects that take any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectSettings {
    /// Digits scrolled by `Text`.
    pub text: String,
    /// Whether `PlaneBoing` bounces back instead of restarting after one sweep.
    pub plane_boing_looped: bool,
    /// Voxels `Glow` lights one by one before it starts draining.
    pub glow_target: i32,
    /// Whether `Glow` lights the rest of the cube at once after reaching its target.
    pub glow_bulk_fill: bool,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            text: String::from("0123456789"),
            plane_boing_looped: false,
            glow_target: glow::GLOW_TARGET,
            glow_bulk_fill: true,
        }
    }
}

/// The private state of the active effect, one variant per kind.
#[derive(Clone, Debug)]
pub enum EffectState {
    /// State of `Rain`.
    Rain(Rain),
    /// State of `PlaneBoing`.
    PlaneBoing(PlaneBoing),
    /// State of `SendVoxels`.
    SendVoxels(SendVoxels),
    /// State of `WoopWoop`.
    WoopWoop(WoopWoop),
    /// State of `CubeJump`.
    CubeJump(CubeJump),
    /// State of `Glow`.
    Glow(Glow),
    /// State of `Text`.
    Text(Text),
    /// State of `Lit`.
    Lit(Lit),
    /// State of `CornerSweep`.
    Corners(CornerSweep),
}

impl EffectState {
    /// Builds the not-yet-set-up state for `kind`.
    pub fn new(kind: EffectKind, settings: &EffectSettings) -> Self {
        match kind {
            EffectKind::Rain => EffectState::Rain(Rain::new()),
            EffectKind::PlaneBoing => {
                EffectState::PlaneBoing(PlaneBoing::new(settings.plane_boing_looped))
            }
            EffectKind::SendVoxels => EffectState::SendVoxels(SendVoxels::new()),
            EffectKind::WoopWoop => EffectState::WoopWoop(WoopWoop::new()),
            EffectKind::CubeJump => EffectState::CubeJump(CubeJump::new()),
            EffectKind::Glow => EffectState::Glow(Glow::new(
                settings.glow_target.clamp(0, CUBE_SIZE),
                settings.glow_bulk_fill,
            )),
            EffectKind::Text => EffectState::Text(Text::new(&settings.text)),
            EffectKind::Lit => EffectState::Lit(Lit),
            EffectKind::Corners => EffectState::Corners(CornerSweep::new()),
        }
    }

    /// The kind this state belongs to.
    pub fn kind(&self) -> EffectKind {
        match self {
            EffectState::Rain(_) => EffectKind::Rain,
            EffectState::PlaneBoing(_) => EffectKind::PlaneBoing,
            EffectState::SendVoxels(_) => EffectKind::SendVoxels,
            EffectState::WoopWoop(_) => EffectKind::WoopWoop,
            EffectState::CubeJump(_) => EffectKind::CubeJump,
            EffectState::Glow(_) => EffectKind::Glow,
            EffectState::Text(_) => EffectKind::Text,
            EffectState::Lit(_) => EffectKind::Lit,
            EffectState::Corners(_) => EffectKind::Corners,
        }
    }
}

impl Effect for EffectState {
    fn setup<R: RandomSource>(&mut self, cube: &mut VoxelCube, rng: &mut R) {
        match self {
            EffectState::Rain(effect) => effect.setup(cube, rng),
            EffectState::PlaneBoing(effect) => effect.setup(cube, rng),
            EffectState::SendVoxels(effect) => effect.setup(cube, rng),
            EffectState::WoopWoop(effect) => effect.setup(cube, rng),
            EffectState::CubeJump(effect) => effect.setup(cube, rng),
            EffectState::Glow(effect) => effect.setup(cube, rng),
            EffectState::Text(effect) => effect.setup(cube, rng),
            EffectState::Lit(effect) => effect.setup(cube, rng),
            EffectState::Corners(effect) => effect.setup(cube, rng),
        }
    }

    fn advance<R: RandomSource>(&mut self, cube: &mut VoxelCube, rng: &mut R) -> Transition {
        match self {
            EffectState::Rain(effect) => effect.advance(cube, rng),
            EffectState::PlaneBoing(effect) => effect.advance(cube, rng),
            EffectState::SendVoxels(effect) => effect.advance(cube, rng),
            EffectState::WoopWoop(effect) => effect.advance(cube, rng),
            EffectState::CubeJump(effect) => effect.advance(cube, rng),
            EffectState::Glow(effect) => effect.advance(cube, rng),
            EffectState::Text(effect) => effect.advance(cube, rng),
            EffectState::Lit(effect) => effect.advance(cube, rng),
            EffectState::Corners(effect) => effect.advance(cube, rng),
        }
    }
}

/// Owns the cube and drives the active effect through its `(loading, timer)` cycle.
///
/// # Examples
/// ```
/// use led_cube::core::FastRandom;
/// use led_cube::engine_state::effects::{EffectEngine, EffectKind, EffectSettings};
///
/// let mut engine = EffectEngine::new(EffectKind::Lit, EffectSettings::default());
/// let mut rng = FastRandom::seeded(3);
/// engine.step(&mut rng);
/// assert!(engine.cube().is_full());
/// ```
#[derive(Clone, Debug)]
pub struct EffectEngine {
    cube: VoxelCube,
    state: EffectState,
    settings: EffectSettings,
    loading: bool,
    timer: u32,
}

impl EffectEngine {
    /// Creates an engine with a dark cube, about to set up `kind`.
    pub fn new(kind: EffectKind, settings: EffectSettings) -> Self {
        Self {
            cube: VoxelCube::new(),
            state: EffectState::new(kind, &settings),
            settings,
            loading: true,
            timer: 0,
        }
    }

    /// Replaces the active effect. Setup runs on the next [`EffectEngine::step`].
    pub fn switch_to(&mut self, kind: EffectKind) {
        log::info!("Switching effect to {}", kind.name());
        self.state = EffectState::new(kind, &self.settings);
        self.loading = true;
        self.timer = 0;
    }

    /// Advances the active effect by one outer tick.
    pub fn step<R: RandomSource>(&mut self, rng: &mut R) {
        if self.loading {
            self.state.setup(&mut self.cube, rng);
            self.loading = false;
            self.timer = 0;
            return;
        }

        self.timer += 1;
        if self.timer > self.state.kind().period() {
            self.timer = 0;
            if self.state.advance(&mut self.cube, rng) == Transition::Reload {
                log::debug!("{} finished a cycle, reloading", self.state.kind().name());
                self.loading = true;
            }
        }
    }

    /// The kind of the active effect.
    pub fn current(&self) -> EffectKind {
        self.state.kind()
    }

    /// The private state of the active effect.
    pub fn state(&self) -> &EffectState {
        &self.state
    }

    /// Whether the next step will run setup.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Ticks counted since the last animation step.
    pub fn timer(&self) -> u32 {
        self.timer
    }

    /// The live cube.
    pub fn cube(&self) -> &VoxelCube {
        &self.cube
    }

    /// A snapshot of the cube for the frame sink.
    pub fn frame(&self) -> Frame {
        self.cube.frame()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::testing::ScriptedRandom;
    use crate::core::FastRandom;

    /// Runs setup and then `steps` animation steps directly on an effect.
    pub fn run_effect<E: Effect, R: RandomSource>(
        effect: &mut E,
        cube: &mut VoxelCube,
        rng: &mut R,
        steps: usize,
    ) -> Vec<Transition> {
        effect.setup(cube, rng);
        (0..steps).map(|_| effect.advance(cube, rng)).collect()
    }

    #[test]
    fn test_names_round_trip() {
        for kind in EffectKind::all() {
            assert_eq!(EffectKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(EffectKind::from_name("disco"), None);
        assert_eq!(EffectKind::from_index(1), Some(EffectKind::PlaneBoing));
        assert_eq!(EffectKind::from_index(9), None);
    }

    #[test]
    fn test_loading_call_only_sets_up() {
        let mut engine = EffectEngine::new(EffectKind::CubeJump, EffectSettings::default());
        let mut rng = ScriptedRandom::new(&[]);
        assert!(engine.is_loading());
        engine.step(&mut rng);
        assert!(!engine.is_loading());
        assert_eq!(engine.timer(), 0);
        assert!(engine.cube().is_empty(), "cube jump draws nothing until its first step");
    }

    #[test]
    fn test_animation_waits_for_period() {
        let mut engine = EffectEngine::new(EffectKind::CubeJump, EffectSettings::default());
        let mut rng = ScriptedRandom::new(&[]);
        engine.step(&mut rng);

        for _ in 0..CUBE_JUMP_TIME {
            engine.step(&mut rng);
            assert!(engine.cube().is_empty());
        }
        assert_eq!(engine.timer(), CUBE_JUMP_TIME);

        engine.step(&mut rng);
        assert_eq!(engine.timer(), 0);
        assert!(!engine.cube().is_empty(), "first step draws the full size outline");
    }

    #[test]
    fn test_switch_clears_on_setup() {
        let mut engine = EffectEngine::new(EffectKind::Lit, EffectSettings::default());
        let mut rng = FastRandom::seeded(5);
        engine.step(&mut rng);
        assert!(engine.cube().is_full());

        engine.switch_to(EffectKind::Rain);
        assert_eq!(engine.current(), EffectKind::Rain);
        assert!(engine.is_loading());
        engine.step(&mut rng);
        assert!(engine.cube().is_empty());
    }

    #[test]
    fn test_reload_raises_loading() {
        let mut engine = EffectEngine::new(EffectKind::PlaneBoing, EffectSettings::default());
        let mut rng = FastRandom::seeded(11);
        engine.step(&mut rng);

        let mut reloaded = false;
        for _ in 0..(PLANE_BOING_TIME as usize + 1) * 6 {
            engine.step(&mut rng);
            if engine.is_loading() {
                reloaded = true;
                break;
            }
        }
        assert!(reloaded, "an unlooped sweep ends after one traversal");
    }

    #[test]
    fn test_every_effect_keeps_column_invariant() {
        let mut rng = FastRandom::seeded(2024);
        for kind in EffectKind::all() {
            let mut engine = EffectEngine::new(kind, EffectSettings::default());
            for _ in 0..(kind.period() as usize + 1) * 40 {
                engine.step(&mut rng);
                assert!(
                    engine.frame().as_bytes().iter().all(|b| b & 0xE0 == 0),
                    "{:?} wrote past the column width",
                    kind
                );
            }
        }
    }
}
