//! # Engine State Module
//!
//! The core of the cube: the voxel model, the effect catalogue and the scheduler that
//! cycles through it.
//!
//! ## Key Components
//!
//! * `CubeEngine` - The top-level state container, one render per outer tick
//! * `voxels` - The bit-packed cube and the geometry that mutates it
//! * `effects` - The animation generators and the engine driving the active one
//! * `scheduler` - The timed cycle deciding which effect is active
//!
//! ## Architecture
//!
//! Data flows one way on every tick:
//!
//! 1. The scheduler compares the clock against its deadline and may select a new effect
//! 2. The active effect sets itself up or, once its period has elapsed, animates one step
//! 3. A snapshot of the cube is handed to the frame sink
//!
//! Everything is single-threaded and owned; collaborators are borrowed for the duration
//! of a single call.

use crate::config::{ConfigError, CubeConfig};
use crate::core::{Clock, FrameSink, RandomSource};

use effects::{EffectEngine, EffectKind};
use scheduler::EffectScheduler;
use voxels::cube::{Frame, VoxelCube};

pub mod effects;
pub mod scheduler;
pub mod voxels;

/// The main state container of the LED cube.
///
/// # Examples
///
/// ```
/// use led_cube::config::CubeConfig;
/// use led_cube::core::{FastRandom, LoggingFrameSink, MonotonicClock};
/// use led_cube::engine_state::CubeEngine;
///
/// let clock = MonotonicClock::new();
/// let mut rng = FastRandom::seeded(1);
/// let mut sink = LoggingFrameSink::new();
/// let mut engine = CubeEngine::from_config(&CubeConfig::default(), &clock).unwrap();
///
/// for _ in 0..10 {
///     engine.render_once(&clock, &mut rng, &mut sink);
/// }
/// assert_eq!(sink.frames_seen(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct CubeEngine {
    /// Drives the active effect and owns the cube.
    pub effects: EffectEngine,
    /// Decides when to move to the next effect.
    pub scheduler: EffectScheduler,
}

impl CubeEngine {
    /// Assembles an engine from its two parts, switching the effect engine to the
    /// scheduler's current kind if they disagree.
    pub fn new(mut effects: EffectEngine, scheduler: EffectScheduler) -> Self {
        if effects.current() != scheduler.current() {
            effects.switch_to(scheduler.current());
        }
        Self { effects, scheduler }
    }

    /// Builds an engine from configuration, with the first effect change due one
    /// interval after `clock.now()`.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the configuration does not validate.
    pub fn from_config(config: &CubeConfig, clock: &impl Clock) -> Result<Self, ConfigError> {
        config.validate()?;
        let cycle = config.effect_cycle()?;
        let scheduler = EffectScheduler::new(cycle, config.effect_change_time, clock.now());
        let effects = EffectEngine::new(scheduler.current(), config.effect_settings());
        log::info!(
            "Cube engine ready, cycling {:?} every {} ticks",
            scheduler.cycle().kinds(),
            config.effect_change_time
        );
        Ok(Self { effects, scheduler })
    }

    /// Runs one outer tick: poll the scheduler, step the active effect, hand the frame
    /// to `sink`.
    pub fn render_once<C, R, S>(&mut self, clock: &C, rng: &mut R, sink: &mut S)
    where
        C: Clock,
        R: RandomSource,
        S: FrameSink,
    {
        if let Some(next) = self.scheduler.poll(clock.now()) {
            self.effects.switch_to(next);
        }
        self.effects.step(rng);
        sink.consume(&self.effects.frame());
    }

    /// The active effect kind.
    pub fn current_effect(&self) -> EffectKind {
        self.effects.current()
    }

    /// The live cube.
    pub fn cube(&self) -> &VoxelCube {
        self.effects.cube()
    }

    /// A snapshot of the live cube.
    pub fn frame(&self) -> Frame {
        self.effects.frame()
    }
}
