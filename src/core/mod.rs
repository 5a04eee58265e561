//! # Core Module
//!
//! This module provides the collaborator contracts the effect engine is driven through.
//! The engine never reads a clock, seeds a generator or touches hardware directly; it
//! only talks to the three traits defined here.
//!
//! ## Key Components
//! - `Clock`: Monotonic tick source used by the scheduler to compare against deadlines
//! - `RandomSource`: Uniform half-open integer draws used for effect placement
//! - `FrameSink`: Consumer of the finished frame, once per outer tick
//!
//! Each trait ships with a default implementation for native builds:
//! `MonotonicClock`, `FastRandom` and `LoggingFrameSink`.
//!
//! ## Usage
//! ```rust
//! use led_cube::core::{FastRandom, RandomSource};
//!
//! let mut rng = FastRandom::seeded(7);
//! let value = rng.uniform_int(0, 5);
//! assert!((0..5).contains(&value));
//! ```

pub mod clock;
pub mod frame_sink;
pub mod random;

pub use clock::{Clock, MonotonicClock, Tick};
pub use frame_sink::{FrameSink, LoggingFrameSink};
pub use random::{FastRandom, RandomSource};

/// Deterministic collaborators shared by the unit tests.
#[cfg(test)]
pub(crate) mod testing {
    use std::cell::Cell;
    use std::collections::VecDeque;

    use super::{Clock, FrameSink, RandomSource, Tick};
    use crate::engine_state::voxels::cube::Frame;

    /// Replays a fixed list of draws, clamped into the requested range.
    /// Falls back to `low` once the script runs out.
    pub struct ScriptedRandom {
        draws: VecDeque<i32>,
    }

    impl ScriptedRandom {
        pub fn new(draws: &[i32]) -> Self {
            Self {
                draws: draws.iter().copied().collect(),
            }
        }
    }

    impl RandomSource for ScriptedRandom {
        fn uniform_int(&mut self, low: i32, high: i32) -> i32 {
            match self.draws.pop_front() {
                Some(value) if high > low => value.clamp(low, high - 1),
                _ => low,
            }
        }
    }

    /// A clock the test moves by hand.
    #[derive(Default)]
    pub struct ManualClock {
        pub now: Cell<Tick>,
    }

    impl ManualClock {
        pub fn set(&self, tick: Tick) {
            self.now.set(tick);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Tick {
            self.now.get()
        }
    }

    /// Keeps every frame it is handed.
    #[derive(Default)]
    pub struct RecordingSink {
        pub frames: Vec<Frame>,
    }

    impl FrameSink for RecordingSink {
        fn consume(&mut self, frame: &Frame) {
            self.frames.push(*frame);
        }
    }
}
