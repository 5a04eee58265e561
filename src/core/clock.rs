//! Time sources for the scheduler.
//!
//! Ticks are milliseconds on the native clock; tests drive the engine with their own
//! [`Clock`] implementations.

use web_time::Instant;

/// One discrete unit of time as reported by a [`Clock`].
///
/// The engine is unit-agnostic: it only adds fixed offsets to ticks and compares them.
pub type Tick = u64;

/// A monotonic time source.
///
/// Implementations must never return a value smaller than one they returned before.
pub trait Clock {
    /// Returns the current tick.
    fn now(&self) -> Tick;
}

/// A [`Clock`] counting milliseconds since it was created.
///
/// Backed by `web_time::Instant` so the same code runs natively and in the browser.
///
/// # Examples
/// ```
/// use led_cube::core::{Clock, MonotonicClock};
///
/// let clock = MonotonicClock::new();
/// let first = clock.now();
/// assert!(clock.now() >= first);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    /// Creates a clock whose tick zero is "now".
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Tick {
        self.start.elapsed().as_millis() as Tick
    }
}
