//! # Effect Scheduler
//!
//! Decides which effect is active. The scheduler holds an ordered cycle of effect kinds
//! and a deadline; once the clock passes the deadline it moves to the next kind in the
//! cycle and pushes the deadline one interval further.
//!
//! The cycle is configuration, not code: any non-empty sequence of kinds from the
//! catalogue can be used, repeats included.

use crate::config::ConfigError;
use crate::core::Tick;

use super::effects::EffectKind;

/// Default time between two effect changes, in clock ticks.
pub const EFFECT_CHANGE_TIME: Tick = 3000;

/// A non-empty, ordered list of effect kinds to cycle through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectCycle {
    kinds: Vec<EffectKind>,
}

impl EffectCycle {
    /// Validates `kinds` into a cycle.
    ///
    /// # Errors
    /// Returns [`ConfigError::EmptyCycle`] when `kinds` is empty.
    pub fn new(kinds: Vec<EffectKind>) -> Result<Self, ConfigError> {
        if kinds.is_empty() {
            return Err(ConfigError::EmptyCycle);
        }
        Ok(Self { kinds })
    }

    /// The kinds in cycle order.
    pub fn kinds(&self) -> &[EffectKind] {
        &self.kinds
    }

    /// Number of entries in the cycle.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Always `false`; a cycle cannot be empty.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Default for EffectCycle {
    /// Lit, then Rain, then CubeJump.
    fn default() -> Self {
        Self {
            kinds: vec![EffectKind::Lit, EffectKind::Rain, EffectKind::CubeJump],
        }
    }
}

/// Tracks the active effect and when to move on from it.
///
/// # Examples
/// ```
/// use led_cube::engine_state::effects::EffectKind;
/// use led_cube::engine_state::scheduler::{EffectCycle, EffectScheduler};
///
/// let mut scheduler = EffectScheduler::new(EffectCycle::default(), 100, 0);
/// assert_eq!(scheduler.current(), EffectKind::Lit);
/// assert_eq!(scheduler.poll(100), None);
/// assert_eq!(scheduler.poll(101), Some(EffectKind::Rain));
/// ```
#[derive(Clone, Debug)]
pub struct EffectScheduler {
    cycle: EffectCycle,
    position: usize,
    interval: Tick,
    target_time: Tick,
}

impl EffectScheduler {
    /// Starts at the first kind of `cycle`, with the first change due at
    /// `now + interval`.
    pub fn new(cycle: EffectCycle, interval: Tick, now: Tick) -> Self {
        Self {
            cycle,
            position: 0,
            interval,
            target_time: now.saturating_add(interval),
        }
    }

    /// The active effect kind.
    pub fn current(&self) -> EffectKind {
        self.cycle.kinds[self.position]
    }

    /// The tick after which the next change happens.
    pub fn target_time(&self) -> Tick {
        self.target_time
    }

    /// The configured cycle.
    pub fn cycle(&self) -> &EffectCycle {
        &self.cycle
    }

    /// Checks the deadline against `now`.
    ///
    /// # Returns
    /// The newly selected kind if the deadline has passed, in which case the next
    /// deadline is `now + interval`. `None` otherwise.
    pub fn poll(&mut self, now: Tick) -> Option<EffectKind> {
        if now <= self.target_time {
            return None;
        }
        self.target_time = now.saturating_add(self.interval);
        self.position = (self.position + 1) % self.cycle.len();
        Some(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cycle_is_rejected() {
        assert!(matches!(EffectCycle::new(vec![]), Err(ConfigError::EmptyCycle)));
    }

    #[test]
    fn test_advances_once_past_deadline() {
        let t = EFFECT_CHANGE_TIME;
        let mut scheduler = EffectScheduler::new(EffectCycle::default(), t, 0);
        assert_eq!(scheduler.poll(t), None);
        assert_eq!(scheduler.poll(t + 1), Some(EffectKind::Rain));
        assert_eq!(scheduler.current(), EffectKind::Rain);
        assert_eq!(scheduler.target_time(), 2 * t + 1);
        assert_eq!(scheduler.poll(t + 1), None);
    }

    #[test]
    fn test_cycle_wraps() {
        let cycle = EffectCycle::new(vec![EffectKind::Glow, EffectKind::Text]).unwrap();
        let mut scheduler = EffectScheduler::new(cycle, 10, 0);
        let mut now = 0;
        let mut seen = vec![scheduler.current()];
        for _ in 0..3 {
            now += 11;
            seen.extend(scheduler.poll(now));
        }
        assert_eq!(
            seen,
            vec![EffectKind::Glow, EffectKind::Text, EffectKind::Glow, EffectKind::Text]
        );
    }

    #[test]
    fn test_late_poll_does_not_burst() {
        let mut scheduler = EffectScheduler::new(EffectCycle::default(), 10, 0);
        assert_eq!(scheduler.poll(1000), Some(EffectKind::Rain));
        assert_eq!(scheduler.poll(1001), None);
    }
}
