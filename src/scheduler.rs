//! Tick scheduling between the host loop and the engines.
//!
//! Engines never read a clock. The host measures frame time with a
//! [`FrameClock`] and either hands the delta straight to a frame-driven engine
//! or converts it into discrete steps with a [`FixedStep`].

use crate::constants::MAX_FRAME_DELTA_MS;
use std::time::Instant;

/// Converts variable frame deltas into whole fixed-interval steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedStep {
    interval_ms: u64,
    accumulated_ms: u64,
}

impl FixedStep {
    /// Panics if `interval_ms` is zero.
    pub fn new(interval_ms: u64) -> Self {
        assert!(interval_ms > 0, "step interval must be positive");
        Self {
            interval_ms,
            accumulated_ms: 0,
        }
    }

    /// Add `dt_ms` of elapsed time and return how many steps are now due.
    ///
    /// `dt_ms` is clamped so a stall (suspend, debugger) does not replay
    /// seconds of movement at once.
    pub fn advance(&mut self, dt_ms: u64) -> u32 {
        self.accumulated_ms += dt_ms.min(MAX_FRAME_DELTA_MS);
        let steps = self.accumulated_ms / self.interval_ms;
        self.accumulated_ms %= self.interval_ms;
        steps as u32
    }

    /// Drop any partial step.
    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}

/// Measures wall time between host frames.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Milliseconds since the previous call (or since construction).
    pub fn tick(&mut self) -> u64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last).as_millis() as u64;
        self.last = now;
        elapsed
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
