#[cfg(test)]
#[path = "../../tests/unit/utils/timing_test.rs"]
mod timing_test;

use crate::utils::Float;
use std::time::Instant;

/// Provides the current instant in seconds. Entry times passed to reporting functions must be
/// taken from the same source which is used to compute elapsed time.
pub trait TimeSource {
    /// Returns current time in seconds.
    fn now(&self) -> Float;
}

/// A monotonic clock which measures seconds since its creation.
#[derive(Clone)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    /// Creates a new instance of `SystemClock` with origin at the current instant.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::start()
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> Float {
        (Instant::now() - self.start).as_secs_f64() as Float
    }
}

/// A clock which always returns the same instant.
#[derive(Clone, Debug)]
pub struct FixedClock {
    now: Float,
}

impl FixedClock {
    /// Creates a new instance of `FixedClock` frozen at given instant in seconds.
    pub fn new(now: Float) -> Self {
        Self { now }
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> Float {
        self.now
    }
}

/// Returns absolute amount of seconds between `entry_time` and the current instant of the time source.
/// The absolute value makes it tolerant to a time source which is not strictly monotonic.
pub fn elapsed_since(time_source: &dyn TimeSource, entry_time: Float) -> Float {
    (time_source.now() - entry_time).abs()
}
