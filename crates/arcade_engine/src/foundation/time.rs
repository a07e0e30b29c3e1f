//! Time measurement utilities
//!
//! The simulation itself never reads the wall clock; `Stopwatch` is only used
//! to time systems when a diagnostics listener asks for it.

use std::time::{Duration, Instant};

/// Ticks per second the simulation's `delta_time` is expressed against
pub const TICKS_PER_SECOND: f32 = 60.0;

/// Timers within this many seconds of zero count as expired; absorbs the
/// rounding accumulated by repeated 1/60 steps.
pub const TIMER_EPSILON: f32 = 1e-4;

/// Convert a tick-relative delta (1.0 == one tick at 60 Hz) to seconds
pub fn ticks_to_seconds(delta_time: f32) -> f32 {
    delta_time / TICKS_PER_SECOND
}

/// Whether a countdown value has run out
pub fn timer_expired(time_left: f32) -> bool {
    time_left <= TIMER_EPSILON
}

/// Lap timer for per-system wall time
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    lap_start: Option<Instant>,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// A stopwatch that has not started a lap
    pub const fn new() -> Self {
        Self { lap_start: None }
    }

    /// Begin a new lap from now
    pub fn restart(&mut self) {
        self.lap_start = Some(Instant::now());
    }

    /// Time since the current lap began, zero before the first lap
    pub fn elapsed(&self) -> Duration {
        self.lap_start.map_or(Duration::ZERO, |start| start.elapsed())
    }

    /// Whether a lap has been started
    pub const fn is_running(&self) -> bool {
        self.lap_start.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_to_seconds() {
        assert!((ticks_to_seconds(60.0) - 1.0).abs() < f32::EPSILON);
        assert!((ticks_to_seconds(1.0) - 1.0 / 60.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_sixty_ticks_expire_one_second() {
        let mut time_left = 1.0f32;
        for _ in 0..59 {
            time_left -= ticks_to_seconds(1.0);
            assert!(!timer_expired(time_left));
        }
        time_left -= ticks_to_seconds(1.0);
        assert!(timer_expired(time_left));
    }

    #[test]
    fn test_stopwatch_laps() {
        let mut stopwatch = Stopwatch::new();
        assert!(!stopwatch.is_running());
        assert_eq!(stopwatch.elapsed(), Duration::ZERO);

        stopwatch.restart();
        assert!(stopwatch.is_running());
        let first = stopwatch.elapsed();
        assert!(stopwatch.elapsed() >= first);
    }
}
