//! Frame timing
//!
//! Converts wall time between frames into normalized delta-time, where 1.0 is
//! one frame at the 60 Hz baseline. Movement, acceleration and cosmetic
//! timers scale by dt; spawn cadence counts whole `tick` calls and does not.

use std::thread;
use std::time::{Duration, Instant};

use crate::consts::BASELINE_FRAME_MS;

/// Convert an elapsed duration into baseline-frame units
#[inline]
pub fn normalized_dt(elapsed: Duration) -> f32 {
    elapsed.as_secs_f32() * 1000.0 / BASELINE_FRAME_MS
}

/// Frame limiter and dt source
#[derive(Debug, Clone)]
pub struct Clock {
    last: Instant,
    /// Minimum frame duration (zero = uncapped)
    frame_budget: Duration,
}

impl Clock {
    /// Create a clock capped at `target_fps` (0 disables the cap)
    pub fn new(target_fps: u32) -> Self {
        let frame_budget = if target_fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / target_fps as f64)
        };
        Self {
            last: Instant::now(),
            frame_budget,
        }
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// Wait out the rest of the frame budget, then return normalized dt
    /// since the previous call
    pub fn tick(&mut self) -> f32 {
        let elapsed = self.last.elapsed();
        if elapsed < self.frame_budget {
            thread::sleep(self.frame_budget - elapsed);
        }
        self.tick_at(Instant::now())
    }

    /// Record a frame boundary at `now` without sleeping
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        normalized_dt(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_baseline_frame_is_unit_dt() {
        let dt = normalized_dt(Duration::from_micros(16_667));
        assert!((dt - 1.0).abs() < 0.001);
    }

    #[test]
    fn dt_scales_with_elapsed_time() {
        let dt = normalized_dt(Duration::from_millis(50));
        assert!((dt - 3.0).abs() < 0.001);
        assert_eq!(normalized_dt(Duration::ZERO), 0.0);
    }

    #[test]
    fn tick_at_measures_since_previous_call() {
        let mut clock = Clock::new(60);
        let start = Instant::now();
        clock.tick_at(start);
        let dt = clock.tick_at(start + Duration::from_millis(33));
        assert!((dt - 1.98).abs() < 0.01);
        // A timestamp before the last one yields zero rather than panicking
        assert_eq!(clock.tick_at(start), 0.0);
    }

    #[test]
    fn tick_respects_frame_budget() {
        let mut clock = Clock::new(100);
        let dt = clock.tick();
        // At least 10 ms elapsed, i.e. 0.6 baseline frames
        assert!(dt >= 0.59, "dt was {dt}");
    }

    #[test]
    fn zero_target_is_uncapped() {
        assert_eq!(Clock::new(0).frame_budget(), Duration::ZERO);
    }
}
