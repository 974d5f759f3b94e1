//! Scalar timelines.
//!
//! A [`Ramp`] is a pure description of one animated value: where it starts
//! on the effect clock, how long it runs, the two values it moves between
//! and the curve it follows. Sampling never mutates anything, so a ramp can
//! be evaluated for any time, in any order.

use crate::easing::Easing;

/// One animated scalar on the effect clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    /// Effect time (ms) at which the ramp starts moving.
    pub start_ms: i64,
    /// Duration (ms) of the motion.
    pub duration_ms: i64,
    /// Value before and at the start.
    pub from: f32,
    /// Value at and after the end.
    pub to: f32,
    /// Curve applied to linear progress.
    pub easing: Easing,
}

impl Ramp {
    /// Creates a ramp that starts at effect time 0.
    ///
    /// Negative durations are treated as 0.
    #[must_use]
    pub fn new(duration_ms: i64, from: f32, to: f32, easing: Easing) -> Self {
        Self {
            start_ms: 0,
            duration_ms: duration_ms.max(0),
            from,
            to,
            easing,
        }
    }

    /// Moves the start to `start_ms`.
    #[must_use]
    pub const fn starting_at(mut self, start_ms: i64) -> Self {
        self.start_ms = start_ms;
        self
    }

    /// Delays the start by `delay_ms` relative to the current start.
    #[must_use]
    pub const fn with_delay(mut self, delay_ms: i64) -> Self {
        self.start_ms = self.start_ms.saturating_add(delay_ms);
        self
    }

    /// Effect time (ms) at which the ramp reaches `to`.
    ///
    /// Saturates at `i64::MAX`, which is never reached.
    #[inline]
    #[must_use]
    pub const fn end_ms(&self) -> i64 {
        self.start_ms.saturating_add(self.duration_ms)
    }

    /// Linear progress in `[0, 1]` at `elapsed_ms`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self, elapsed_ms: i64) -> f32 {
        if elapsed_ms >= self.end_ms() {
            return 1.0;
        }
        if elapsed_ms <= self.start_ms {
            return 0.0;
        }
        elapsed_ms.saturating_sub(self.start_ms) as f32 / self.duration_ms as f32
    }

    /// Eased progress in `[0, 1]` at `elapsed_ms`.
    #[inline]
    #[must_use]
    pub fn eased(&self, elapsed_ms: i64) -> f32 {
        self.easing.apply(self.progress(elapsed_ms))
    }

    /// Value at `elapsed_ms`.
    ///
    /// Exactly `from` before the start and exactly `to` once complete.
    #[must_use]
    pub fn sample(&self, elapsed_ms: i64) -> f32 {
        if self.is_complete(elapsed_ms) {
            return self.to;
        }
        if elapsed_ms <= self.start_ms {
            return self.from;
        }
        self.from + (self.to - self.from) * self.eased(elapsed_ms)
    }

    /// Returns true once the ramp has reached `to`.
    #[inline]
    #[must_use]
    pub const fn is_complete(&self, elapsed_ms: i64) -> bool {
        elapsed_ms >= self.end_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_ramp() {
        let ramp = Ramp::new(1_000, 0.0, 10.0, Easing::Linear);

        assert_eq!(ramp.sample(-50), 0.0);
        assert_eq!(ramp.sample(0), 0.0);
        assert!((ramp.sample(250) - 2.5).abs() < 1e-5);
        assert_eq!(ramp.sample(1_000), 10.0);
        assert_eq!(ramp.sample(5_000), 10.0);
    }

    #[test]
    fn test_delay_holds_from_value() {
        let ramp = Ramp::new(1_000, 1.0, 0.0, Easing::Linear)
            .starting_at(300)
            .with_delay(1_000);

        assert_eq!(ramp.start_ms, 1_300);
        assert_eq!(ramp.sample(1_299), 1.0);
        assert!(!ramp.is_complete(2_299));
        assert!(ramp.is_complete(2_300));
        assert_eq!(ramp.sample(2_300), 0.0);
    }

    #[test]
    fn test_accelerate_lags_linear() {
        let linear = Ramp::new(2_000, 0.0, 1.0, Easing::Linear);
        let accel = Ramp { easing: Easing::Accelerate, ..linear };

        for t in (100..2_000).step_by(100) {
            assert!(accel.sample(t) < linear.sample(t));
        }
    }

    #[test]
    fn test_zero_duration_jumps() {
        let ramp = Ramp::new(0, 3.0, 7.0, Easing::Linear).starting_at(100);

        assert_eq!(ramp.sample(99), 3.0);
        assert_eq!(ramp.sample(100), 7.0);
        assert_eq!(ramp.progress(100), 1.0);
    }

    #[test]
    fn test_negative_duration_is_zero() {
        let ramp = Ramp::new(-10, 0.0, 1.0, Easing::Linear);
        assert_eq!(ramp.duration_ms, 0);
        assert!(ramp.is_complete(0));
    }

    #[test]
    fn test_huge_duration_never_completes() {
        let ramp = Ramp::new(i64::MAX, 1.0, 0.0, Easing::Linear).starting_at(5_000);

        assert_eq!(ramp.end_ms(), i64::MAX);
        assert!(!ramp.is_complete(1_000_000));
        assert!(ramp.sample(1_000_000) > 0.99);
        assert!(ramp.is_complete(i64::MAX));

        let delayed = ramp.with_delay(i64::MAX);
        assert_eq!(delayed.start_ms, i64::MAX);
        assert_eq!(delayed.sample(i64::MAX - 1), 1.0);
    }
}
