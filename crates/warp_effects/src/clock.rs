//! # Frame Clock
//!
//! Turns raw host timestamps into `(elapsed, delta)` ticks. The host calls
//! [`FrameClock::advance`] once per display frame and forwards the tick to
//! [`crate::WarpEffect::on_tick`].

/// One clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tick {
    /// Milliseconds since the clock was started.
    pub elapsed_ms: i64,
    /// Milliseconds since the previous tick. Never negative.
    pub delta_ms: i64,
}

/// Continuous time source for the effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    /// Timestamp of the last start, `None` while stopped.
    started_at: Option<i64>,
    /// Timestamp of the previous tick.
    last_ms: i64,
}

impl FrameClock {
    /// Creates a stopped clock.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            started_at: None,
            last_ms: 0,
        }
    }

    /// Starts the clock at `now_ms`. Does nothing if already running.
    pub fn start(&mut self, now_ms: i64) {
        if self.started_at.is_none() {
            self.started_at = Some(now_ms);
            self.last_ms = now_ms;
        }
    }

    /// Stops the clock. The next start counts elapsed time from zero.
    pub fn stop(&mut self) {
        self.started_at = None;
    }

    /// Returns true while the clock is running.
    #[inline]
    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Produces the tick for `now_ms`, or `None` while stopped.
    ///
    /// A timestamp older than the previous one yields a zero delta and does
    /// not move the clock backwards.
    pub fn advance(&mut self, now_ms: i64) -> Option<Tick> {
        let started_at = self.started_at?;
        let now_ms = now_ms.max(self.last_ms);

        let tick = Tick {
            elapsed_ms: now_ms - started_at,
            delta_ms: now_ms - self.last_ms,
        };
        self.last_ms = now_ms;
        Some(tick)
    }
}
